use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::{Topic, TopicId},
    ports::incoming::use_cases::TopicCommand,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(&self, id: TopicId, command: TopicCommand) -> Result<Topic, UpdateTopicError>;
}
