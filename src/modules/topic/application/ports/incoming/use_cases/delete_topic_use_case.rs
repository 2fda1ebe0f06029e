use async_trait::async_trait;

use crate::topic::application::domain::entities::{Topic, TopicId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    /// Returns the topic as it was right before deletion.
    async fn execute(&self, id: TopicId) -> Result<Topic, DeleteTopicError>;
}
