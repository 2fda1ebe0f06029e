use async_trait::async_trait;
use tracing::debug;

use crate::topic::application::{
    domain::entities::{NewTopic, Topic},
    ports::{
        incoming::use_cases::{CreateTopicError, CreateTopicUseCase, TopicCommand},
        outgoing::{TopicQuery, TopicRepository},
    },
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateTopicUseCase for CreateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: TopicCommand) -> Result<Topic, CreateTopicError> {
        let existing = self
            .query
            .find_by_title_and_message(command.title(), command.message())
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?;

        if let Some(existing) = existing {
            debug!(existing_id = existing.id, "Rejected duplicate topic");
            return Err(CreateTopicError::TopicAlreadyExists);
        }

        self.repository
            .create_topic(NewTopic::new(command.into_fields()))
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))
    }
}
