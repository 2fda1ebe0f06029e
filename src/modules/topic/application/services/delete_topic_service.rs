use async_trait::async_trait;
use tracing::info;

use crate::topic::application::{
    domain::entities::{Topic, TopicId},
    ports::{
        incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
        outgoing::{TopicQuery, TopicRepository, TopicRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct DeleteTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteTopicUseCase for DeleteTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, id: TopicId) -> Result<Topic, DeleteTopicError> {
        let snapshot = self
            .query
            .find_by_id(id)
            .await
            .map_err(|e| DeleteTopicError::DatabaseError(e.to_string()))?
            .ok_or(DeleteTopicError::TopicNotFound)?;

        self.repository
            .delete_topic(id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => DeleteTopicError::TopicNotFound,
                other => DeleteTopicError::DatabaseError(other.to_string()),
            })?;

        info!(topic_id = id, "Topic deleted with its replies");

        Ok(snapshot)
    }
}
