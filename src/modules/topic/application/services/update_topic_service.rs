use async_trait::async_trait;
use crate::topic::application::{
    domain::entities::{Topic, TopicId},
    ports::{
        incoming::use_cases::{TopicCommand, UpdateTopicError, UpdateTopicUseCase},
        outgoing::{TopicQuery, TopicRepository, TopicRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateTopicUseCase for UpdateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    /// Overwrites every mutable field. Identity and creation date are preserved.
    async fn execute(&self, id: TopicId, command: TopicCommand) -> Result<Topic, UpdateTopicError> {
        let existing = self
            .query
            .find_by_id(id)
            .await
            .map_err(|e| UpdateTopicError::RepositoryError(e.to_string()))?;

        if existing.is_none() {
            return Err(UpdateTopicError::TopicNotFound);
        }

        self.repository
            .update_topic(id, command.into_fields())
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => UpdateTopicError::TopicNotFound,
                other => UpdateTopicError::RepositoryError(other.to_string()),
            })
    }
}
