use async_trait::async_trait;

use crate::topic::application::domain::entities::{NewTopic, Topic, TopicFields, TopicId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,
}

/// Write side of the topic store.
#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Inserts and returns the persisted topic with its identity populated.
    async fn create_topic(&self, data: NewTopic) -> Result<Topic, TopicRepositoryError>;

    /// Replaces all mutable fields of an existing topic.
    async fn update_topic(
        &self,
        id: TopicId,
        fields: TopicFields,
    ) -> Result<Topic, TopicRepositoryError>;

    /// Removes the topic and every reply it owns.
    async fn delete_topic(&self, id: TopicId) -> Result<(), TopicRepositoryError>;
}
