use async_trait::async_trait;

use crate::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetFilteredTopicsError {
    #[error("Failed to filter topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetFilteredTopicsUseCase: Send + Sync {
    async fn execute(&self, course: String, year: i32)
        -> Result<Vec<Topic>, GetFilteredTopicsError>;
}
