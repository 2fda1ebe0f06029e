use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::Topic,
    ports::outgoing::{PageRequest, PageResult, TopicSort},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPaginatedTopicsError {
    #[error("Failed to fetch topic page: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPaginatedTopicsUseCase: Send + Sync {
    async fn execute(
        &self,
        page: PageRequest,
        sort: TopicSort,
    ) -> Result<PageResult<Topic>, GetPaginatedTopicsError>;
}
