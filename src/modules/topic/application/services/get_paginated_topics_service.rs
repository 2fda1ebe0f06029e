use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::Topic,
    ports::incoming::use_cases::{GetPaginatedTopicsError, GetPaginatedTopicsUseCase},
    ports::outgoing::{PageRequest, PageResult, TopicQuery, TopicSort},
};

#[derive(Debug, Clone)]
pub struct GetPaginatedTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetPaginatedTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPaginatedTopicsUseCase for GetPaginatedTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        page: PageRequest,
        sort: TopicSort,
    ) -> Result<PageResult<Topic>, GetPaginatedTopicsError> {
        self.query
            .list_paginated(page, sort)
            .await
            .map_err(|e| GetPaginatedTopicsError::QueryFailed(e.to_string()))
    }
}
