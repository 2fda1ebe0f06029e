use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::Topic,
    ports::incoming::use_cases::{GetFilteredTopicsError, GetFilteredTopicsUseCase},
    ports::outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct GetFilteredTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetFilteredTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetFilteredTopicsUseCase for GetFilteredTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        course: String,
        year: i32,
    ) -> Result<Vec<Topic>, GetFilteredTopicsError> {
        self.query
            .find_by_course_and_year(&course, year)
            .await
            .map_err(|e| GetFilteredTopicsError::QueryFailed(e.to_string()))
    }
}
