use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use crate::topic::application::domain::entities::{
    NewTopic, Topic, TopicFields, TopicId,
};
use crate::topic::application::ports::outgoing::{
    PageRequest, PageResult, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
    TopicSort,
};

mock! {
    pub TopicQueryMock {}
    #[async_trait]
    impl TopicQuery for TopicQueryMock {
        async fn list_all(&self) -> Result<Vec<Topic>, TopicQueryError>;

        async fn find_by_id(&self, id: TopicId) -> Result<Option<Topic>, TopicQueryError>;

        async fn find_by_title_and_message(
            &self,
            title: &str,
            message: &str,
        ) -> Result<Option<Topic>, TopicQueryError>;

        async fn find_by_course_and_year(
            &self,
            course: &str,
            year: i32,
        ) -> Result<Vec<Topic>, TopicQueryError>;

        async fn list_paginated(
            &self,
            page: PageRequest,
            sort: TopicSort,
        ) -> Result<PageResult<Topic>, TopicQueryError>;
    }
}

mock! {
    pub TopicRepositoryMock {}
    #[async_trait]
    impl TopicRepository for TopicRepositoryMock {
        async fn create_topic(&self, data: NewTopic) -> Result<Topic, TopicRepositoryError>;

        async fn update_topic(
            &self,
            id: TopicId,
            fields: TopicFields,
        ) -> Result<Topic, TopicRepositoryError>;

        async fn delete_topic(&self, id: TopicId) -> Result<(), TopicRepositoryError>;
    }
}

pub fn sample_topic(id: TopicId, title: &str) -> Topic {
    Topic {
        id,
        title: title.to_string(),
        message: format!("Mensaje de {}", title),
        created_at: NaiveDate::from_ymd_opt(2023, 5, 2)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap(),
        status: "ABIERTO".to_string(),
        author: "ana".to_string(),
        course: "Rust".to_string(),
    }
}

pub fn db_error(msg: &str) -> TopicQueryError {
    TopicQueryError::DatabaseError(msg.to_string())
}
