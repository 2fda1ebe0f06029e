use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::tests::support::topic_fixtures::sample_topic;
use crate::topic::application::domain::entities::{Topic, TopicId};
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicError, CreateTopicUseCase, DeleteTopicError, DeleteTopicUseCase,
    GetFilteredTopicsError, GetFilteredTopicsUseCase, GetPaginatedTopicsError,
    GetPaginatedTopicsUseCase, GetTopicError, GetTopicUseCase, GetTopicsError, GetTopicsUseCase,
    TopicCommand, UpdateTopicError, UpdateTopicUseCase,
};
use crate::topic::application::ports::outgoing::{PageRequest, PageResult, TopicSort};

// ============================================================
// Create
// ============================================================

#[derive(Clone)]
pub struct StubCreateTopicUseCase {
    result: Result<Topic, CreateTopicError>,
}

impl StubCreateTopicUseCase {
    pub fn success(topic: Topic) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn already_exists() -> Self {
        Self {
            result: Err(CreateTopicError::TopicAlreadyExists),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateTopicError::RepositoryError(msg.to_string())),
        }
    }
}

impl Default for StubCreateTopicUseCase {
    fn default() -> Self {
        Self::success(sample_topic(1, "Rust"))
    }
}

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: TopicCommand) -> Result<Topic, CreateTopicError> {
        self.result.clone()
    }
}

// ============================================================
// List
// ============================================================

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<Vec<Topic>, GetTopicsError>,
}

impl StubGetTopicsUseCase {
    pub fn success(topics: Vec<Topic>) -> Self {
        Self { result: Ok(topics) }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: Err(GetTopicsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self) -> Result<Vec<Topic>, GetTopicsError> {
        self.result.clone()
    }
}

// ============================================================
// Detail
// ============================================================

#[derive(Clone)]
pub struct StubGetTopicUseCase {
    result: Result<Topic, GetTopicError>,
}

impl StubGetTopicUseCase {
    pub fn found(topic: Topic) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetTopicError::TopicNotFound),
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: Err(GetTopicError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(&self, _id: TopicId) -> Result<Topic, GetTopicError> {
        self.result.clone()
    }
}

// ============================================================
// Update
// ============================================================

/// On success, applies the command to the base topic under the requested id.
#[derive(Clone)]
pub struct StubUpdateTopicUseCase {
    result: Result<Topic, UpdateTopicError>,
}

impl StubUpdateTopicUseCase {
    pub fn updating(base: Topic) -> Self {
        Self { result: Ok(base) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(UpdateTopicError::TopicNotFound),
        }
    }
}

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(&self, id: TopicId, command: TopicCommand) -> Result<Topic, UpdateTopicError> {
        let mut topic = self.result.clone()?;
        topic.id = id;
        topic.apply(command.into_fields());
        Ok(topic)
    }
}

// ============================================================
// Delete
// ============================================================

#[derive(Clone)]
pub struct StubDeleteTopicUseCase {
    result: Result<Topic, DeleteTopicError>,
}

impl StubDeleteTopicUseCase {
    pub fn deleted(topic: Topic) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(DeleteTopicError::TopicNotFound),
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: Err(DeleteTopicError::DatabaseError(msg.to_string())),
        }
    }
}

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _id: TopicId) -> Result<Topic, DeleteTopicError> {
        self.result.clone()
    }
}

// ============================================================
// Paginated (records requests)
// ============================================================

#[derive(Clone)]
pub struct StubGetPaginatedTopicsUseCase {
    result: Result<PageResult<Topic>, GetPaginatedTopicsError>,
    calls: Arc<Mutex<Vec<(PageRequest, TopicSort)>>>,
}

impl StubGetPaginatedTopicsUseCase {
    pub fn success(page: PageResult<Topic>) -> Self {
        Self {
            result: Ok(page),
            calls: Arc::default(),
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: Err(GetPaginatedTopicsError::QueryFailed(msg.to_string())),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<(PageRequest, TopicSort)>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl GetPaginatedTopicsUseCase for StubGetPaginatedTopicsUseCase {
    async fn execute(
        &self,
        page: PageRequest,
        sort: TopicSort,
    ) -> Result<PageResult<Topic>, GetPaginatedTopicsError> {
        self.calls.lock().unwrap().push((page, sort));
        self.result.clone()
    }
}

// ============================================================
// Filtered (records requests)
// ============================================================

#[derive(Clone)]
pub struct StubGetFilteredTopicsUseCase {
    result: Result<Vec<Topic>, GetFilteredTopicsError>,
    calls: Arc<Mutex<Vec<(String, i32)>>>,
}

impl StubGetFilteredTopicsUseCase {
    pub fn success(topics: Vec<Topic>) -> Self {
        Self {
            result: Ok(topics),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<(String, i32)>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl GetFilteredTopicsUseCase for StubGetFilteredTopicsUseCase {
    async fn execute(
        &self,
        course: String,
        year: i32,
    ) -> Result<Vec<Topic>, GetFilteredTopicsError> {
        self.calls.lock().unwrap().push((course, year));
        self.result.clone()
    }
}
