use async_trait::async_trait;
use serde::Serialize;

use crate::topic::application::domain::entities::{Topic, TopicId};

//
// ──────────────────────────────────────────────────────────
// Paging
// ──────────────────────────────────────────────────────────
//

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 2000;

/// Zero-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Lenient construction: negative pages clamp to 0, non-positive sizes
    /// fall back to the default, oversized requests clamp to the maximum.
    /// The page is capped so the row offset always fits a Postgres BIGINT.
    pub fn from_raw(page: Option<i64>, size: Option<i64>) -> Self {
        let size = match size {
            Some(s) if s >= 1 => (s as u64).min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };
        let last_page = i64::MAX as u64 / size;
        let page = (page.unwrap_or(0).max(0) as u64).min(last_page);
        Self { page, size }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopicSortProperty {
    Id,
    Title,
    Message,
    #[default]
    CreatedAt,
    Status,
    Author,
    Course,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopicSort {
    pub property: TopicSortProperty,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total.div_ceil(self.size)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

/// Absence is never an error on this port; callers check the `Option`.
#[async_trait]
pub trait TopicQuery: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Topic>, TopicQueryError>;

    async fn find_by_id(&self, id: TopicId) -> Result<Option<Topic>, TopicQueryError>;

    /// Exact match, used for duplicate detection only.
    async fn find_by_title_and_message(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Option<Topic>, TopicQueryError>;

    /// Matches the course exactly and the year component of the creation
    /// timestamp (server-local calendar year).
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
