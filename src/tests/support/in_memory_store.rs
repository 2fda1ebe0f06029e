use async_trait::async_trait;
use chrono::{Datelike, NaiveDateTime};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::topic::application::domain::entities::{
    now_local, NewTopic, Reply, Topic, TopicFields, TopicId,
};
use crate::topic::application::ports::outgoing::{
    PageRequest, PageResult, SortDirection, TopicQuery, TopicQueryError, TopicRepository,
    TopicRepositoryError, TopicSort, TopicSortProperty,
};

#[derive(Default)]
struct StoreState {
    topics: BTreeMap<TopicId, Topic>,
    replies: Vec<Reply>,
    next_id: i64,
}

impl StoreState {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared, clonable topic store implementing both store ports.
#[derive(Clone, Default)]
pub struct InMemoryTopicStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryTopicStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap()
    }

    /// Seeds a topic with an explicit creation time.
    pub fn seed(&self, fields: TopicFields, created_at: NaiveDateTime) -> Topic {
        let mut state = self.lock();
        let id = state.allocate_id();
        let topic = Topic {
            id,
            title: fields.title,
            message: fields.message,
            created_at,
            status: fields.status,
            author: fields.author,
            course: fields.course,
        };
        state.topics.insert(id, topic.clone());
        topic
    }

    pub fn add_reply(&self, topic_id: TopicId, message: &str) -> Reply {
        let mut state = self.lock();
        let id = state.allocate_id();
        let reply = Reply {
            id,
            message: message.to_string(),
            topic_id,
            created_at: now_local(),
            author_id: None,
            solution: false,
        };
        state.replies.push(reply.clone());
        reply
    }

    pub fn reply_count(&self, topic_id: TopicId) -> usize {
        self.lock()
            .replies
            .iter()
            .filter(|r| r.topic_id == topic_id)
            .count()
    }

    pub fn topic_count(&self) -> usize {
        self.lock().topics.len()
    }
}

#[async_trait]
impl TopicQuery for InMemoryTopicStore {
    async fn list_all(&self) -> Result<Vec<Topic>, TopicQueryError> {
        Ok(self.lock().topics.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TopicId) -> Result<Option<Topic>, TopicQueryError> {
        Ok(self.lock().topics.get(&id).cloned())
    }

    async fn find_by_title_and_message(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Option<Topic>, TopicQueryError> {
        Ok(self
            .lock()
            .topics
            .values()
            .find(|t| t.title == title && t.message == message)
            .cloned())
    }

    async fn find_by_course_and_year(
        &self,
        course: &str,
        year: i32,
    ) -> Result<Vec<Topic>, TopicQueryError> {
        let mut topics: Vec<Topic> = self
            .lock()
            .topics
            .values()
            .filter(|t| t.course == course && t.created_at.year() == year)
            .cloned()
            .collect();
        topics.sort_by_key(|t| t.created_at);
        Ok(topics)
    }

    async fn list_paginated(
        &self,
        page: PageRequest,
        sort: TopicSort,
    ) -> Result<PageResult<Topic>, TopicQueryError> {
        let mut topics: Vec<Topic> = self.lock().topics.values().cloned().collect();

        topics.sort_by(|a, b| {
            let ord = compare(a, b, sort.property);
            let ord = match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            };
            ord.then(a.id.cmp(&b.id))
        });

        let total = topics.len() as u64;
        let items = topics
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            size: page.size,
            total,
        })
    }
}

fn compare(a: &Topic, b: &Topic, property: TopicSortProperty) -> Ordering {
    match property {
        TopicSortProperty::Id => a.id.cmp(&b.id),
        TopicSortProperty::Title => a.title.cmp(&b.title),
        TopicSortProperty::Message => a.message.cmp(&b.message),
        TopicSortProperty::CreatedAt => a.created_at.cmp(&b.created_at),
        TopicSortProperty::Status => a.status.cmp(&b.status),
        TopicSortProperty::Author => a.author.cmp(&b.author),
        TopicSortProperty::Course => a.course.cmp(&b.course),
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopicStore {
    async fn create_topic(&self, data: NewTopic) -> Result<Topic, TopicRepositoryError> {
        Ok(self.seed(data.fields, data.created_at))
    }

    async fn update_topic(
        &self,
        id: TopicId,
        fields: TopicFields,
    ) -> Result<Topic, TopicRepositoryError> {
        let mut state = self.lock();
        let topic = state
            .topics
            .get_mut(&id)
            .ok_or(TopicRepositoryError::TopicNotFound)?;
        topic.apply(fields);
        Ok(topic.clone())
    }

    async fn delete_topic(&self, id: TopicId) -> Result<(), TopicRepositoryError> {
        let mut state = self.lock();

        if state.topics.remove(&id).is_none() {
            return Err(TopicRepositoryError::TopicNotFound);
        }
        state.replies.retain(|r| r.topic_id != id);
        Ok(())
    }
}
