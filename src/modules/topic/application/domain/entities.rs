use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub type TopicId = i64;
pub type ReplyId = i64;
pub type ProfileId = i64;

/// Server clock in local time, the only source of creation timestamps.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// The caller-controlled part of a topic. Replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicFields {
    pub title: String,
    pub message: String,
    pub status: String,
    pub author: String,
    pub course: String,
}

/// A topic that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTopic {
    pub fields: TopicFields,
    pub created_at: NaiveDateTime,
}

impl NewTopic {
    pub fn new(fields: TopicFields) -> Self {
        Self {
            fields,
            created_at: now_local(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    pub message: String,
    pub created_at: NaiveDateTime,
    pub status: String,
    pub author: String,
    pub course: String,
}

impl Topic {
    pub fn fields(&self) -> TopicFields {
        TopicFields {
            title: self.title.clone(),
            message: self.message.clone(),
            status: self.status.clone(),
            author: self.author.clone(),
            course: self.course.clone(),
        }
    }

    /// Full-field replace. Identity and creation time are kept.
    pub fn apply(&mut self, fields: TopicFields) {
        self.title = fields.title;
        self.message = fields.message;
        self.status = fields.status;
        self.author = fields.author;
        self.course = fields.course;
    }
}

/// A reply owned by exactly one topic. Removed together with its topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: ReplyId,
    pub message: String,
    pub topic_id: TopicId,
    pub created_at: NaiveDateTime,
    pub author_id: Option<ProfileId>,
    pub solution: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
}
