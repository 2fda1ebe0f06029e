mod create_topic_use_case;
mod delete_topic_use_case;
mod get_filtered_topics_use_case;
mod get_paginated_topics_use_case;
mod get_topic_use_case;
mod get_topics_use_case;
mod topic_command;
mod update_topic_use_case;

pub use create_topic_use_case::{CreateTopicError, CreateTopicUseCase};
pub use delete_topic_use_case::{DeleteTopicError, DeleteTopicUseCase};
pub use get_filtered_topics_use_case::{GetFilteredTopicsError, GetFilteredTopicsUseCase};
pub use get_paginated_topics_use_case::{GetPaginatedTopicsError, GetPaginatedTopicsUseCase};
pub use get_topic_use_case::{GetTopicError, GetTopicUseCase};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
pub use topic_command::{
    FieldViolation, TopicCommand, TopicCommandError, TopicField, BLANK_FIELD_MESSAGE,
};
pub use update_topic_use_case::{UpdateTopicError, UpdateTopicUseCase};
