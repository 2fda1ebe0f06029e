mod create_topic;
mod delete_topic;
mod dto;
mod get_filtered_topics;
mod get_paginated_topics;
mod get_topic;
mod get_topics;
mod update_topic;

pub use create_topic::create_topic_handler;
pub use delete_topic::delete_topic_handler;
pub use dto::{
    DeletedTopicResponse, FilterQuery, PageQuery, TopicPageResponse, TopicRequest, TopicResponse,
};
pub use get_filtered_topics::get_filtered_topics_handler;
pub use get_paginated_topics::get_paginated_topics_handler;
pub use get_topic::get_topic_handler;
pub use get_topics::get_topics_handler;
pub use update_topic::update_topic_handler;

// utoipa path items, referenced from the OpenAPI document
pub use create_topic::__path_create_topic_handler;
pub use delete_topic::__path_delete_topic_handler;
pub use get_filtered_topics::__path_get_filtered_topics_handler;
pub use get_paginated_topics::__path_get_paginated_topics_handler;
pub use get_topic::__path_get_topic_handler;
pub use get_topics::__path_get_topics_handler;
pub use update_topic::__path_update_topic_handler;
