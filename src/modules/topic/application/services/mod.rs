mod create_topic_service;
mod delete_topic_service;
mod get_filtered_topics_service;
mod get_paginated_topics_service;
mod get_topic_service;
mod get_topics_service;
mod update_topic_service;

#[cfg(test)]
mod mocks;

pub use create_topic_service::CreateTopicService;
pub use delete_topic_service::DeleteTopicService;
pub use get_filtered_topics_service::GetFilteredTopicsService;
pub use get_paginated_topics_service::GetPaginatedTopicsService;
pub use get_topic_service::GetTopicService;
pub use get_topics_service::GetTopicsService;
pub use update_topic_service::UpdateTopicService;
