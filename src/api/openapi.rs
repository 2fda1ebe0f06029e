use utoipa::OpenApi;

use crate::shared::api::FieldError;
use crate::topic::adapter::incoming::web::routes::{
    DeletedTopicResponse, TopicPageResponse, TopicRequest, TopicResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ForoHub API",
        version = "1.0.0",
        description = "Forum backend: topics, paging and filtering"
    ),
    paths(
        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_paginated_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_filtered_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_topic_handler,
        crate::topic::adapter::incoming::web::routes::update_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic_handler,
    ),
    components(
        schemas(
            TopicRequest,
            TopicResponse,
            DeletedTopicResponse,
            TopicPageResponse,
            FieldError
        )
    ),
    tags(
        (name = "topicos", description = "Topic management endpoints"),
    )
)]
pub struct ApiDoc;
