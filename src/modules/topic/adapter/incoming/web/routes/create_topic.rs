use actix_web::{post, web, HttpResponse};
use tracing::{error, info, warn};

use crate::{
    shared::api::{ApiError, ApiResponse, FieldError},
    topic::adapter::incoming::web::routes::dto::{TopicRequest, TopicResponse},
    topic::application::ports::incoming::use_cases::CreateTopicError,
    AppState,
};

pub const DUPLICATE_TOPIC_MESSAGE: &str = "Tópico duplicado";

#[utoipa::path(
    post,
    path = "/topicos",
    tag = "topicos",
    request_body = TopicRequest,
    responses(
        (
            status = 201,
            description = "Topic created",
            body = TopicResponse,
            headers(("Location" = String, description = "Relative URI of the new topic"))
        ),
        (status = 400, description = "Blank or missing fields", body = Vec<FieldError>),
        (status = 409, description = "A topic with the same title and message exists", body = String),
        (status = 500, description = "Store failure", body = String),
    )
)]
#[post("/topicos")]
pub async fn create_topic_handler(
    data: web::Data<AppState>,
    payload: web::Json<TopicRequest>,
) -> Result<HttpResponse, ApiError> {
    // 1. Validate
    let command = payload.into_inner().into_command().inspect_err(|e| {
        warn!("Rejected topic creation: {}", e);
    })?;

    // 2. Execute use case
    let topic = data
        .topic
        .create
        .execute(command)
        .await
        .map_err(map_create_topic_error)?;

    info!(topic_id = topic.id, "Topic created");

    let location = format!("/topicos/{}", topic.id);
    Ok(ApiResponse::created(&location, TopicResponse::from(topic)))
}

fn map_create_topic_error(err: CreateTopicError) -> ApiError {
    match err {
        CreateTopicError::TopicAlreadyExists => {
            warn!("Rejected duplicate topic");
            ApiError::Conflict(DUPLICATE_TOPIC_MESSAGE.to_string())
        }
        CreateTopicError::RepositoryError(msg) => {
            error!("Failed to create topic: {}", msg);
            ApiError::Internal(msg)
        }
    }
}
