use actix_web::{put, web, HttpResponse};
use tracing::{error, info, warn};

use crate::{
    shared::api::{ApiError, ApiResponse, FieldError},
    topic::adapter::incoming::web::routes::dto::{TopicRequest, TopicResponse},
    topic::application::{domain::entities::TopicId, ports::incoming::use_cases::UpdateTopicError},
    AppState,
};

#[utoipa::path(
    put,
    path = "/topicos/{id}",
    tag = "topicos",
    params(("id" = i64, Path, description = "Topic id")),
    request_body = TopicRequest,
    responses(
        (status = 200, description = "Updated topic", body = TopicResponse),
        (status = 400, description = "Blank or missing fields", body = Vec<FieldError>),
        (status = 404, description = "No topic with this id"),
        (status = 500, description = "Store failure", body = String),
    )
)]
#[put("/topicos/{id}")]
pub async fn update_topic_handler(
    path: web::Path<TopicId>,
    data: web::Data<AppState>,
    payload: web::Json<TopicRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    // The body is validated before the id is resolved
    let command = payload.into_inner().into_command().inspect_err(|e| {
        warn!(topic_id = id, "Rejected topic update: {}", e);
    })?;

    let topic = data
        .topic
        .update
        .execute(id, command)
        .await
        .map_err(map_update_topic_error)?;

    info!(topic_id = topic.id, "Topic updated");

    Ok(ApiResponse::ok(TopicResponse::from(topic)))
}

fn map_update_topic_error(err: UpdateTopicError) -> ApiError {
    match err {
        UpdateTopicError::TopicNotFound => ApiError::NotFound,
        UpdateTopicError::RepositoryError(msg) => {
            error!("Failed to update topic: {}", msg);
            ApiError::Internal(msg)
        }
    }
}
