use actix_web::{delete, web, HttpResponse};
use tracing::{error, info};

use crate::{
    shared::api::{ApiError, ApiResponse},
    topic::adapter::incoming::web::routes::dto::DeletedTopicResponse,
    topic::application::{domain::entities::TopicId, ports::incoming::use_cases::DeleteTopicError},
    AppState,
};

#[utoipa::path(
    delete,
    path = "/topicos/{id}",
    tag = "topicos",
    params(("id" = i64, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Deleted topic as it was", body = DeletedTopicResponse),
        (status = 404, description = "No topic with this id"),
        (status = 500, description = "Store failure", body = String),
    )
)]
#[delete("/topicos/{id}")]
pub async fn delete_topic_handler(
    path: web::Path<TopicId>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let snapshot = data
        .topic
        .delete
        .execute(id)
        .await
        .map_err(map_delete_topic_error)?;

    info!(topic_id = id, "Topic removed");

    Ok(ApiResponse::ok(DeletedTopicResponse::from(snapshot)))
}

fn map_delete_topic_error(err: DeleteTopicError) -> ApiError {
    match err {
        DeleteTopicError::TopicNotFound => ApiError::NotFound,
        DeleteTopicError::DatabaseError(msg) => {
            error!("Failed to delete topic: {}", msg);
            ApiError::Internal(msg)
        }
    }
}
