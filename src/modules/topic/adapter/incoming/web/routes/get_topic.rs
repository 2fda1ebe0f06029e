use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::{
    shared::api::{ApiError, ApiResponse},
    topic::adapter::incoming::web::routes::dto::TopicResponse,
    topic::application::{domain::entities::TopicId, ports::incoming::use_cases::GetTopicError},
    AppState,
};

#[utoipa::path(
    get,
    path = "/topicos/{id}",
    tag = "topicos",
    params(("id" = i64, Path, description = "Topic id")),
    responses(
        (status = 200, description = "The topic", body = TopicResponse),
        (status = 404, description = "No topic with this id"),
        (status = 500, description = "Store failure", body = String),
    )
)]
#[get("/topicos/{id}")]
pub async fn get_topic_handler(
    path: web::Path<TopicId>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let topic = data
        .topic
        .get_single
        .execute(id)
        .await
        .map_err(map_get_topic_error)?;

    Ok(ApiResponse::ok(TopicResponse::from(topic)))
}

fn map_get_topic_error(err: GetTopicError) -> ApiError {
    match err {
        GetTopicError::TopicNotFound => ApiError::NotFound,
        GetTopicError::QueryFailed(msg) => {
            error!("Failed to fetch topic: {}", msg);
            ApiError::Internal(msg)
        }
    }
}
