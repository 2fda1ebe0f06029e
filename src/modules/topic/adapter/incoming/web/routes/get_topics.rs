use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::{
    shared::api::{ApiError, ApiResponse},
    topic::adapter::incoming::web::routes::dto::TopicResponse,
    topic::application::ports::incoming::use_cases::GetTopicsError,
    AppState,
};

#[utoipa::path(
    get,
    path = "/topicos",
    tag = "topicos",
    responses(
        (status = 200, description = "Every topic", body = Vec<TopicResponse>),
        (status = 500, description = "Store failure", body = String),
    )
)]
#[get("/topicos")]
pub async fn get_topics_handler(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let topics = data
        .topic
        .get_list
        .execute()
        .await
        .map_err(map_get_topics_error)?;

    let response = topics
        .into_iter()
        .map(TopicResponse::from)
        .collect::<Vec<_>>();

    Ok(ApiResponse::ok(response))
}

fn map_get_topics_error(err: GetTopicsError) -> ApiError {
    match err {
        GetTopicsError::QueryFailed(msg) => {
            error!("Failed to list topics: {}", msg);
            ApiError::Internal(msg)
        }
    }
}
