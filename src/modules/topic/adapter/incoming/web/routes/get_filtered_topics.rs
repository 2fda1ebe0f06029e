use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::{
    shared::api::{ApiError, ApiResponse},
    topic::adapter::incoming::web::routes::dto::{FilterQuery, TopicResponse},
    topic::application::ports::incoming::use_cases::GetFilteredTopicsError,
    AppState,
};

#[utoipa::path(
    get,
    path = "/topicos/filtrado",
    tag = "topicos",
    params(FilterQuery),
    responses(
        (status = 200, description = "Topics of the course created in the year", body = Vec<TopicResponse>),
        (status = 400, description = "Missing or invalid query parameters"),
        (status = 500, description = "Store failure", body = String),
    )
)]
#[get("/topicos/filtrado")]
pub async fn get_filtered_topics_handler(
    query: web::Query<FilterQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let FilterQuery { curso, year } = query.into_inner();

    let topics = data
        .topic
        .get_filtered
        .execute(curso, year)
        .await
        .map_err(map_get_filtered_topics_error)?;

    let response = topics
        .into_iter()
        .map(TopicResponse::from)
        .collect::<Vec<_>>();

    Ok(ApiResponse::ok(response))
}

fn map_get_filtered_topics_error(err: GetFilteredTopicsError) -> ApiError {
    match err {
        GetFilteredTopicsError::QueryFailed(msg) => {
            error!("Failed to filter topics: {}", msg);
            ApiError::Internal(msg)
        }
    }
}
