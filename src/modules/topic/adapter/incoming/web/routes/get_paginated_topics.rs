use actix_web::{get, web, HttpResponse};
use tracing::{error, warn};

use crate::{
    shared::api::{ApiError, ApiResponse},
    topic::adapter::incoming::web::routes::dto::{PageQuery, TopicPageResponse},
    topic::application::ports::incoming::use_cases::GetPaginatedTopicsError,
    AppState,
};

#[utoipa::path(
    get,
    path = "/topicos/paginado",
    tag = "topicos",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of topics", body = TopicPageResponse),
        (status = 400, description = "Unknown sort property or direction", body = String),
        (status = 500, description = "Store failure", body = String),
    )
)]
#[get("/topicos/paginado")]
pub async fn get_paginated_topics_handler(
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let (page, sort) = query.into_inner().into_parts().inspect_err(|e| {
        warn!("Rejected paging parameters: {}", e);
    })?;

    let result = data
        .topic
        .get_paginated
        .execute(page, sort)
        .await
        .map_err(map_get_paginated_topics_error)?;

    Ok(ApiResponse::ok(TopicPageResponse::from(result)))
}

fn map_get_paginated_topics_error(err: GetPaginatedTopicsError) -> ApiError {
    match err {
        GetPaginatedTopicsError::QueryFailed(msg) => {
            error!("Failed to page topics: {}", msg);
            ApiError::Internal(msg)
        }
    }
}
