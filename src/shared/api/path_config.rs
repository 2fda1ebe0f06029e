// src/shared/api/path_config.rs
use crate::shared::api::ApiError;
use actix_web::web::PathConfig;
use tracing::warn;

/// Path segments that fail to parse (e.g. `/topicos/abc`) are a 400, not a 404.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, req| {
        warn!(path = %req.path(), error = %err, "Rejected path parameter");
        ApiError::InvalidParameter(format!("Parámetro de ruta inválido: {}", err)).into()
    })
}
