// src/shared/api/json_config.rs
use crate::shared::api::ApiError;
use actix_web::{error::JsonPayloadError, web::JsonConfig};
use serde_json::error::Category;
use tracing::warn;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        match parse_failure(&err) {
            Some((category, line, column)) => warn!(
                error = %err,
                category = ?category,
                line,
                column,
                "Rejected malformed JSON payload"
            ),
            None => warn!(error = %err, "Rejected malformed JSON payload"),
        }
        ApiError::MalformedPayload(err.to_string()).into()
    })
}

/// Where serde_json gave up, when the failure came from parsing at all.
fn parse_failure(err: &JsonPayloadError) -> Option<(Category, usize, usize)> {
    match err {
        JsonPayloadError::Deserialize(e) => Some((e.classify(), e.line(), e.column())),
        _ => None,
    }
}
