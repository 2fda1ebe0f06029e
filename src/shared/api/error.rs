// src/shared/api/error.rs
use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use serde::Serialize;
use utoipa::ToSchema;

/// One rejected input field, as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "titulo")]
    pub campo: String,
    #[schema(example = "no debe estar vacío")]
    pub mensaje: String,
}

impl FieldError {
    pub fn new(campo: impl Into<String>, mensaje: impl Into<String>) -> Self {
        Self {
            campo: campo.into(),
            mensaje: mensaje.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Resource not found")]
    NotFound,

    #[error("{} invalid field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Error en el formato JSON: {0}")]
    MalformedPayload(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvalidParameter(String),

    /// Detail stays server-side.
    #[error("Internal error: {0}")]
    Internal(String),
}

pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_)
            | ApiError::MalformedPayload(_)
            | ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        match self {
            ApiError::NotFound => builder.finish(),
            ApiError::Validation(fields) => builder.json(fields),
            ApiError::MalformedPayload(_) | ApiError::InvalidParameter(_) => builder
                .content_type(ContentType::plaintext())
                .body(self.to_string()),
            ApiError::Conflict(message) => builder
                .content_type(ContentType::plaintext())
                .body(message.clone()),
            ApiError::Internal(_) => builder
                .content_type(ContentType::plaintext())
                .body(INTERNAL_ERROR_MESSAGE),
        }
    }
}
