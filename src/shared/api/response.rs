// src/shared/api/response.rs
use actix_web::{http::header, HttpResponse};
use serde::Serialize;

/// Bare JSON bodies; the forum API does not wrap payloads in an envelope.
pub struct ApiResponse;

impl ApiResponse {
    pub fn ok<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(location: &str, data: T) -> HttpResponse {
        HttpResponse::Created()
            .insert_header((header::LOCATION, location))
            .json(data)
    }
}
