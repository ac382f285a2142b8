//! API error types with IntoResponse
//!
//! Lookups that miss answer 404 with `{"error": "..."}`. Rejected writes
//! answer 400 with `{"errors": [...]}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

const INVALID_JSON: &str = "Invalid JSON, could not parse the request body";
const VALIDATION_ERRORS: &str = "validation errors";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404)
    NotFound { resource: &'static str },

    /// Request body absent or not JSON (400)
    InvalidJson,

    /// Request body failed validation (400)
    Validation(ValidationError),

    /// Write references a row that does not exist (400)
    UnknownReference { resource: &'static str },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{} not found", capitalize(resource)) }),
            ),
            Self::InvalidJson => (StatusCode::BAD_REQUEST, json!({ "errors": [INVALID_JSON] })),
            Self::Validation(e) => {
                tracing::debug!("Validation failed: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "errors": [VALIDATION_ERRORS] }),
                )
            }
            Self::UnknownReference { resource } => (
                StatusCode::BAD_REQUEST,
                json!({ "errors": [format!("{} not found", capitalize(resource))] }),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            DbError::MissingReference { resource } => Self::UnknownReference { resource },
            _ => Self::Database(e),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
