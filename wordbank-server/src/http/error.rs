//! API error types with IntoResponse
//!
//! Errors are converted to the `{"error": "<message>"}` envelope with the
//! matching status code. Store errors are logged and collapsed to a
//! generic message; a response never carries internals.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use wordbank_core::ValidationError;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request body (400)
    Decode(String),

    /// Missing or invalid required field (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, name: String },

    /// Unique-constraint violation (422)
    Conflict(String),

    /// Store error (500, logged)
    Database(DbError),

    /// Failed API-key check (401)
    Unauthorized,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Decode(msg) => (
                StatusCode::BAD_REQUEST,
                format!("could not decode request body: {msg}"),
            ),
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::NotFound { resource, name } => (
                StatusCode::NOT_FOUND,
                format!("{resource} '{name}' not found"),
            ),
            Self::Conflict(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::Database(e) => {
                tracing::error!("database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
            // One message for missing, malformed, and wrong credentials
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "not authorized".to_string()),
        };

        (status, Json(json!({ "error": message }))).into_response()
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
            DbError::NotFound { resource, name } => Self::NotFound { resource, name },
            e if e.is_unique_violation() => {
                Self::Conflict("a record with that value already exists".to_string())
            }
            e => Self::Database(e),
        }
    }
}

/// Map a failed create to the right status: 422 for a duplicate unique
/// key, 500 otherwise.
pub fn failed_creation(resource: &'static str) -> impl FnOnce(DbError) -> ApiError {
    move |err| {
        if err.is_unique_violation() {
            ApiError::Conflict(format!("{resource} already exists"))
        } else {
            ApiError::Database(err)
        }
    }
}
