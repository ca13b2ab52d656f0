//! API error types with IntoResponse
//!
//! Errors are converted to `{"ERROR": message}` bodies with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body failed to parse (400)
    Validation(String),

    /// Identifier is not a valid ObjectId (400)
    InvalidId { message: String },

    /// No matching record (404)
    NotFound { message: String },

    /// Store failure (500, logged)
    Database(DbError),

    /// Store unreachable during a liveness check (503, logged)
    Unavailable(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Self::InvalidId { message } => (StatusCode::BAD_REQUEST, message),
            Self::NotFound { message } => (StatusCode::NOT_FOUND, message),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
            Self::Unavailable(e) => {
                tracing::error!("Database unavailable: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "database unavailable".to_string(),
                )
            }
        };

        (status, Json(json!({ "ERROR": message }))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound {
                message: e.to_string(),
            },
            DbError::InvalidId { .. } => Self::InvalidId {
                message: e.to_string(),
            },
            _ => Self::Database(e),
        }
    }
}
