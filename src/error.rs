//! Error types for journal
//!
//! Defines the service error taxonomy using thiserror and maps each
//! variant to an HTTP status + JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Main error type for the journal service
#[derive(Error, Debug)]
pub enum Error {
    /// Request payload failed validation; message is the first rejection
    #[error("{0}")]
    Validation(String),

    /// Referenced entry id does not exist
    #[error("Entry not found")]
    NotFound,

    /// Database connection or query errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience Result type using journal Error
pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Error::NotFound => (StatusCode::NOT_FOUND, "Entry not found".to_string()),
            Error::Database(e) => {
                // Storage failures are logged server-side; the client gets
                // a generic indicator only.
                error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
