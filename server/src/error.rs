//! HTTP error translation and process-level errors.
//!
//! # Design
//! `ApiError` is the only place that turns an error kind into a status code.
//! Infrastructure failures are logged in full here and answered with a
//! generic body, so storage details never leak to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_core::TodoError;

pub const MISSING_TEXT: &str = "Missing text field";
pub const NOT_FOUND: &str = "Todo not found";
pub const INTERNAL: &str = "Internal server error";

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The create payload had no usable `text` field.
    #[error("missing text field")]
    MissingText,

    #[error(transparent)]
    Todo(#[from] TodoError),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::MissingText => (StatusCode::BAD_REQUEST, MISSING_TEXT.to_string()),
            ApiError::Todo(TodoError::Validation(message)) => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            ApiError::Todo(TodoError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, NOT_FOUND.to_string())
            }
            ApiError::Todo(TodoError::Infrastructure(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Failures that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to initialize schema: {0}")]
    Schema(#[source] TodoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
