//! Error types for the HTTP API.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use taskdash_core::api::ErrorResponse;
use taskdash_core::TasksError;
use thiserror::Error;
use tracing::error;

/// Errors returned by request handlers.
///
/// Every variant renders as a JSON `{ "error": message }` body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed validation.
    #[error("{0}")]
    Validation(String),

    /// No task has the requested id.
    #[error("Task not found")]
    NotFound,

    /// The store failed; the message is generic and the cause is only logged.
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a store error, using `message` for anything unexpected.
    ///
    /// Validation failures raised by the store keep their own message.
    pub fn from_store(err: TasksError, message: &'static str) -> Self {
        match err {
            TasksError::Validation { reason } => Self::Validation(reason),
            TasksError::InvalidStatus { .. } => Self::Validation(err.to_string()),
            other => {
                error!(error = %other, "{message}");
                Self::Internal(message)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ApiError::Validation("Title is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("Failed to fetch tasks").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_errors_are_not_leaked() {
        let err = ApiError::from_store(
            TasksError::StorageError {
                reason: "connection reset by peer".into(),
            },
            "Failed to create task",
        );
        assert_eq!(err.to_string(), "Failed to create task");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_validation_maps_to_bad_request() {
        let err = ApiError::from_store(
            TasksError::validation("Title is required"),
            "Failed to create task",
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Title is required");
    }
}
