//! Error types for the core crate.

use thiserror::Error;

/// Errors raised by task validation and the storage backends
#[derive(Error, Debug, Clone)]
pub enum TasksError {
    #[error("{reason}")]
    Validation { reason: String },

    #[error("Invalid status: '{status}'")]
    InvalidStatus { status: String },

    // Storage errors
    #[error("Storage error: {reason}")]
    StorageError { reason: String },

    #[error("Failed to connect to document store: {reason}")]
    ConnectionError { reason: String },
}

impl TasksError {
    /// Shorthand for a validation failure
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }
}

#[cfg(feature = "mongo")]
impl From<mongodb::error::Error> for TasksError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::StorageError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for task operations
pub type TasksResult<T> = Result<T, TasksError>;
