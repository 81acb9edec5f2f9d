//! Nexra Error Types

use thiserror::Error;

/// Errors that can occur when talking to the completion API
#[derive(Error, Debug)]
pub enum NexraError {
    #[error("Nexra unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Nexra API failed with status {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to get task ID from Nexra API")]
    MissingTaskId,

    #[error("Request timeout")]
    Timeout,
}

impl NexraError {
    /// Classify a transport error the way the rest of the client reports it
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            NexraError::Timeout
        } else if e.is_connect() {
            NexraError::Unavailable
        } else {
            NexraError::Request(e)
        }
    }
}
