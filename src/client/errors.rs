// src/client/errors.rs

use reqwest::StatusCode;
use thiserror::Error;

use crate::saved::models::ALREADY_SAVED_MESSAGE;

/// Failure of a call to the portal API, as seen by the client
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyncError {
    /// Timeout or connection failure
    #[error("Network failure: {0}")]
    Network(String),

    /// 401: the session is no longer valid
    #[error("Authentication required: {0}")]
    Auth(String),

    /// 404: the job was deleted
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server failure ({status}): {message}")]
    Server { status: u16, message: String },

    /// 400 or a `success: false` envelope, e.g. a duplicate save
    #[error("Request rejected: {0}")]
    Validation(String),
}

impl SyncError {
    /// Classify a non-2xx response
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string()
        });

        match status {
            StatusCode::UNAUTHORIZED => SyncError::Auth(message),
            StatusCode::NOT_FOUND => SyncError::NotFound(message),
            StatusCode::BAD_REQUEST => SyncError::Validation(message),
            _ => SyncError::Server {
                status: status.as_u16(),
                message,
            },
        }
    }

    pub fn timed_out() -> Self {
        SyncError::Network("Request timed out".to_string())
    }

    /// The server already holds the save being requested
    pub fn is_already_saved(&self) -> bool {
        matches!(self, SyncError::Validation(message) if message == ALREADY_SAVED_MESSAGE)
    }

    /// Whether the user should be sent back through sign-in
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, SyncError::Auth(_))
    }

    /// Text for the transient notification shown after a failed save or unsave
    pub fn user_message(&self) -> String {
        match self {
            SyncError::Network(_) => {
                "Request timeout. Please check your connection and try again.".to_string()
            }
            SyncError::Auth(_) => "You need to be logged in to save jobs.".to_string(),
            SyncError::NotFound(_) => "Job not found".to_string(),
            SyncError::Server { status, .. } if *status >= 500 => {
                "Server error. Please try again later.".to_string()
            }
            SyncError::Server { .. } => "Failed to save/unsave job. Please try again.".to_string(),
            SyncError::Validation(message) if !message.is_empty() => message.clone(),
            SyncError::Validation(_) => "Invalid request. Please try again.".to_string(),
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return SyncError::timed_out();
        }
        match e.status() {
            Some(status) => SyncError::from_status(status, None),
            None => SyncError::Network(e.to_string()),
        }
    }
}
