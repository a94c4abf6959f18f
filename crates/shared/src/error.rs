use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown for every transport-level failure.
pub const CONNECTION_FAILURE_MESSAGE: &str =
    "Failed to connect to server. Please ensure the backend is running.";

/// Failure half of an [`crate::protocol::ApiOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn is_connection_failure(&self) -> bool {
        self.message == CONNECTION_FAILURE_MESSAGE
    }

    /// Server text, or `fallback` when the server sent none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.message.trim().is_empty() {
            fallback
        } else {
            &self.message
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some text")]
    Empty,
    #[error("Text must be at least {min_length} characters long")]
    TooShort { min_length: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("Cannot swap languages when source is Auto-detect")]
    AutoDetectSource,
}
