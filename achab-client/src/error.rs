//! Client error types

use thiserror::Error;

/// Client error type
///
/// `Unauthorized` is the backend's invalid-credential signal and is the only
/// variant the dashboard reacts to specifically; every other variant is a
/// generic failure surfaced as a connectivity message.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network unreachable, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Admin key rejected by the backend (401)
    #[error("Invalid or missing admin key")]
    Unauthorized,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by server-side validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// True for the invalid-credential signal that must force a logout.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
