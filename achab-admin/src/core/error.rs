//! Dashboard error types

use thiserror::Error;

use super::session::SessionError;

/// Dashboard error type
#[derive(Debug, Error)]
pub enum AdminError {
    /// No admin key entered
    #[error("Admin key is required")]
    MissingKey,

    /// The backend rejected the admin key
    #[error("Invalid or expired admin key")]
    InvalidKey,

    /// Operation attempted without an authenticated session
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Remote operation failed (connectivity or server error)
    #[error("Client error: {0}")]
    Client(#[from] achab_client::ClientError),

    /// Session persistence failed
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}
