//! Persisted admin session
//!
//! File-backed stand-in for the browser session storage the dashboard
//! originally relied on: the admin key survives a process restart and is
//! revalidated by the first list fetch.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted session contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub admin_key: String,
    pub logged_in_at: i64,
}

/// File-backed store for the current admin session
///
/// Session file path: `{data_dir}/auth/session.json`.
pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join("auth/session.json"),
        }
    }

    /// Save the admin key as the current session
    pub fn save(&self, admin_key: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let session = StoredSession {
            admin_key: admin_key.to_string(),
            logged_in_at: shared::util::now_millis(),
        };
        let content = serde_json::to_string_pretty(&session)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!("Admin session saved");
        Ok(())
    }

    /// Load the persisted session, if any
    pub fn load(&self) -> Result<Option<StoredSession>, SessionError> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.file_path)?;
        let session: StoredSession = serde_json::from_str(&content)?;
        tracing::info!("Loaded persisted admin session");
        Ok(Some(session))
    }

    /// Clear the persisted session
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("Admin session cleared");
        }
        Ok(())
    }
}
