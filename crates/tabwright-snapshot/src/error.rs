//! Snapshot error types

use thiserror::Error;

/// Result type for snapshot operations
pub type SnapshotResult<T> = std::result::Result<T, SnapshotError>;

/// Errors that can occur while building or encoding an exchange document
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Validation or style resolution failed in the document model
    #[error("Core error: {0}")]
    Core(#[from] tabwright_core::Error),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document references something it does not contain
    #[error("Inconsistent document: {0}")]
    Inconsistent(String),
}
