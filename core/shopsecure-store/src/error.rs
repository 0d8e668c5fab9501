//! Error types for the storage layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Referenced row does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Input failed validation; nothing was written.
    #[error("invalid data: {0}")]
    Validation(String),
}
