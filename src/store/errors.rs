//! # Store Errors

use std::path::Path;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Filesystem failure (permissions, disk full, missing directory)
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Data file exists but does not hold a record collection
    #[error("Corrupt data file {path}: {message}")]
    Corrupt { path: String, message: String },

    /// Collection could not be encoded
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// A writer panicked while holding the store lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        StoreError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn corrupt(path: &Path, err: serde_json::Error) -> Self {
        StoreError::Corrupt {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
