//! Storage error types

use thiserror::Error;

/// Result type alias for registry operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Registry-specific error types
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
