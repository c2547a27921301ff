//! Error types for Atlas Core

use crate::city::CityId;
use crate::road::RoadId;
use thiserror::Error;

/// Result type alias using Atlas's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Atlas error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("City not found: {0}")]
    CityNotFound(CityId),

    #[error("Road not found: {0}")]
    RoadNotFound(RoadId),

    #[error("Invalid value for {field}: {reason}")]
    InvalidFieldValue { field: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
