//! City (node) records and identifiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a city, unique within the city registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(pub u64);

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CityId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A registered city
///
/// Immutable once created; deletion does not cascade to roads that
/// reference the city (see the dangling-id policy in the query engine).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    /// Unique identifier (user-assigned)
    pub id: CityId,

    /// City name
    pub name: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl City {
    /// Create a new city record
    pub fn new(id: CityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
