//! Road (edge) records and traversal-sequence normalization

use crate::city::CityId;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a road, unique within the road registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoadId(pub u64);

impl std::fmt::Display for RoadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoadId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Field values for creating a road, as collected from the console
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRoad {
    pub id: RoadId,
    pub name: String,
    pub from: CityId,
    pub to: CityId,
    #[serde(default)]
    pub through: Vec<CityId>,
    pub speed_limit: f64,
    pub length: f64,
    #[serde(default)]
    pub bi_directional: bool,
}

/// A registered road between two cities
///
/// `through` holds the intermediate waypoints in physical order; the order
/// is what makes a directional road directional. City ids are not checked
/// against the city registry, so a road may reference cities that were
/// deleted after it was created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Road {
    /// Unique identifier (user-assigned)
    pub id: RoadId,

    /// Road name
    pub name: String,

    /// Starting city
    pub from: CityId,

    /// Ending city
    pub to: CityId,

    /// Intermediate waypoint cities, in travel order
    pub through: Vec<CityId>,

    /// Speed limit, distance units per hour
    pub speed_limit: f64,

    /// Road length, distance units
    pub length: f64,

    /// Whether travel is permitted in both directions
    pub bi_directional: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Road {
    /// Create a new road record from console field values
    ///
    /// Rejects non-positive (or non-finite) speed limits and lengths so the
    /// duration computation can never divide by zero.
    pub fn new(fields: NewRoad) -> Result<Self> {
        if !(fields.speed_limit.is_finite() && fields.speed_limit > 0.0) {
            return Err(Error::InvalidFieldValue {
                field: "speed_limit".to_string(),
                reason: "must be a positive number".to_string(),
            });
        }
        if !(fields.length.is_finite() && fields.length > 0.0) {
            return Err(Error::InvalidFieldValue {
                field: "length".to_string(),
                reason: "must be a positive number".to_string(),
            });
        }

        Ok(Self {
            id: fields.id,
            name: fields.name,
            from: fields.from,
            to: fields.to,
            through: fields.through,
            speed_limit: fields.speed_limit,
            length: fields.length,
            bi_directional: fields.bi_directional,
            created_at: Utc::now(),
        })
    }

    /// The normalized city sequence this road passes through
    ///
    /// `[from] + through + [to]` with duplicates removed, keeping the first
    /// occurrence. Positions in this sequence define the road's direction;
    /// it is derived on demand and never persisted.
    pub fn traversal_sequence(&self) -> Vec<CityId> {
        let mut sequence = Vec::with_capacity(self.through.len() + 2);
        for id in std::iter::once(self.from)
            .chain(self.through.iter().copied())
            .chain(std::iter::once(self.to))
        {
            if !sequence.contains(&id) {
                sequence.push(id);
            }
        }
        sequence
    }

    /// Travel time over the full road, in seconds
    pub fn travel_seconds(&self) -> f64 {
        self.length / self.speed_limit * 3600.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(from: u64, through: &[u64], to: u64) -> NewRoad {
        NewRoad {
            id: RoadId(1),
            name: "A1".to_string(),
            from: CityId(from),
            to: CityId(to),
            through: through.iter().copied().map(CityId).collect(),
            speed_limit: 60.0,
            length: 120.0,
            bi_directional: false,
        }
    }

    #[test]
    fn test_traversal_sequence_dedups_first_occurrence() {
        let road = Road::new(fields(1, &[2, 1, 3], 3)).unwrap();

        assert_eq!(
            road.traversal_sequence(),
            vec![CityId(1), CityId(2), CityId(3)]
        );
    }

    #[test]
    fn test_traversal_sequence_plain() {
        let road = Road::new(fields(1, &[2, 3], 4)).unwrap();

        assert_eq!(
            road.traversal_sequence(),
            vec![CityId(1), CityId(2), CityId(3), CityId(4)]
        );
    }

    #[test]
    fn test_traversal_sequence_endpoint_collapse() {
        // A loop road: the shared endpoint keeps its first position.
        let road = Road::new(fields(5, &[6], 5)).unwrap();

        assert_eq!(road.traversal_sequence(), vec![CityId(5), CityId(6)]);
    }

    #[test]
    fn test_zero_speed_limit_rejected() {
        let mut f = fields(1, &[], 2);
        f.speed_limit = 0.0;

        assert!(matches!(
            Road::new(f),
            Err(Error::InvalidFieldValue { field, .. }) if field == "speed_limit"
        ));
    }

    #[test]
    fn test_negative_length_rejected() {
        let mut f = fields(1, &[], 2);
        f.length = -3.0;

        assert!(matches!(
            Road::new(f),
            Err(Error::InvalidFieldValue { field, .. }) if field == "length"
        ));
    }

    #[test]
    fn test_travel_seconds() {
        let mut f = fields(1, &[], 2);
        f.speed_limit = 2.0;
        f.length = 7200.0;
        let road = Road::new(f).unwrap();

        assert!((road.travel_seconds() - 12_960_000.0).abs() < f64::EPSILON);
    }
}
