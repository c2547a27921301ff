//! Road connectivity queries
//!
//! The engine answers "which roads connect city A to city B, and how long
//! does each take". It reports direct roads only; chaining multiple roads
//! into a multi-hop route is out of scope.

use crate::city::CityId;
use crate::error::Error;
use crate::road::Road;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A source/destination city pair
///
/// Parses the console's colon-delimited form, e.g. `"1:2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathQuery {
    pub source: CityId,
    pub destination: CityId,
}

impl PathQuery {
    pub fn new(source: CityId, destination: CityId) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl FromStr for PathQuery {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (source, destination) =
            s.trim()
                .split_once(':')
                .ok_or_else(|| Error::InvalidFieldValue {
                    field: "source:destination".to_string(),
                    reason: "expected two city ids separated by ':'".to_string(),
                })?;

        let source = source.parse().map_err(|e: std::num::ParseIntError| {
            Error::InvalidFieldValue {
                field: "source".to_string(),
                reason: e.to_string(),
            }
        })?;
        let destination = destination.parse().map_err(|e: std::num::ParseIntError| {
            Error::InvalidFieldValue {
                field: "destination".to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            source,
            destination,
        })
    }
}

/// A road that connects the queried cities, with its travel time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadMatch {
    pub road: Road,
    pub duration_seconds: f64,
}

/// Road connectivity query engine
///
/// Stateless and pure: it only reads the road snapshot handed to it and
/// never validates city existence (the caller re-prompts on unknown ids).
pub struct PathQueryEngine;

impl PathQueryEngine {
    /// Find every road that connects `source` to `destination`
    ///
    /// Roads are tested in input order and matches are returned in that
    /// same order, so repeated calls over an unchanged snapshot yield
    /// identical results. Zero matches is a valid outcome, not an error.
    pub fn find_connecting_roads(
        source: CityId,
        destination: CityId,
        roads: &[Road],
    ) -> Vec<RoadMatch> {
        tracing::debug!(
            "Querying connectivity: source={}, destination={}, roads={}",
            source,
            destination,
            roads.len()
        );

        roads
            .iter()
            .filter(|road| Self::connects(road, source, destination))
            .map(|road| RoadMatch {
                road: road.clone(),
                duration_seconds: road.travel_seconds(),
            })
            .collect()
    }

    /// Directionality-aware connectivity test
    ///
    /// Both endpoints must appear in the road's traversal sequence. For a
    /// directional road the source's first position must strictly precede
    /// the destination's; a bi-directional road matches in either order.
    /// City ids absent from the sequence (including ids of since-deleted
    /// cities) never match.
    fn connects(road: &Road, source: CityId, destination: CityId) -> bool {
        let sequence = road.traversal_sequence();
        let source_index = sequence.iter().position(|&id| id == source);
        let destination_index = sequence.iter().position(|&id| id == destination);

        match (source_index, destination_index) {
            (Some(s), Some(d)) => road.bi_directional || s < d,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::road::{NewRoad, RoadId};

    fn road(id: u64, from: u64, through: &[u64], to: u64, bi_directional: bool) -> Road {
        Road::new(NewRoad {
            id: RoadId(id),
            name: format!("R{id}"),
            from: CityId(from),
            to: CityId(to),
            through: through.iter().copied().map(CityId).collect(),
            speed_limit: 60.0,
            length: 120.0,
            bi_directional,
        })
        .unwrap()
    }

    #[test]
    fn test_directional_match_follows_authored_order() {
        let roads = vec![road(1, 1, &[], 2, false)];

        let forward = PathQueryEngine::find_connecting_roads(CityId(1), CityId(2), &roads);
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].road.id, RoadId(1));

        let backward = PathQueryEngine::find_connecting_roads(CityId(2), CityId(1), &roads);
        assert!(backward.is_empty());
    }

    #[test]
    fn test_directional_match_between_waypoints() {
        let roads = vec![road(1, 1, &[2, 3], 4, false)];

        assert_eq!(
            PathQueryEngine::find_connecting_roads(CityId(2), CityId(3), &roads).len(),
            1
        );
        assert!(PathQueryEngine::find_connecting_roads(CityId(3), CityId(2), &roads).is_empty());
    }

    #[test]
    fn test_bidirectional_matches_both_ways() {
        let roads = vec![road(1, 1, &[], 2, true)];

        assert_eq!(
            PathQueryEngine::find_connecting_roads(CityId(1), CityId(2), &roads).len(),
            1
        );
        assert_eq!(
            PathQueryEngine::find_connecting_roads(CityId(2), CityId(1), &roads).len(),
            1
        );
    }

    #[test]
    fn test_bidirectional_requires_both_endpoints() {
        // A bi-directional road must not match a query for cities it never
        // touches.
        let roads = vec![road(1, 1, &[], 2, true)];

        assert!(PathQueryEngine::find_connecting_roads(CityId(5), CityId(6), &roads).is_empty());
        assert!(PathQueryEngine::find_connecting_roads(CityId(1), CityId(6), &roads).is_empty());
    }

    #[test]
    fn test_no_roads_yields_empty_result() {
        let matches = PathQueryEngine::find_connecting_roads(CityId(1), CityId(2), &[]);

        assert!(matches.is_empty());
    }

    #[test]
    fn test_unknown_cities_yield_empty_result() {
        // Ids that appear in no traversal sequence (e.g. a city deleted
        // after the road was created) simply never match.
        let roads = vec![road(1, 1, &[2], 3, false), road(2, 4, &[], 5, true)];

        assert!(PathQueryEngine::find_connecting_roads(CityId(9), CityId(3), &roads).is_empty());
    }

    #[test]
    fn test_matches_preserve_input_order_and_are_idempotent() {
        let roads = vec![
            road(3, 1, &[5], 2, false),
            road(1, 2, &[], 9, true),
            road(7, 1, &[], 2, true),
        ];

        let first = PathQueryEngine::find_connecting_roads(CityId(1), CityId(2), &roads);
        let again = PathQueryEngine::find_connecting_roads(CityId(1), CityId(2), &roads);

        let ids: Vec<RoadId> = first.iter().map(|m| m.road.id).collect();
        assert_eq!(ids, vec![RoadId(3), RoadId(7)]);
        assert_eq!(
            ids,
            again.iter().map(|m| m.road.id).collect::<Vec<RoadId>>()
        );
    }

    #[test]
    fn test_duration_derivation() {
        let mut fields_road = road(1, 1, &[], 2, false);
        fields_road.speed_limit = 2.0;
        fields_road.length = 7200.0;
        let roads = vec![fields_road];

        let matches = PathQueryEngine::find_connecting_roads(CityId(1), CityId(2), &roads);
        assert_eq!(matches.len(), 1);
        assert!((matches[0].duration_seconds - 12_960_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_path_query_parsing() {
        let query: PathQuery = "1:2".parse().unwrap();
        assert_eq!(query, PathQuery::new(CityId(1), CityId(2)));

        assert!(" 3 : 4 ".parse::<PathQuery>().is_ok());
        assert!("12".parse::<PathQuery>().is_err());
        assert!("a:b".parse::<PathQuery>().is_err());
        assert!("1:2:3".parse::<PathQuery>().is_err());
    }
}
