//! Atlas Core - road network model and path query engine
//!
//! This crate provides the in-memory record types (cities, roads), the
//! traversal-sequence normalization rules, and the directionality-aware
//! connectivity queries used by the atlas console.

pub mod city;
pub mod duration;
pub mod error;
pub mod path;
pub mod road;

pub use city::{City, CityId};
pub use duration::format_duration;
pub use error::{Error, Result};
pub use path::{PathQuery, PathQueryEngine, RoadMatch};
pub use road::{NewRoad, Road, RoadId};
