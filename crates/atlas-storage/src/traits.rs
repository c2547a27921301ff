//! Registry backend trait definitions

use crate::error::StorageResult;
use async_trait::async_trait;
use atlas_core::{City, CityId, Road, RoadId};

/// Trait for registry backend implementations
///
/// One registry per entity kind, shared for the lifetime of the process.
/// `save_*` overwrites silently when the id already exists; `delete_*`
/// reports whether the record was found. `get_all_*` returns a snapshot in
/// insertion order, which is also the iteration order path queries see.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Initialize the backend
    async fn initialize(&self) -> StorageResult<()>;

    /// Close the backend
    async fn close(&self) -> StorageResult<()>;

    /// Health check
    async fn health_check(&self) -> StorageResult<bool>;

    // ─────────────────────────────────────────────────────────────────────────
    // City Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Save a city, overwriting any record with the same id
    async fn save_city(&self, city: &City) -> StorageResult<()>;

    /// Get a city by id
    async fn get_city(&self, id: CityId) -> StorageResult<Option<City>>;

    /// Get all cities, insertion-ordered
    async fn get_all_cities(&self) -> StorageResult<Vec<City>>;

    /// Delete a city; returns whether it existed
    ///
    /// Does not cascade to roads referencing the city.
    async fn delete_city(&self, id: CityId) -> StorageResult<bool>;

    // ─────────────────────────────────────────────────────────────────────────
    // Road Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Save a road, overwriting any record with the same id
    async fn save_road(&self, road: &Road) -> StorageResult<()>;

    /// Get a road by id
    async fn get_road(&self, id: RoadId) -> StorageResult<Option<Road>>;

    /// Get all roads, insertion-ordered
    async fn get_all_roads(&self) -> StorageResult<Vec<Road>>;

    /// Delete a road; returns whether it existed
    async fn delete_road(&self, id: RoadId) -> StorageResult<bool>;
}
