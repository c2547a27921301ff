//! In-memory registry backend

use crate::error::{StorageError, StorageResult};
use crate::traits::StorageBackend;
use async_trait::async_trait;
use atlas_core::{City, CityId, Road, RoadId};
use indexmap::IndexMap;
use std::sync::RwLock;

/// In-memory registry backend
///
/// The only backend the console ships: records live for the lifetime of the
/// process and nothing is persisted. `IndexMap` keeps insertion order so
/// path queries iterate roads in the order they were registered; overwrites
/// keep the original position and deletions shift instead of swapping.
pub struct MemoryStorage {
    cities: RwLock<IndexMap<CityId, City>>,
    roads: RwLock<IndexMap<RoadId, Road>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            cities: RwLock::new(IndexMap::new()),
            roads: RwLock::new(IndexMap::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn initialize(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn close(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<bool> {
        Ok(true)
    }

    // City operations

    async fn save_city(&self, city: &City) -> StorageResult<()> {
        let mut cities = self
            .cities
            .write()
            .map_err(|e| StorageError::Registry(format!("Lock error: {}", e)))?;
        tracing::debug!("Saving city {} ({})", city.id, city.name);
        cities.insert(city.id, city.clone());
        Ok(())
    }

    async fn get_city(&self, id: CityId) -> StorageResult<Option<City>> {
        let cities = self
            .cities
            .read()
            .map_err(|e| StorageError::Registry(format!("Lock error: {}", e)))?;
        Ok(cities.get(&id).cloned())
    }

    async fn get_all_cities(&self) -> StorageResult<Vec<City>> {
        let cities = self
            .cities
            .read()
            .map_err(|e| StorageError::Registry(format!("Lock error: {}", e)))?;
        Ok(cities.values().cloned().collect())
    }

    async fn delete_city(&self, id: CityId) -> StorageResult<bool> {
        let mut cities = self
            .cities
            .write()
            .map_err(|e| StorageError::Registry(format!("Lock error: {}", e)))?;
        // shift_remove keeps the remaining records in insertion order.
        Ok(cities.shift_remove(&id).is_some())
    }

    // Road operations

    async fn save_road(&self, road: &Road) -> StorageResult<()> {
        let mut roads = self
            .roads
            .write()
            .map_err(|e| StorageError::Registry(format!("Lock error: {}", e)))?;
        tracing::debug!("Saving road {} ({})", road.id, road.name);
        roads.insert(road.id, road.clone());
        Ok(())
    }

    async fn get_road(&self, id: RoadId) -> StorageResult<Option<Road>> {
        let roads = self
            .roads
            .read()
            .map_err(|e| StorageError::Registry(format!("Lock error: {}", e)))?;
        Ok(roads.get(&id).cloned())
    }

    async fn get_all_roads(&self) -> StorageResult<Vec<Road>> {
        let roads = self
            .roads
            .read()
            .map_err(|e| StorageError::Registry(format!("Lock error: {}", e)))?;
        Ok(roads.values().cloned().collect())
    }

    async fn delete_road(&self, id: RoadId) -> StorageResult<bool> {
        let mut roads = self
            .roads
            .write()
            .map_err(|e| StorageError::Registry(format!("Lock error: {}", e)))?;
        Ok(roads.shift_remove(&id).is_some())
    }
}
