//! Atlas Storage - registry backends for the road network console
//!
//! This crate provides the registry abstraction over city and road
//! records. The console is memory-resident by design, so the only shipped
//! backend is `MemoryStorage`; all data is lost on process exit.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStorage;
pub use traits::StorageBackend;
