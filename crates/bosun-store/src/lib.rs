//! Bosun Store - run record persistence
//!
//! Owns the shared mutable state of the system: the append-only log of
//! completed run records, written by the watcher and read by the query
//! API. The store is process-lifetime and in-memory; there is no
//! persistence across restarts.

mod error;
mod memory;
mod traits;

pub use error::StoreError;
pub use memory::MemoryRunStore;
pub use traits::{RunStore, StoreResult};
