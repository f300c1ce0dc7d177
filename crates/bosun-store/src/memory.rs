//! In-memory run store.

use std::sync::Mutex;

use async_trait::async_trait;
use bosun_core::{Revision, RunRecord};
use tracing::info;

use crate::error::StoreError;
use crate::traits::{RunStore, StoreResult};

/// In-memory append-only store backed by a `Mutex<Vec<RunRecord>>`.
///
/// A single lock covers both append and read paths.
#[derive(Debug, Default)]
pub struct MemoryRunStore {
    runs: Mutex<Vec<RunRecord>>,
}

impl MemoryRunStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RunStore for MemoryRunStore {
    async fn append(&self, record: RunRecord) -> StoreResult<()> {
        let mut runs = self.runs.lock().unwrap();
        info!(revision = %record.revision.short(), status = ?record.status, "recorded run");
        runs.push(record);
        Ok(())
    }

    async fn all(&self) -> StoreResult<Vec<RunRecord>> {
        let runs = self.runs.lock().unwrap();
        Ok(runs.clone())
    }

    async fn find(&self, revision: &Revision) -> StoreResult<RunRecord> {
        let runs = self.runs.lock().unwrap();
        runs.iter()
            .find(|r| &r.revision == revision)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(revision.clone()))
    }
}
