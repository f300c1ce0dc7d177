//! Run store trait definition.

use async_trait::async_trait;
use bosun_core::{Revision, RunRecord};

use crate::error::StoreError;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Append-only log of completed run records.
///
/// Guarantees:
/// - Records are immutable once appended; nothing mutates or removes them.
/// - `all` returns records in append order.
/// - `find` returns the first record for a revision in append order
///   (earliest wins if duplicates ever exist; appends are not deduplicated).
///
/// Safe for a single writer and concurrent readers.
#[async_trait]
pub trait RunStore: Send + Sync {
    /// Add a record to the end of the log.
    async fn append(&self, record: RunRecord) -> StoreResult<()>;

    /// Every record, in append order.
    async fn all(&self) -> StoreResult<Vec<RunRecord>>;

    /// First record for the revision. `StoreError::NotFound` if absent.
    async fn find(&self, revision: &Revision) -> StoreResult<RunRecord>;
}
