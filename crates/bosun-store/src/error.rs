//! Error types for bosun-store.

use bosun_core::Revision;
use thiserror::Error;

/// Errors that can occur in the run store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record exists for the requested revision.
    #[error("no run recorded for revision: {0}")]
    NotFound(Revision),

    /// Backend failure. The in-memory store never produces this; it
    /// exists for alternative backends behind the same trait.
    #[error("store backend failure: {0}")]
    Backend(String),
}
