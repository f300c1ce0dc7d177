//! Error taxonomy for revision lookup.
//!
//! Executor-side failures are deliberately absent here: every executor
//! invocation resolves to a [`crate::StepOutcome`], so there is no
//! executor error type to propagate.

/// Failure to read the repository's current head revision.
///
/// Recovered by retrying on the next detection tick; never fatal to the
/// watcher loop.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("revision source unavailable: {0}")]
    Unavailable(String),
}
