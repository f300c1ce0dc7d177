//! Bosun Core - commit watching domain model and collaborators
//!
//! Provides the shared vocabulary for the watcher daemon:
//! - Domain types (`Revision`, `Step`, `StepOutcome`, `RunRecord`)
//! - The `RevisionSource` trait with its git-backed implementation
//! - The `StepExecutor` trait with its HTTP-backed implementation

pub mod error;
pub mod executor;
pub mod fakes;
pub mod record;
pub mod revision;
pub mod source;
pub mod step;
pub mod telemetry;

// Re-export key types
pub use error::SourceError;
pub use executor::{ExecutorConfig, HttpStepExecutor, StepExecutor};
pub use record::{RunRecord, RunStatus};
pub use revision::Revision;
pub use source::{GitRevisionSource, RevisionSource};
pub use step::{Step, StepOutcome};
pub use telemetry::init_tracing;
