//! Bosun Watch - commit detection and pipeline orchestration
//!
//! The watcher polls the revision source for head changes, queues newly
//! detected revisions, and periodically drains the queue by driving
//! each revision through the step pipeline and recording the outcome.

pub mod config;
pub mod detector;
pub mod pipeline;
pub mod watcher;

// Re-export key types
pub use config::WatchConfig;
pub use detector::HeadDetector;
pub use pipeline::StepPipeline;
pub use watcher::Watcher;
