//! Watcher configuration.

use std::time::Duration;

/// Default time between head revision checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default time between queue drain passes.
pub const DEFAULT_DRAIN_INTERVAL: Duration = Duration::from_secs(10);

/// Configuration for the watch loop.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Repository location, forwarded to the executor on every step request.
    pub repo_path: String,

    /// Time between head revision checks.
    pub poll_interval: Duration,

    /// Time between queue drain passes. Draining less often than
    /// polling batches a burst of commits into a single drain report.
    pub drain_interval: Duration,
}

impl WatchConfig {
    /// Create a config for a repository with the default intervals.
    pub fn new(repo_path: impl Into<String>) -> Self {
        WatchConfig {
            repo_path: repo_path.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            drain_interval: DEFAULT_DRAIN_INTERVAL,
        }
    }

    /// Override the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Override the drain interval.
    pub fn with_drain_interval(mut self, interval: Duration) -> Self {
        self.drain_interval = interval;
        self
    }
}
