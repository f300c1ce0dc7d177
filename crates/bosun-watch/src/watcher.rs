//! The watch loop: poll for head changes, drain the pending queue.

use std::collections::VecDeque;
use std::sync::Arc;

use bosun_core::{Revision, RevisionSource, StepExecutor};
use bosun_store::RunStore;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, warn};

use crate::config::WatchConfig;
use crate::detector::HeadDetector;
use crate::pipeline::StepPipeline;

/// Watches the revision source and orchestrates pipeline runs.
///
/// A single logical worker drives the loop: detection ticks and drain
/// passes never overlap. Once a revision's drain begins, it runs to
/// completion before the next revision is dequeued.
pub struct Watcher {
    source: Arc<dyn RevisionSource>,
    executor: Arc<dyn StepExecutor>,
    store: Arc<dyn RunStore>,
    config: WatchConfig,
    detector: HeadDetector,
    pending: VecDeque<Revision>,
}

impl Watcher {
    /// Create a watcher over explicitly injected collaborators.
    pub fn new(
        source: Arc<dyn RevisionSource>,
        executor: Arc<dyn StepExecutor>,
        store: Arc<dyn RunStore>,
        config: WatchConfig,
    ) -> Self {
        Watcher {
            source,
            executor,
            store,
            config,
            detector: HeadDetector::new(),
            pending: VecDeque::new(),
        }
    }

    /// Number of revisions detected but not yet processed.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// One detection pass: read the head and enqueue it if it changed.
    ///
    /// A source failure is logged and retried on the next tick; one
    /// transient git failure must not take the watcher down.
    pub async fn detect_tick(&mut self) {
        match self.source.current().await {
            Ok(head) => {
                if let Some(new_head) = self.detector.observe(head) {
                    info!(revision = %new_head.short(), "new head revision detected");
                    self.pending.push_back(new_head);
                }
            }
            Err(err) => {
                warn!(error = %err, "head check failed; retrying next tick");
            }
        }
    }

    /// One drain pass: process every pending revision, oldest first.
    ///
    /// Each revision runs its full step sequence and is recorded
    /// exactly once; nothing re-enqueues a processed revision.
    pub async fn drain(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        while let Some(revision) = self.pending.pop_front() {
            let record =
                StepPipeline::run(self.executor.as_ref(), revision, &self.config.repo_path).await;
            if let Err(err) = self.store.append(record).await {
                error!(error = %err, "failed to record run");
            }
        }

        info!("pipeline drain complete");
    }

    /// Run detection and drain passes for the lifetime of the process.
    pub async fn run(mut self) {
        info!(
            repo = %self.config.repo_path,
            poll_interval = ?self.config.poll_interval,
            drain_interval = ?self.config.drain_interval,
            "watcher started"
        );

        let mut poll = interval(self.config.poll_interval);
        poll.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut drain = interval(self.config.drain_interval);
        drain.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = poll.tick() => self.detect_tick().await,
                _ = drain.tick() => self.drain().await,
            }
        }
    }
}
