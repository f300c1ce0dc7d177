//! Per-revision step pipeline.

use bosun_core::{Revision, RunRecord, Step, StepExecutor, StepOutcome};
use tracing::{info, warn};

/// Drives one revision through the full step sequence.
pub struct StepPipeline;

impl StepPipeline {
    /// Run every step for a revision and build its run record.
    ///
    /// Steps run in `Step::SEQUENCE` order. The first step that does
    /// not pass ends the sequence: remaining steps are skipped, not
    /// run, and only the step that actually failed is listed in the
    /// record. An indeterminate test outcome counts as a failed step
    /// but is not retried.
    ///
    /// This always produces a record; executor failures are outcomes,
    /// never errors.
    pub async fn run(
        executor: &dyn StepExecutor,
        revision: Revision,
        repo_path: &str,
    ) -> RunRecord {
        let mut failed_steps = Vec::new();

        for step in Step::SEQUENCE {
            info!(revision = %revision.short(), step = %step, "executing step");

            match executor.invoke(&revision, repo_path, step).await {
                StepOutcome::Passed => {}
                StepOutcome::Failed => {
                    info!(revision = %revision.short(), step = %step,
                        "step failed; skipping remaining steps");
                    failed_steps.push(step);
                    break;
                }
                StepOutcome::Indeterminate => {
                    warn!(revision = %revision.short(), step = %step,
                        "step outcome indeterminate; counted as failed");
                    failed_steps.push(step);
                    break;
                }
            }
        }

        RunRecord::new(revision, failed_steps)
    }
}
