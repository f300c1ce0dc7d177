//! Completed run records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::revision::Revision;
use crate::step::Step;

/// Final status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Failure,
}

/// Outcome of one complete pipeline run for a single revision.
///
/// Records are immutable once built: the store appends them and never
/// mutates or removes entries. `failed_steps` lists only steps that
/// actually failed (or came back indeterminate) — steps skipped because
/// an earlier step failed are not listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Revision this run covers; acts as the record's key.
    pub revision: Revision,

    /// Overall status. `Success` iff `failed_steps` is empty.
    pub status: RunStatus,

    /// Steps that failed, in execution order.
    pub failed_steps: Vec<Step>,

    /// When the record was built.
    pub recorded_at: DateTime<Utc>,
}

impl RunRecord {
    /// Build a record from the steps that failed during a run.
    pub fn new(revision: Revision, failed_steps: Vec<Step>) -> Self {
        let status = if failed_steps.is_empty() {
            RunStatus::Success
        } else {
            RunStatus::Failure
        };
        RunRecord {
            revision,
            status,
            failed_steps,
            recorded_at: Utc::now(),
        }
    }

    /// Whether every attempted step passed.
    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }
}
