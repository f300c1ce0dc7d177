//! In-memory fakes for the collaborator traits (testing only)
//!
//! Provides `ScriptedRevisionSource` and `ScriptedExecutor` that satisfy
//! the trait contracts without git or a network.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::executor::StepExecutor;
use crate::revision::Revision;
use crate::source::RevisionSource;
use crate::step::{Step, StepOutcome};

// ---------------------------------------------------------------------------
// ScriptedRevisionSource
// ---------------------------------------------------------------------------

/// One scripted reply from the revision source.
#[derive(Debug, Clone)]
pub enum SourceReply {
    /// The head revision at this read.
    Head(Revision),
    /// The underlying command failed for this read.
    Unavailable,
}

/// Revision source that replays a fixed sequence of reads.
///
/// Once the script is exhausted, further reads report the source as
/// unavailable.
#[derive(Debug, Default)]
pub struct ScriptedRevisionSource {
    script: Mutex<VecDeque<SourceReply>>,
}

impl ScriptedRevisionSource {
    /// Script a sequence of successful head reads.
    pub fn with_heads(heads: &[&str]) -> Self {
        let script = heads
            .iter()
            .map(|h| SourceReply::Head(Revision::from(*h)))
            .collect();
        ScriptedRevisionSource {
            script: Mutex::new(script),
        }
    }

    /// Script an arbitrary sequence of replies.
    pub fn with_script(replies: Vec<SourceReply>) -> Self {
        ScriptedRevisionSource {
            script: Mutex::new(replies.into()),
        }
    }
}

#[async_trait]
impl RevisionSource for ScriptedRevisionSource {
    async fn current(&self) -> Result<Revision, SourceError> {
        let mut script = self.script.lock().unwrap();
        match script.pop_front() {
            Some(SourceReply::Head(rev)) => Ok(rev),
            Some(SourceReply::Unavailable) => Err(SourceError::Unavailable(
                "scripted source failure".to_string(),
            )),
            None => Err(SourceError::Unavailable("script exhausted".to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ScriptedExecutor
// ---------------------------------------------------------------------------

/// Executor fake with per-(revision, step) outcomes and an invocation log.
///
/// Steps without a scripted outcome pass, so tests only state what
/// deviates.
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    outcomes: Mutex<HashMap<(Revision, Step), StepOutcome>>,
    calls: Mutex<Vec<(Revision, Step)>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome for one step of one revision.
    pub fn set(&self, revision: &str, step: Step, outcome: StepOutcome) {
        let mut outcomes = self.outcomes.lock().unwrap();
        outcomes.insert((Revision::from(revision), step), outcome);
    }

    /// Every invocation so far, in call order.
    pub fn calls(&self) -> Vec<(Revision, Step)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StepExecutor for ScriptedExecutor {
    async fn invoke(&self, revision: &Revision, _repo_path: &str, step: Step) -> StepOutcome {
        let mut calls = self.calls.lock().unwrap();
        calls.push((revision.clone(), step));
        drop(calls);

        let outcomes = self.outcomes.lock().unwrap();
        outcomes
            .get(&(revision.clone(), step))
            .copied()
            .unwrap_or(StepOutcome::Passed)
    }
}
