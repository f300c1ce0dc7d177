//! Pipeline step definitions and outcomes.

use serde::{Deserialize, Serialize};

/// Pipeline steps, in execution order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Static analysis of the revision.
    Lint,

    /// Compile the revision.
    Build,

    /// Run the revision's test suite.
    Test,
}

impl Step {
    /// The full pipeline, in the order steps are executed.
    ///
    /// Later steps are never run once an earlier one has failed.
    pub const SEQUENCE: [Step; 3] = [Step::Lint, Step::Build, Step::Test];

    /// Get the step name as sent to the executor.
    pub fn name(&self) -> &'static str {
        match self {
            Step::Lint => "lint",
            Step::Build => "build",
            Step::Test => "test",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of invoking one step against the executor.
///
/// Every invocation resolves to exactly one of these; the executor
/// client never surfaces a transport error to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The executor ran the step and reported success.
    Passed,

    /// The executor reported failure, returned an error status, or
    /// could not be reached.
    Failed,

    /// The executor connection dropped mid-exchange during the test
    /// step. Counts against the run like a failure but is a recognized
    /// executor behavior, not a crash to propagate.
    Indeterminate,
}

impl StepOutcome {
    /// Whether this outcome lets the pipeline advance to the next step.
    pub fn passed(&self) -> bool {
        matches!(self, StepOutcome::Passed)
    }
}
