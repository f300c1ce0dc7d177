//! Step executor client
//!
//! Sends single pipeline-step invocations to the remote executor and
//! interprets its responses. The remote executor runs the actual step;
//! this client only reports whether it passed.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::revision::Revision;
use crate::step::{Step, StepOutcome};

/// Status token a passing step reports, unless configured otherwise.
///
/// Deployments have disagreed on the casing of this token; the
/// comparison is case-sensitive against exactly one configured value.
pub const DEFAULT_SUCCESS_TOKEN: &str = "Success";

/// Executor endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Executor endpoint URL, e.g. `http://executor:9000/run`.
    pub endpoint: String,
    /// Token the executor's `status` field must equal for a step to pass.
    pub success_token: String,
}

impl ExecutorConfig {
    /// Create a config for a specific endpoint with the default token.
    pub fn new(endpoint: &str) -> Self {
        ExecutorConfig {
            endpoint: endpoint.to_string(),
            success_token: DEFAULT_SUCCESS_TOKEN.to_string(),
        }
    }

    /// Override the success token.
    pub fn with_success_token(mut self, token: &str) -> Self {
        self.success_token = token.to_string();
        self
    }
}

/// Invoker of a single pipeline step against the remote executor.
///
/// Implementations are stateless between invocations and infallible:
/// every failure mode resolves to a [`StepOutcome`], never an error.
#[async_trait]
pub trait StepExecutor: Send + Sync {
    /// Run one step for a revision and interpret the verdict.
    async fn invoke(&self, revision: &Revision, repo_path: &str, step: Step) -> StepOutcome;
}

/// Request body sent to the executor, one per step.
#[derive(Debug, Serialize)]
struct StepRequest<'a> {
    commit_hash: &'a str,
    step_name: Step,
    repo_path: &'a str,
}

/// Executor response body. Anything without a matching `status` field
/// is treated as a failed step.
#[derive(Debug, Deserialize)]
struct StepResponse {
    status: Option<String>,
}

/// HTTP client for the remote step executor.
pub struct HttpStepExecutor {
    config: ExecutorConfig,
    http: reqwest::Client,
}

impl HttpStepExecutor {
    /// Create a new executor client.
    pub fn new(config: ExecutorConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("bosun/0.1.0")
            .build()
            .expect("Failed to create HTTP client");

        HttpStepExecutor { config, http }
    }
}

#[async_trait]
impl StepExecutor for HttpStepExecutor {
    async fn invoke(&self, revision: &Revision, repo_path: &str, step: Step) -> StepOutcome {
        let request = StepRequest {
            commit_hash: revision.as_str(),
            step_name: step,
            repo_path,
        };

        debug!(
            endpoint = %self.config.endpoint,
            revision = %revision.short(),
            step = %step,
            "invoking executor"
        );

        let response = match self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
        {
            Ok(r) => r,
            Err(err) => return classify_transport_error(step, &err),
        };

        let status = response.status();
        if !status.is_success() {
            warn!(step = %step, status = %status, revision = %revision.short(),
                "executor returned error status");
            return StepOutcome::Failed;
        }

        match response.json::<StepResponse>().await {
            Ok(body) => match body.status {
                Some(token) if token == self.config.success_token => StepOutcome::Passed,
                Some(token) => {
                    info!(step = %step, reported = %token,
                        "executor reported non-success status");
                    StepOutcome::Failed
                }
                None => {
                    warn!(step = %step, "executor response missing status field");
                    StepOutcome::Failed
                }
            },
            Err(err) => classify_transport_error(step, &err),
        }
    }
}

/// Map a transport-level error to a step outcome.
///
/// The remote executor is documented to sometimes terminate abnormally
/// while running the test step itself. A connection that was established
/// and then torn down before a complete response came back is therefore
/// `Indeterminate` for the test step only. Connect failures, timeouts,
/// and unparseable 2xx bodies are plain failures for every step.
fn classify_transport_error(step: Step, err: &reqwest::Error) -> StepOutcome {
    if step == Step::Test && !err.is_connect() && !err.is_timeout() && !err.is_decode() {
        warn!(step = %step, error = %err, "executor connection dropped mid-exchange");
        return StepOutcome::Indeterminate;
    }
    warn!(step = %step, error = %err, "transport failure invoking executor");
    StepOutcome::Failed
}
