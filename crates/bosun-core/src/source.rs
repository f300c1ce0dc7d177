//! Revision source abstraction and git-backed implementation.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::SourceError;
use crate::revision::Revision;

/// Provider of the repository's current head revision.
///
/// Every call reflects live state at call time; implementations must
/// not cache.
#[async_trait]
pub trait RevisionSource: Send + Sync {
    /// Return the current head revision.
    async fn current(&self) -> Result<Revision, SourceError>;
}

/// Revision source backed by `git rev-parse HEAD`.
pub struct GitRevisionSource {
    repo_dir: PathBuf,
}

impl GitRevisionSource {
    /// Create a source for the repository at `repo_dir`.
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        GitRevisionSource {
            repo_dir: repo_dir.into(),
        }
    }

    /// The watched repository directory.
    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }
}

#[async_trait]
impl RevisionSource for GitRevisionSource {
    async fn current(&self) -> Result<Revision, SourceError> {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(&self.repo_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| SourceError::Unavailable(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SourceError::Unavailable(format!(
                "git rev-parse HEAD failed: {}",
                stderr.trim()
            )));
        }

        let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if sha.is_empty() {
            return Err(SourceError::Unavailable(
                "git rev-parse HEAD returned empty output".to_string(),
            ));
        }

        Ok(Revision::new(sha))
    }
}
