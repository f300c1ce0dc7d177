//! Bosun daemon entry point.
//!
//! Wires the injected collaborators together: the git revision source
//! and HTTP step executor feed the watch loop, the in-memory run store
//! is shared between the watcher (writer) and the query API (reader).

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use bosun_core::{init_tracing, ExecutorConfig, GitRevisionSource, HttpStepExecutor};
use bosun_store::{MemoryRunStore, RunStore};
use bosun_watch::{WatchConfig, Watcher};
use bosund::http;

#[derive(Parser)]
#[command(name = "bosund")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Commit watcher and pipeline daemon", long_about = None)]
struct Cli {
    /// Path to the watched git repository
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// URL of the remote step executor
    #[arg(long)]
    executor_url: String,

    /// Listen address for the query API, e.g. 127.0.0.1:8080
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Seconds between head revision checks
    #[arg(long, default_value_t = 1)]
    poll_interval_secs: u64,

    /// Seconds between queue drain passes
    #[arg(long, default_value_t = 10)]
    drain_interval_secs: u64,

    /// Status token the executor reports for a passing step
    #[arg(long, default_value = "Success")]
    success_token: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    let repo = std::fs::canonicalize(&cli.repo).unwrap_or_else(|_| cli.repo.clone());
    let repo_path = repo.to_string_lossy().to_string();

    let source = Arc::new(GitRevisionSource::new(&repo));
    let executor = Arc::new(HttpStepExecutor::new(
        ExecutorConfig::new(&cli.executor_url).with_success_token(&cli.success_token),
    ));
    let store: Arc<dyn RunStore> = Arc::new(MemoryRunStore::new());

    let config = WatchConfig::new(repo_path)
        .with_poll_interval(Duration::from_secs(cli.poll_interval_secs))
        .with_drain_interval(Duration::from_secs(cli.drain_interval_secs));

    let watcher = Watcher::new(source, executor, store.clone(), config);
    tokio::spawn(watcher.run());

    let listener = tokio::net::TcpListener::bind(&cli.listen)
        .await
        .with_context(|| format!("Failed to bind {}", cli.listen))?;
    info!(listen = %cli.listen, "query API listening");

    axum::serve(listener, http::router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("query API server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
