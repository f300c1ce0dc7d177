//! Read-only query API over the run store.
//!
//! The watcher is the sole writer; these handlers only call the
//! store's read operations and never observe the watcher itself.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use bosun_core::{Revision, RunRecord};
use bosun_store::{RunStore, StoreError};
use serde::Serialize;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RunStore>,
}

pub fn router(store: Arc<dyn RunStore>) -> Router {
    let state = AppState { store };
    Router::new()
        .route("/", get(liveness))
        .route("/runs", get(list_runs))
        .route("/run/{revision}", get(get_run))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn liveness() -> &'static str {
    "Server is running."
}

/// Response body for `GET /runs`.
#[derive(Debug, Serialize)]
pub struct RunsResponse {
    pub total: usize,
    pub data: Vec<RunRecord>,
}

async fn list_runs(State(st): State<AppState>) -> Result<Json<RunsResponse>, AppError> {
    let data = st.store.all().await?;
    Ok(Json(RunsResponse {
        total: data.len(),
        data,
    }))
}

async fn get_run(
    State(st): State<AppState>,
    Path(revision): Path<String>,
) -> Result<Json<RunRecord>, AppError> {
    let record = st.store.find(&Revision::new(revision)).await?;
    Ok(Json(record))
}

#[derive(Debug)]
pub struct AppError(StoreError);

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        Self(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(serde_json::json!({
            "error": self.0.to_string()
        }));
        (status, body).into_response()
    }
}
