//! End-to-end tests for the query API served over a real socket.

use std::sync::Arc;

use bosun_core::{Revision, RunRecord, Step};
use bosun_store::{MemoryRunStore, RunStore};
use bosund::http::router;

async fn serve(store: Arc<dyn RunStore>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(store)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn seeded_store() -> Arc<dyn RunStore> {
    let store: Arc<dyn RunStore> = Arc::new(MemoryRunStore::new());
    store
        .append(RunRecord::new(Revision::from("rev-x"), vec![]))
        .await
        .unwrap();
    store
        .append(RunRecord::new(Revision::from("rev-y"), vec![Step::Build]))
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn liveness_endpoint_reports_running() {
    let base = serve(Arc::new(MemoryRunStore::new())).await;

    let response = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "Server is running.");
}

#[tokio::test]
async fn runs_endpoint_lists_all_in_append_order() {
    let base = serve(seeded_store().await).await;

    let response = reqwest::get(format!("{base}/runs")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"], 2);
    assert_eq!(body["data"][0]["revision"], "rev-x");
    assert_eq!(body["data"][0]["status"], "success");
    assert_eq!(body["data"][1]["revision"], "rev-y");
    assert_eq!(body["data"][1]["status"], "failure");
    assert_eq!(body["data"][1]["failed_steps"][0], "build");
}

#[tokio::test]
async fn run_endpoint_returns_matching_record() {
    let base = serve(seeded_store().await).await;

    let response = reqwest::get(format!("{base}/run/rev-y")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["revision"], "rev-y");
    assert_eq!(body["failed_steps"], serde_json::json!(["build"]));
}

#[tokio::test]
async fn run_endpoint_unknown_revision_is_404() {
    let base = serve(seeded_store().await).await;

    let response = reqwest::get(format!("{base}/run/rev-z")).await.unwrap();
    assert_eq!(response.status(), 404);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("rev-z"));
}

#[tokio::test]
async fn runs_endpoint_empty_store_reports_zero() {
    let base = serve(Arc::new(MemoryRunStore::new())).await;

    let response = reqwest::get(format!("{base}/runs")).await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"], 0);
    assert_eq!(body["data"], serde_json::json!([]));
}
