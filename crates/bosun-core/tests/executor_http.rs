//! Wire-level tests for the HTTP step executor client.
//!
//! Each test stands up a raw TCP responder so the classification table
//! (success token, error status, malformed body, dropped connection)
//! is exercised against real HTTP traffic.

use bosun_core::{ExecutorConfig, HttpStepExecutor, Revision, Step, StepExecutor, StepOutcome};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Read one full HTTP request (headers plus content-length body).
async fn read_request(socket: &mut TcpStream) {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        data.extend_from_slice(&buf[..n]);
        let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&data[..pos]).to_ascii_lowercase();
        let content_length: usize = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0);
        if data.len() - (pos + 4) >= content_length {
            break;
        }
    }
}

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Serve exactly one request. `response: None` reads the request and
/// then drops the socket without answering, simulating an executor
/// crash mid-exchange.
async fn one_shot_responder(response: Option<String>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            read_request(&mut socket).await;
            if let Some(resp) = response {
                let _ = socket.write_all(resp.as_bytes()).await;
                let _ = socket.flush().await;
            }
        }
    });
    format!("http://{addr}/run")
}

fn executor_for(endpoint: &str) -> HttpStepExecutor {
    HttpStepExecutor::new(ExecutorConfig::new(endpoint))
}

#[tokio::test]
async fn success_token_passes() {
    let endpoint = one_shot_responder(Some(http_response("200 OK", r#"{"status":"Success"}"#))).await;
    let executor = executor_for(&endpoint);
    let outcome = executor
        .invoke(&Revision::from("abc123"), "/srv/repo", Step::Lint)
        .await;
    assert_eq!(outcome, StepOutcome::Passed);
}

#[tokio::test]
async fn failure_token_fails() {
    let endpoint = one_shot_responder(Some(http_response("200 OK", r#"{"status":"Failure"}"#))).await;
    let executor = executor_for(&endpoint);
    let outcome = executor
        .invoke(&Revision::from("abc123"), "/srv/repo", Step::Build)
        .await;
    assert_eq!(outcome, StepOutcome::Failed);
}

#[tokio::test]
async fn token_comparison_is_case_sensitive() {
    let endpoint = one_shot_responder(Some(http_response("200 OK", r#"{"status":"success"}"#))).await;
    let executor = executor_for(&endpoint);
    let outcome = executor
        .invoke(&Revision::from("abc123"), "/srv/repo", Step::Lint)
        .await;
    assert_eq!(outcome, StepOutcome::Failed);
}

#[tokio::test]
async fn configured_token_overrides_default() {
    let endpoint = one_shot_responder(Some(http_response("200 OK", r#"{"status":"success"}"#))).await;
    let executor =
        HttpStepExecutor::new(ExecutorConfig::new(&endpoint).with_success_token("success"));
    let outcome = executor
        .invoke(&Revision::from("abc123"), "/srv/repo", Step::Lint)
        .await;
    assert_eq!(outcome, StepOutcome::Passed);
}

#[tokio::test]
async fn error_status_fails() {
    let endpoint =
        one_shot_responder(Some(http_response("500 Internal Server Error", "{}"))).await;
    let executor = executor_for(&endpoint);
    let outcome = executor
        .invoke(&Revision::from("abc123"), "/srv/repo", Step::Test)
        .await;
    assert_eq!(outcome, StepOutcome::Failed);
}

#[tokio::test]
async fn malformed_body_fails_closed() {
    let endpoint = one_shot_responder(Some(http_response("200 OK", "not json at all"))).await;
    let executor = executor_for(&endpoint);
    let outcome = executor
        .invoke(&Revision::from("abc123"), "/srv/repo", Step::Test)
        .await;
    assert_eq!(outcome, StepOutcome::Failed);
}

#[tokio::test]
async fn missing_status_field_fails_closed() {
    let endpoint = one_shot_responder(Some(http_response("200 OK", r#"{"ok":true}"#))).await;
    let executor = executor_for(&endpoint);
    let outcome = executor
        .invoke(&Revision::from("abc123"), "/srv/repo", Step::Build)
        .await;
    assert_eq!(outcome, StepOutcome::Failed);
}

#[tokio::test]
async fn connection_refused_fails_even_for_test() {
    // Bind then immediately drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let executor = executor_for(&format!("http://{addr}/run"));
    let outcome = executor
        .invoke(&Revision::from("abc123"), "/srv/repo", Step::Test)
        .await;
    assert_eq!(outcome, StepOutcome::Failed);
}

#[tokio::test]
async fn dropped_connection_is_indeterminate_for_test() {
    let endpoint = one_shot_responder(None).await;
    let executor = executor_for(&endpoint);
    let outcome = executor
        .invoke(&Revision::from("abc123"), "/srv/repo", Step::Test)
        .await;
    assert_eq!(outcome, StepOutcome::Indeterminate);
}

#[tokio::test]
async fn dropped_connection_fails_other_steps() {
    let endpoint = one_shot_responder(None).await;
    let executor = executor_for(&endpoint);
    let outcome = executor
        .invoke(&Revision::from("abc123"), "/srv/repo", Step::Lint)
        .await;
    assert_eq!(outcome, StepOutcome::Failed);
}
