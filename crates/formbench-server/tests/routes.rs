#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

//! In-process route tests via `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use formbench_core::audit::{AuditSink, MemoryAuditSink};
use formbench_core::error::{FormbenchError, Result};
use formbench_core::form::FormSubmission;
use formbench_server::{app_state::AppState, config, router};

const INDEX_BODY: &str = "<html><body><h1>formbench demo</h1></body></html>";

fn test_state(sink: Arc<dyn AuditSink>, redact: bool) -> AppState {
    let index = std::env::temp_dir().join(format!(
        "formbench-index-{}-{:?}.html",
        std::process::id(),
        std::thread::current().id()
    ));
    std::fs::write(&index, INDEX_BODY).unwrap();

    let yaml = format!(
        r#"
version: 1
server:
  listen: "127.0.0.1:0"
  index_file: "{}"
  log_file: "unused.log"
  redact_form_fields: {}
"#,
        index.display(),
        redact
    );
    let cfg = config::load_from_str(&yaml).unwrap();
    AppState::with_sink(cfg, sink).unwrap()
}

fn test_app(sink: Arc<dyn AuditSink>) -> Router {
    router::build_router(test_state(sink, false))
}

async fn body_json(res: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/submit-form")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn index_is_byte_for_byte_stable() {
    let sink = Arc::new(MemoryAuditSink::new());
    let app = test_app(sink.clone());

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let res = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        bodies.push(bytes);
    }
    assert_eq!(bodies[0], INDEX_BODY.as_bytes());
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);

    let lines = sink.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.ends_with(" - GET /\n")));
}

#[tokio::test]
async fn submit_form_confirms_and_logs_all_fields() {
    let sink = Arc::new(MemoryAuditSink::new());
    let app = test_app(sink.clone());

    let payload = serde_json::to_string(&FormSubmission::sample()).unwrap();
    let res = app.oneshot(post_form(&payload)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, serde_json::json!({ "status": "Form submitted" }));

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("John Doe"));
    assert!(lines[0].contains("johndoe@example.com"));
    assert!(lines[0].contains("This is a test message"));
}

#[tokio::test]
async fn click_button_returns_fixed_payload() {
    let sink = Arc::new(MemoryAuditSink::new());
    let app = test_app(sink.clone());

    let res = app
        .oneshot(Request::builder().uri("/click-button").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, serde_json::json!({ "status": "Button clicked" }));

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" - GET /click-button\n"));
}

#[tokio::test]
async fn malformed_body_is_rejected_then_service_continues() {
    let sink = Arc::new(MemoryAuditSink::new());
    let app = test_app(sink.clone());

    let res = app.clone().oneshot(post_form("{not json")).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err = body_json(res).await;
    assert_eq!(err["error"], "MALFORMED_REQUEST");

    // The rejection itself is audited.
    assert_eq!(sink.lines().len(), 1);
    assert!(sink.lines()[0].contains("rejected: malformed body"));

    // A valid request immediately after succeeds.
    let payload = serde_json::to_string(&FormSubmission::sample()).unwrap();
    let res = app.oneshot(post_form(&payload)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(sink.lines().len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn n_concurrent_posts_yield_n_full_lines() {
    let sink = Arc::new(MemoryAuditSink::new());
    let app = test_app(sink.clone());

    let n = 32;
    let payload = serde_json::to_string(&FormSubmission::sample()).unwrap();
    let mut tasks = Vec::new();
    for _ in 0..n {
        let app = app.clone();
        let payload = payload.clone();
        tasks.push(tokio::spawn(async move {
            app.oneshot(post_form(&payload)).await.unwrap().status()
        }));
    }
    for t in tasks {
        assert_eq!(t.await.unwrap(), StatusCode::OK);
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), n);
    for line in &lines {
        assert!(line.ends_with('\n'));
        assert!(line.contains("POST /submit-form - Name: John Doe"));
    }
}

#[tokio::test]
async fn redaction_policy_hides_field_values() {
    let sink = Arc::new(MemoryAuditSink::new());
    let app = router::build_router(test_state(sink.clone(), true));

    let payload = serde_json::to_string(&FormSubmission::sample()).unwrap();
    let res = app.oneshot(post_form(&payload)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].contains("John Doe"));
    assert!(!lines[0].contains("johndoe@example.com"));
    assert!(lines[0].contains("chars>"));
}

/// Sink that always fails, to exercise the log-write-failure path.
struct BrokenSink;

#[async_trait::async_trait]
impl AuditSink for BrokenSink {
    async fn record(&self, _event: &str) -> Result<()> {
        Err(FormbenchError::LogWrite("disk full".into()))
    }
}

#[tokio::test]
async fn log_write_failure_is_scoped_to_one_request() {
    let app = test_app(Arc::new(BrokenSink));

    let res = app
        .clone()
        .oneshot(Request::builder().uri("/click-button").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(res).await["error"], "LOG_WRITE_FAILURE");

    // The process keeps answering; no wedged state.
    let res = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn metrics_expose_request_counters() {
    let sink = Arc::new(MemoryAuditSink::new());
    let app = test_app(sink);

    let res = app
        .clone()
        .oneshot(Request::builder().uri("/click-button").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("formbench_http_requests_total{route=\"/click-button\",status=\"200\"} 1"));
}
