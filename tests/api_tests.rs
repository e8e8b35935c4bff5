//! End-to-end tests for the HTTP surface.
//!
//! The router is driven in-process with a stub [`ChatClient`], so no network
//! access or provider credentials are needed.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use askterm::application::prompts::CLASSIFICATION_HEADER;
use askterm::{
    build_router, ChatClient, CompletionRequest, Container, DomainError, LlmSettings, TopicDataset,
};

const FIXED_HTML: &str = "<div class=\"p-4 crt-spawn\"><h2>Python</h2></div>";

/// Answers the classification call with `topic` (or fails it) and the
/// generation call with [`FIXED_HTML`] (or fails it), counting each stage.
struct StubClient {
    topic: Option<&'static str>,
    fail_generation: bool,
    classify_calls: AtomicUsize,
    generate_calls: AtomicUsize,
}

impl StubClient {
    fn build(topic: Option<&'static str>, fail_generation: bool) -> Arc<Self> {
        Arc::new(Self {
            topic,
            fail_generation,
            classify_calls: AtomicUsize::new(0),
            generate_calls: AtomicUsize::new(0),
        })
    }

    fn answering(topic: &'static str) -> Arc<Self> {
        Self::build(Some(topic), false)
    }

    fn failing() -> Arc<Self> {
        Self::build(None, false)
    }

    fn failing_generation(topic: &'static str) -> Arc<Self> {
        Self::build(Some(topic), true)
    }
}

#[async_trait]
impl ChatClient for StubClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        if request.prompt().trim_start().starts_with(CLASSIFICATION_HEADER) {
            self.classify_calls.fetch_add(1, Ordering::SeqCst);
            self.topic
                .map(String::from)
                .ok_or_else(|| DomainError::completion("simulated transport error"))
        } else {
            self.generate_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_generation {
                return Err(DomainError::completion("simulated provider 503"));
            }
            Ok(FIXED_HTML.to_string())
        }
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

struct TestEnv {
    public_dir: TempDir,
    client: Arc<StubClient>,
}

impl TestEnv {
    fn new(client: Arc<StubClient>) -> Self {
        let public_dir = tempfile::tempdir().expect("Failed to create public dir");
        std::fs::write(
            public_dir.path().join("index.html"),
            "<html><body>terminal</body></html>",
        )
        .unwrap();
        std::fs::create_dir(public_dir.path().join("script")).unwrap();
        std::fs::write(
            public_dir.path().join("script").join("script.js"),
            "console.log('hi');",
        )
        .unwrap();

        Self { public_dir, client }
    }

    fn router(&self) -> axum::Router {
        let container = Container::with_chat_client(
            self.client.clone(),
            TopicDataset::builtin(),
            LlmSettings::default(),
        );
        build_router(Arc::new(container), self.public_dir.path())
    }

    async fn get(&self, uri: &str) -> Response {
        self.router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    fn public_path(&self) -> &Path {
        self.public_dir.path()
    }
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

fn assert_cors(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
}

#[tokio::test]
async fn test_health_endpoint() {
    let env = TestEnv::new(StubClient::answering("python"));

    for uri in ["/api", "/api/"] {
        let response = env.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert_eq!(body_text(response).await, "Hello World");
    }
}

#[tokio::test]
async fn test_ask_returns_generated_html_verbatim() {
    let env = TestEnv::new(StubClient::answering("python"));

    let response = env.get("/api/ask?query=anything").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");
    assert_eq!(body_text(response).await, FIXED_HTML);
    assert_eq!(env.client.classify_calls.load(Ordering::SeqCst), 1);
    assert_eq!(env.client.generate_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_missing_or_blank_query_is_rejected_without_calls() {
    let env = TestEnv::new(StubClient::answering("python"));

    for uri in ["/api/ask", "/api/ask?query=", "/api/ask?query=%20%20"] {
        let response = env.get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_cors(&response);
        assert_eq!(body_json(response).await["error"], "No query provided.");
    }

    assert_eq!(env.client.classify_calls.load(Ordering::SeqCst), 0);
    assert_eq!(env.client.generate_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_classification_failure_is_500_and_skips_generation() {
    let env = TestEnv::new(StubClient::failing());

    let response = env.get("/api/ask?query=tell%20me%20about%20go").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&response);
    assert_eq!(body_text(response).await, r#"{"error":"Error identifying topic."}"#);
    assert_eq!(env.client.classify_calls.load(Ordering::SeqCst), 1);
    assert_eq!(env.client.generate_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generation_failure_is_500_without_partial_html() {
    let env = TestEnv::new(StubClient::failing_generation("python"));

    let response = env.get("/api/ask?query=what%20is%20python").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&response);
    assert_eq!(body_text(response).await, r#"{"error":"Error generating content."}"#);
    assert_eq!(env.client.classify_calls.load(Ordering::SeqCst), 1);
    assert_eq!(env.client.generate_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_repeated_query_parameter_uses_first_value() {
    let env = TestEnv::new(StubClient::answering("python"));

    let response = env.get("/api/ask?query=python&query=golang").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert_eq!(body_text(response).await, FIXED_HTML);
    assert_eq!(env.client.classify_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_repeated_blank_query_is_json_error() {
    let env = TestEnv::new(StubClient::answering("python"));

    let response = env.get("/api/ask?query=&query=golang").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors(&response);
    assert_eq!(body_text(response).await, r#"{"error":"No query provided."}"#);
    assert_eq!(env.client.classify_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unknown_topic_is_400_and_skips_generation() {
    let env = TestEnv::new(StubClient::answering("cobol"));

    let response = env.get("/api/ask?query=mainframes").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Unable to identify a valid topic for the provided query."
    );
    assert_eq!(env.client.generate_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unmatched_paths_serve_landing_page() {
    let env = TestEnv::new(StubClient::answering("python"));

    for uri in ["/", "/about", "/deep/link/page"] {
        let response = env.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_cors(&response);
        assert!(body_text(response).await.contains("terminal"));
    }
}

#[tokio::test]
async fn test_static_assets_are_served_from_public_dir() {
    let env = TestEnv::new(StubClient::answering("python"));
    assert!(env.public_path().join("script/script.js").is_file());

    let response = env.get("/script/script.js").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert_eq!(body_text(response).await, "console.log('hi');");
}
