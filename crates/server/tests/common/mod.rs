//! Common test utilities for endpoint testing with mocks.
//!
//! Provides an in-process router backed by a mock engine and mock rasterizer,
//! so the full request pipeline runs without poppler or a real OMR engine.

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use optiscan_core::testing::{MockEngine, MockRasterizer};
use optiscan_core::{
    load_config_from_str, OmrOrchestrator, OrchestratorOptions, WorkspaceManager,
};

// The fixture is shared between test files; not every test uses every helper.
#[allow(dead_code)]
pub struct TestFixture {
    /// The Axum router under test
    pub router: Router,
    /// Completed mock-engine runs
    pub engine_invocations: Arc<AtomicUsize>,
    /// Workspace arena; dropped (and removed) with the fixture
    _workspace_root: TempDir,
}

#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

#[allow(dead_code)]
impl TestFixture {
    /// Fixture with a well-behaved engine that produces no outputs.
    pub async fn new() -> Self {
        Self::with_engine(MockEngine::new(), 2).await
    }

    /// Fixture with a custom engine and page count.
    pub async fn with_engine(engine: MockEngine, pages: u32) -> Self {
        let workspace_root = TempDir::new().unwrap();
        let engine_invocations = engine.invocation_counter();

        let config = load_config_from_str(
            r#"
[engine]
command = "/opt/omr/engine"
args = ["--mode", "batch"]
"#,
        )
        .unwrap();

        let orchestrator = OmrOrchestrator::new(
            WorkspaceManager::new(workspace_root.path()),
            Arc::new(MockRasterizer::with_pages(pages)),
            Arc::new(engine),
            OrchestratorOptions::default(),
        );

        let state = Arc::new(optiscan_server::state::AppState::new(config, orchestrator));
        let router = optiscan_server::api::create_router(state);

        Self {
            router,
            engine_invocations,
            _workspace_root: workspace_root,
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_multipart(&self, path: &str, form: MultipartForm) -> TestResponse {
        let (content_type, body) = form.build();
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse { status, body }
    }
}

/// Hand-built multipart/form-data body.
#[allow(dead_code)]
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

#[allow(dead_code)]
impl MultipartForm {
    pub fn new() -> Self {
        Self {
            boundary: "optiscan-test-boundary".to_string(),
            body: Vec::new(),
        }
    }

    /// Adds a form part; `filename` is included when given.
    pub fn part(mut self, name: &str, filename: Option<&str>, bytes: &[u8]) -> Self {
        self.body
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        match filename {
            Some(filename) => self.body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    name, filename
                )
                .as_bytes(),
            ),
            None => self.body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n", name).as_bytes(),
            ),
        }
        self.body
            .extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn build(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.body,
        )
    }
}

/// A complete, valid submission with all five parts.
#[allow(dead_code)]
pub fn complete_form() -> MultipartForm {
    MultipartForm::new()
        .part("config", Some("config.json"), b"{\"cols\": 4}")
        .part("evaluation", Some("evaluation.json"), b"{\"marking\": {}}")
        .part("template", Some("template.json"), b"{\"bubbles\": []}")
        .part("omr_marker", Some("marker.jpg"), &[0xff, 0xd8, 0xff, 0xd9])
        .part("pdf_file", Some("answers.pdf"), b"%PDF-1.4 sample")
}
