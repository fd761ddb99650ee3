// Common test utilities shared across integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use phish_detector::{
    build_router, AppConfig, AppState, PatternScanner, ReputationLookup, VirusTotalClient,
    VirusTotalConfig,
};
use serde::Serialize;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use tower::util::ServiceExt;

/// Reputation stub with a fixed answer that records every lookup
#[derive(Default)]
pub struct StubReputation {
    pub blacklisted: bool,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl StubReputation {
    pub fn answering(blacklisted: bool) -> Arc<Self> {
        Arc::new(Self {
            blacklisted,
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReputationLookup for StubReputation {
    async fn is_blacklisted(&self, url: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        self.blacklisted
    }
}

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Send a POST request
    pub fn post(&self, uri: &str) -> TestRequest {
        TestRequest::new(self, "POST", uri)
    }

    /// Send a GET request
    pub fn get(&self, uri: &str) -> TestRequest {
        TestRequest::new(self, "GET", uri)
    }
}

/// Test request builder
pub struct TestRequest<'a> {
    app: &'a TestApp,
    request: Request<Body>,
}

impl<'a> TestRequest<'a> {
    fn new(app: &'a TestApp, method: &str, uri: &str) -> Self {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        Self { app, request }
    }

    /// Add JSON body to request
    pub fn json<T: Serialize>(self, body: &T) -> Self {
        let body_bytes = serde_json::to_vec(body).unwrap();
        self.raw_body("application/json", body_bytes)
    }

    /// Add an arbitrary body with the given content type
    pub fn raw_body(mut self, content_type: &str, body: impl Into<Body>) -> Self {
        self.request = Request::builder()
            .method(self.request.method().clone())
            .uri(self.request.uri().clone())
            .header("content-type", content_type)
            .body(body.into())
            .unwrap();
        self
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request
            .headers_mut()
            .insert(
                axum::http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                axum::http::HeaderValue::from_str(value).unwrap(),
            );
        self
    }

    /// Send the request
    pub async fn send(self) -> TestResponse {
        let response = self.app.app.clone().oneshot(self.request).await.unwrap();

        TestResponse { response }
    }
}

/// Test response wrapper
pub struct TestResponse {
    response: Response<Body>,
}

impl TestResponse {
    /// Get status code
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Get a response header as a string
    pub fn header(&self, name: &str) -> Option<String> {
        self.response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }

    /// Parse JSON response
    pub async fn json<T: serde::de::DeserializeOwned>(self) -> T {
        let body = axum::body::to_bytes(self.response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    /// Get response body as text
    pub async fn text(self) -> String {
        let body = axum::body::to_bytes(self.response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }
}

/// Setup test application with a substituted reputation lookup
pub fn setup_test_app(reputation: Arc<dyn ReputationLookup>) -> TestApp {
    setup_test_app_with_config(AppConfig::default(), reputation)
}

pub fn setup_test_app_with_config(
    config: AppConfig,
    reputation: Arc<dyn ReputationLookup>,
) -> TestApp {
    let state = AppState {
        config: Arc::new(config),
        reputation,
        pattern_scanner: Arc::new(PatternScanner::new()),
    };

    TestApp {
        app: build_router(state),
    }
}

/// Setup test application with the real VirusTotal client and no API key
pub fn setup_unconfigured_app() -> TestApp {
    let config = AppConfig::default();
    let client = VirusTotalClient::new(VirusTotalConfig::default()).unwrap();
    setup_test_app_with_config(config, Arc::new(client))
}
