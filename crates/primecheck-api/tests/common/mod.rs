//! Shared test utilities for primecheck API tests.

// Each test file compiles this module separately and uses a different subset.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use primecheck_api::http::create_router;
use primecheck_domain::PrimeCheckResponse;

/// Maximum response size read back in tests.
pub const RESPONSE_LIMIT: usize = 1024 * 1024;

/// Create a test app with the default body limit.
pub fn create_test_app() -> Router {
    create_router()
}

/// POST a raw body to `/` and return the status and decoded response.
pub async fn post_raw(app: Router, body: impl Into<Body>) -> (StatusCode, PrimeCheckResponse) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), RESPONSE_LIMIT)
        .await
        .unwrap();
    let decoded = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "response should decode: {e}: {}",
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, decoded)
}

/// Serialize `value` as JSON and POST it to `/`.
pub async fn post_json(app: Router, value: serde_json::Value) -> (StatusCode, PrimeCheckResponse) {
    post_raw(app, value.to_string()).await
}
