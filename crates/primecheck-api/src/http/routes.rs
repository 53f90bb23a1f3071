//! HTTP route definitions and handlers.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::DefaultBodyLimit,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::error;

use primecheck_domain::{check_primes, PrimeCheckResponse};
use primecheck_server::ServerConfig;

use crate::middleware::with_request_middleware;
use crate::observability::{metrics_handler, record_prime_check, MetricsState};

/// Creates the router from the default configuration, without `/metrics`.
pub fn create_router() -> Router {
    build_router(&ServerConfig::default(), None)
}

/// Builds the full HTTP router.
///
/// `POST /` is limited to `server.body_limit_bytes`; larger bodies get 413
/// before classification. Axum's own 2MB extractor limit is disabled so the
/// configured limit is the only one in effect.
///
/// `/metrics` is mounted only when `metrics_state` is given, which callers
/// do when `metrics.enabled` is set. Every route, `/health` included, runs
/// behind the request middleware.
pub fn build_router(config: &ServerConfig, metrics_state: Option<MetricsState>) -> Router {
    let mut router = Router::new()
        .route("/", post(is_prime_numbers))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.server.body_limit_bytes))
        .route("/health", get(health_check));

    if let Some(state) = metrics_state {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics_handler))
                .with_state(state),
        );
    }

    with_request_middleware(router)
}

// ============================================================
// Handlers
// ============================================================

/// Primality check for a batch of candidates.
///
/// Always answers `200 OK`. A body that is not a JSON array of integers
/// yields `{"is_prime": null}` instead of an error status.
///
/// The body is read as raw bytes so that classification, not the JSON
/// extractor, decides what is acceptable; no `Content-Type` is required.
async fn is_prime_numbers(body: Bytes) -> Json<PrimeCheckResponse> {
    let start = Instant::now();

    // Trial division is CPU bound; keep it off the async worker threads.
    // A client that disconnects only drops the awaiting future: the blocking
    // task cannot be cancelled and runs every element to completion.
    let response = match tokio::task::spawn_blocking(move || check_primes(&body)).await {
        Ok(response) => response,
        Err(e) => {
            error!("primality evaluation task failed: {}", e);
            PrimeCheckResponse::rejected()
        }
    };

    record_prime_check(&response, start.elapsed().as_secs_f64());

    Json(response)
}

/// Health check - liveness probe.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
