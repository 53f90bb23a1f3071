//! Middleware tests.

use std::future::Future;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

use super::*;

fn test_app() -> Router {
    let router = Router::new()
        .route("/", get(|| async { "OK" }))
        .route(
            "/echo-id",
            get(|req: Request<Body>| async move {
                req.headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("missing")
                    .to_string()
            }),
        )
        .route(
            "/error",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    with_request_middleware(router)
}

async fn get_status(app: Router, uri: &str) -> StatusCode {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

/// Runs `requests` on a current-thread runtime with a local Prometheus
/// recorder and returns the rendered exposition text.
fn render_metrics_of<F: Future<Output = ()>>(requests: F) -> String {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    metrics::with_local_recorder(&recorder, || runtime.block_on(requests));
    handle.render()
}

/// Value of the `primecheck_http_requests_total` sample whose labels contain
/// every fragment in `label_parts`.
fn request_count(rendered: &str, label_parts: &[&str]) -> Option<u64> {
    rendered
        .lines()
        .filter(|line| line.starts_with("primecheck_http_requests_total{"))
        .find(|line| label_parts.iter().all(|part| line.contains(part)))
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
}

#[tokio::test]
async fn test_request_passes_through_middleware() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[test]
fn test_http_requests_are_counted_by_status_class() {
    let rendered = render_metrics_of(async {
        assert_eq!(get_status(test_app(), "/").await, StatusCode::OK);
        assert_eq!(get_status(test_app(), "/").await, StatusCode::OK);
        assert_eq!(
            get_status(test_app(), "/error").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(test_app(), "/missing").await,
            StatusCode::NOT_FOUND
        );
    });

    assert_eq!(
        request_count(&rendered, &[r#"path="/""#, r#"status_class="2xx""#]),
        Some(2)
    );
    assert_eq!(
        request_count(&rendered, &[r#"path="/error""#, r#"status_class="5xx""#]),
        Some(1)
    );
    assert_eq!(
        request_count(&rendered, &[r#"status_class="4xx""#]),
        Some(1)
    );
    assert!(rendered.contains("primecheck_http_request_duration_seconds"));
}

#[test]
fn test_without_recorder_requests_still_succeed() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    let status = runtime.block_on(get_status(test_app(), "/"));
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_is_generated_and_seen_by_handler() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/echo-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .expect("response should carry x-request-id")
        .to_str()
        .unwrap()
        .to_string();
    assert!(uuid::Uuid::parse_str(&response_id).is_ok());

    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    assert_eq!(body, response_id.as_bytes());
}

#[tokio::test]
async fn test_incoming_request_id_is_propagated() {
    let custom_id = "batch-7f3a";
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/echo-id")
                .header(REQUEST_ID_HEADER, custom_id)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), custom_id);
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    assert_eq!(&body[..], custom_id.as_bytes());
}

#[tokio::test]
async fn test_empty_request_id_is_replaced() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, "")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let response_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(uuid::Uuid::parse_str(response_id).is_ok());
}

#[tokio::test]
async fn test_request_id_is_set_on_error_responses() {
    let response = test_app()
        .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}
