//! Per-request observability layer.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::{Duration, Instant},
};

use axum::{
    extract::MatchedPath,
    http::{HeaderValue, Request, Response, StatusCode},
};
use tower::{Layer, Service};
use tracing::{field::Empty, info, info_span, Instrument, Span};
use uuid::Uuid;

/// HTTP header carrying the request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Layer that gives every request an ID, a span, start and completion logs,
/// and an entry in the HTTP request metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestObservabilityLayer;

impl<S> Layer<S> for RequestObservabilityLayer {
    type Service = RequestObservabilityService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestObservabilityService { inner }
    }
}

#[derive(Debug, Clone)]
pub struct RequestObservabilityService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for RequestObservabilityService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<ReqBody>) -> Self::Future {
        let request_id = assign_request_id(&mut request);
        let method = request.method().to_string();
        let path = route_label(&request);

        let span = info_span!(
            "http_request",
            method = %method,
            path = %path,
            request_id = request_id
                .as_ref()
                .and_then(|id| id.to_str().ok())
                .unwrap_or("-"),
            http.status_code = Empty,
        );

        // The readied service handles this request; a fresh clone stays behind
        let ready = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, ready);
        let start = Instant::now();

        Box::pin(
            async move {
                info!(target: "primecheck::http", "request started");

                let mut response = inner.call(request).await?;
                let status = response.status();
                let elapsed = start.elapsed();

                Span::current().record("http.status_code", status.as_u16());
                info!(
                    target: "primecheck::http",
                    status = status.as_u16(),
                    latency_us = elapsed.as_micros() as u64,
                    "request completed"
                );
                record_http_request(&method, &path, status, elapsed);

                if let Some(id) = request_id {
                    response.headers_mut().insert(REQUEST_ID_HEADER, id);
                }
                Ok(response)
            }
            .instrument(span),
        )
    }
}

/// Keeps a non-empty incoming request ID, otherwise writes a fresh UUID v4
/// into the request headers.
fn assign_request_id<B>(request: &mut Request<B>) -> Option<HeaderValue> {
    let id = match request.headers().get(REQUEST_ID_HEADER) {
        Some(existing) if !existing.is_empty() => existing.clone(),
        _ => HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?,
    };
    request.headers_mut().insert(REQUEST_ID_HEADER, id.clone());
    Some(id)
}

/// Matched route pattern when routing has run, raw path otherwise.
fn route_label<B>(request: &Request<B>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

fn record_http_request(method: &str, path: &str, status: StatusCode, elapsed: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status_class", status_class(status).to_string()),
    ];

    metrics::counter!("primecheck_http_requests_total", &labels).increment(1);
    metrics::histogram!("primecheck_http_request_duration_seconds", &labels)
        .record(elapsed.as_secs_f64());
}
