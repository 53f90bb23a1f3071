//! API middleware.
//!
//! A single layer, [`RequestObservabilityLayer`], wraps every route:
//! - keeps or generates the `x-request-id` header and echoes it back
//! - opens an `http_request` span carrying the ID
//! - logs start and completion under the `primecheck::http` target
//! - emits `primecheck_http_requests_total` and
//!   `primecheck_http_request_duration_seconds` through the `metrics` facade

mod request;

pub use request::{RequestObservabilityLayer, REQUEST_ID_HEADER};

use axum::Router;

/// Wraps a router in the request middleware.
pub fn with_request_middleware(router: Router) -> Router {
    router.layer(RequestObservabilityLayer)
}

#[cfg(test)]
mod tests;
