//! Prometheus metrics infrastructure.
//!
//! This module provides Prometheus-compatible metrics using the `metrics` crate
//! with `metrics-exporter-prometheus` for exposition.
//!
//! # Metrics Exposed
//!
//! - `primecheck_http_requests_total` - Total HTTP requests by method, path, status
//! - `primecheck_http_request_duration_seconds` - Request duration histogram
//! - `primecheck_candidates_evaluated_total` - Candidates run through the evaluator
//! - `primecheck_primes_found_total` - Candidates found to be prime
//! - `primecheck_rejected_payloads_total` - Bodies that failed classification
//! - `primecheck_check_duration_seconds` - Classification plus evaluation time

use std::sync::Arc;

use axum::{extract::State, http::header::CONTENT_TYPE, response::IntoResponse};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use primecheck_domain::PrimeCheckResponse;

/// Shared state containing the Prometheus handle for metrics rendering.
#[derive(Clone)]
pub struct MetricsState {
    handle: Arc<PrometheusHandle>,
}

impl MetricsState {
    /// Creates a new metrics state with the given Prometheus handle.
    pub fn new(handle: PrometheusHandle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }

    /// Renders the current metrics in Prometheus text format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Error type for metrics initialization.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("failed to install Prometheus recorder: {0}")]
    Install(#[from] BuildError),
}

/// Initializes the Prometheus metrics recorder.
///
/// This must be called once at application startup before any metrics are recorded.
///
/// # Errors
///
/// Returns the exporter's build error, e.g. when a global recorder is
/// already installed.
pub fn init_metrics() -> Result<MetricsState, MetricsError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    register_default_metrics();

    Ok(MetricsState::new(handle))
}

fn register_default_metrics() {
    metrics::describe_counter!(
        "primecheck_http_requests_total",
        "Total number of HTTP requests"
    );
    metrics::describe_histogram!(
        "primecheck_http_request_duration_seconds",
        "HTTP request duration in seconds"
    );

    metrics::describe_counter!(
        "primecheck_candidates_evaluated_total",
        "Total number of candidate integers evaluated for primality"
    );
    metrics::describe_counter!(
        "primecheck_primes_found_total",
        "Total number of candidates found to be prime"
    );
    metrics::describe_counter!(
        "primecheck_rejected_payloads_total",
        "Total number of request bodies that were not an integer array"
    );
    metrics::describe_histogram!(
        "primecheck_check_duration_seconds",
        "Classification and evaluation duration in seconds"
    );
}

/// Prometheus exposition format content type.
const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Handler for the `/metrics` endpoint.
pub async fn metrics_handler(State(state): State<MetricsState>) -> impl IntoResponse {
    ([(CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], state.render())
}

/// Records the outcome of one primality check request.
///
/// A no-op when no recorder is installed.
pub fn record_prime_check(response: &PrimeCheckResponse, duration_seconds: f64) {
    let outcome = match &response.is_prime {
        Some(results) => {
            metrics::counter!("primecheck_candidates_evaluated_total")
                .increment(results.len() as u64);
            metrics::counter!("primecheck_primes_found_total")
                .increment(response.prime_count() as u64);
            "evaluated"
        }
        None => {
            metrics::counter!("primecheck_rejected_payloads_total").increment(1);
            "rejected"
        }
    };

    metrics::histogram!("primecheck_check_duration_seconds", "outcome" => outcome)
        .record(duration_seconds);
}
