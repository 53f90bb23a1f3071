//! Observability infrastructure for primecheck.
//!
//! This module provides:
//! - Prometheus metrics endpoint
//! - Structured logging configuration

mod logging;
mod metrics;

pub use logging::init_logging;
pub use metrics::{init_metrics, metrics_handler, record_prime_check, MetricsError, MetricsState};
