//! primecheck-api: HTTP API layer
//!
//! This crate provides the web transport around `primecheck-domain`:
//! - HTTP endpoint via Axum
//! - Middleware (request IDs, metrics, tracing, logging)
//! - Observability (structured logging, Prometheus metrics)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               primecheck-api                 │
//! ├─────────────────────────────────────────────┤
//! │  http/          - HTTP endpoints            │
//! │  middleware/    - Request IDs, metrics, etc │
//! │  observability/ - Logging and metrics setup │
//! └─────────────────────────────────────────────┘
//! ```

pub mod http;
pub mod middleware;
pub mod observability;
