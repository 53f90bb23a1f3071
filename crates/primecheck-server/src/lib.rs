//! primecheck-server: Server configuration
//!
//! This crate contains the process-level settings the HTTP layer is built
//! from:
//! - Network binding and request body limit
//! - Logging level and format
//! - Metrics toggle
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              primecheck-server               │
//! ├─────────────────────────────────────────────┤
//! │  config.rs   - Configuration management     │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;

// Re-exports for convenience
pub use config::{ConfigLoadError, ServerConfig};
