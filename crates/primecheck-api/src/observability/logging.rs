//! Structured logging configuration.
//!
//! When JSON formatting is enabled, log entries are output as JSON objects:
//!
//! ```json
//! {"timestamp":"2024-01-15T10:30:00.000Z","level":"INFO","target":"primecheck","fields":{"message":"HTTP server listening"}}
//! ```
//!
//! `RUST_LOG` takes precedence over the configured level.

use primecheck_server::config::LoggingSettings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Builds the filter for the configured level.
///
/// Level names are matched case-insensitively. Anything unparseable falls
/// back to `info`.
fn level_filter(level: &str) -> EnvFilter {
    let level = level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy("")
}

/// Installs the global subscriber: JSON lines when `settings.json` is set,
/// pretty text otherwise.
///
/// Call once at startup; later calls leave the first subscriber in place.
pub fn init_logging(settings: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(&settings.level));

    let result = if settings.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_target(true))
            .try_init()
    };

    if let Err(e) = result {
        tracing::warn!("logging already initialized: {}", e);
    }
}
