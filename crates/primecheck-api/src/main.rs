//! primecheck server binary
//!
//! Answers `POST /` with a positional primality report for a JSON array of
//! integers.
//!
//! # Usage
//!
//! ```bash
//! # With config file
//! primecheck --config config.yaml
//!
//! # With environment variables only
//! PRIMECHECK_SERVER__PORT=9090 primecheck
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tokio::signal;
use tracing::info;

use primecheck_api::http::build_router;
use primecheck_api::observability::{init_logging, init_metrics};
use primecheck_server::ServerConfig;

/// primecheck - batch primality checks over HTTP
#[derive(Parser, Debug)]
#[command(name = "primecheck")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => ServerConfig::load(&path)?,
        None => ServerConfig::from_env()?,
    };

    init_logging(&config.logging);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting primecheck server");

    let metrics_state = if config.metrics.enabled {
        info!("Metrics enabled at /metrics");
        Some(init_metrics()?)
    } else {
        info!("Metrics disabled");
        None
    };
    let router = build_router(&config, metrics_state);

    let addr: SocketAddr = config.bind_address().parse()?;
    run_http_server(router, addr).await
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
async fn run_http_server(router: axum::Router, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
