//! # CardID Worker
//!
//! Payment card number identification:
//!
//! - **Extraction**: pull a bounded digit sequence out of free-form input (spaces and dashes allowed)
//! - **Validation**: Luhn (mod 10) checksum
//! - **Classification**: Visa, Mastercard, American Express or Discover by length and prefix
//!
//! The pipeline is pure and synchronous; see [`service::analyze`]. The same
//! pipeline is served over HTTP by [`run`] and on the command line by the
//! `cardid` binary.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           Worker Service                             │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌──────────────────────────────────┐  ┌────────┐ │
//! │  │  API Layer  │  │          Service Layer           │  │ Domain │ │
//! │  │  (Axum)     │→ │ extract → luhn → network (rules) │  │ Models │ │
//! │  └─────────────┘  └──────────────────────────────────┘  └────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::create_router;
use crate::api::state::AppState;
use crate::config::AppConfig;

/// Run the card identification worker service.
///
/// This function:
/// 1. Initializes logging
/// 2. Installs the Prometheus recorder (if metrics are enabled)
/// 3. Creates the services and router
/// 4. Starts the HTTP server
/// 5. Handles graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The metrics recorder cannot be installed
/// - HTTP server fails to bind
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting CardID Worker"
    );

    let metrics = if config.observability.metrics_enabled {
        let handle = PrometheusBuilder::new().install_recorder()?;
        info!(path = %config.observability.metrics_path, "Metrics recorder installed");
        Some(handle)
    } else {
        None
    };

    let addr = SocketAddr::new(config.server.host, config.server.port);

    let state = AppState::new(Arc::new(config), metrics);
    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize logging based on configuration.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.observability.log_format == "json" {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber.with(fmt::layer()).init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
