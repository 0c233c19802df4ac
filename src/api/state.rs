//! Application state for Axum handlers.

use std::sync::Arc;

use metrics::{describe_gauge, gauge};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::CardService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Card analysis service.
    pub card_service: Arc<CardService>,
    /// Prometheus render handle, if a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// With a recorder installed, the `cardid_up` gauge is set to 1 so the
    /// first scrape already reports the worker as up.
    pub fn new(config: Arc<AppConfig>, metrics: Option<PrometheusHandle>) -> Self {
        let card_service = Arc::new(CardService::new(&config.analysis));

        if metrics.is_some() {
            describe_gauge!("cardid_up", "Whether the service is up");
            gauge!("cardid_up").set(1.0);
        }

        Self {
            config,
            card_service,
            metrics,
        }
    }
}
