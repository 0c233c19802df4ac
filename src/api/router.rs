//! Router setup and configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{card, health};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes
    let mut health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready));

    if state.config.observability.metrics_enabled {
        health_routes = health_routes.route(
            &state.config.observability.metrics_path,
            get(health::metrics),
        );
    }

    // Card analysis routes
    let card_routes = Router::new()
        .route("/analyze", post(card::analyze))
        .route("/batch", post(card::analyze_batch))
        .route("/networks", get(card::list_networks));

    Router::new()
        .merge(health_routes)
        .nest("/v1/card", card_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}
