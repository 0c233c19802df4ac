//! Health check handlers.

use axum::{Json, extract::State, http::StatusCode};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::api::state::AppState;
use crate::domain::{ApiResponse, HealthResponse, ReadyComponents, ReadyResponse};
use crate::error::ErrorCode;

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Readiness probe - runs the analyzer on a known test number.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<ReadyResponse>>) {
    let analyzer_ok = state.card_service.self_check();

    let data = ReadyResponse {
        ready: analyzer_ok,
        components: ReadyComponents {
            analyzer: analyzer_ok,
        },
    };

    if analyzer_ok {
        (StatusCode::OK, Json(ApiResponse::success(data)))
    } else {
        let response = ApiResponse {
            code: ErrorCode::SERVICE_UNAVAILABLE.as_i32(),
            message: "service unavailable".to_string(),
            data: Some(data),
        };
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<AppState>) -> String {
    state
        .metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}
