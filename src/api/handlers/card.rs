//! Card analysis handlers.

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::domain::{
    AnalyzeRequest, AnalyzeResponse, ApiResponse, BatchAnalyzeRequest, BatchAnalyzeResponse,
    NetworkListResponse,
};
use crate::error::Result;
use crate::service::NETWORK_RULES;

/// Analyze a single card number.
///
/// # Errors
///
/// Returns an error if the input exceeds the configured size limit.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<AnalyzeResponse>>> {
    let analysis = state.card_service.analyze(request.input.as_deref())?;

    Ok(Json(ApiResponse::success(AnalyzeResponse::from(analysis))))
}

/// Analyze a batch of card numbers.
///
/// # Errors
///
/// Returns an error if the batch is empty, too large, or contains an
/// oversized input.
pub async fn analyze_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchAnalyzeRequest>,
) -> Result<Json<ApiResponse<BatchAnalyzeResponse>>> {
    let results = state
        .card_service
        .analyze_batch(&request.inputs)?
        .into_iter()
        .map(AnalyzeResponse::from)
        .collect();

    Ok(Json(ApiResponse::success(BatchAnalyzeResponse { results })))
}

/// List the network classification rules in evaluation order.
pub async fn list_networks() -> Json<ApiResponse<NetworkListResponse>> {
    Json(ApiResponse::success(NetworkListResponse {
        rules: NETWORK_RULES.to_vec(),
    }))
}
