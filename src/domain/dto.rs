//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use super::{Analysis, CardNetwork, ExtractionOutcome};
use crate::service::network::NetworkRule;

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

/// Request to analyze one card number.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw input; `null` or missing is treated as absent input.
    #[serde(default)]
    pub input: Option<String>,
}

/// Request to analyze several card numbers at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchAnalyzeRequest {
    /// Raw inputs, analysed in order.
    #[serde(default)]
    pub inputs: Vec<Option<String>>,
}

/// Analysis of one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Number of digits extracted.
    pub length: usize,

    /// Whether the digits passed the Luhn checksum.
    pub luhn_valid: bool,

    /// Detected network.
    pub network: CardNetwork,

    /// Upper-case network name, or `INVALID`.
    pub verdict: String,

    /// Extraction metadata (null for absent input).
    pub extraction: Option<ExtractionOutcome>,
}

impl From<Analysis> for AnalyzeResponse {
    fn from(analysis: Analysis) -> Self {
        Self {
            length: analysis.result.length,
            luhn_valid: analysis.result.luhn_valid,
            network: analysis.result.network,
            verdict: analysis.verdict().to_string(),
            extraction: analysis.extraction,
        }
    }
}

/// Analyses for a batch request, in request order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalyzeResponse {
    /// One entry per input.
    pub results: Vec<AnalyzeResponse>,
}

/// The classification table.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkListResponse {
    /// Rules in evaluation order.
    pub rules: Vec<NetworkRule>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,

    /// Service version.
    pub version: String,
}

/// Readiness check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// Overall readiness status.
    pub ready: bool,

    /// Individual component statuses.
    pub components: ReadyComponents,
}

/// Component readiness statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyComponents {
    /// Analyzer self-check status.
    pub analyzer: bool,
}
