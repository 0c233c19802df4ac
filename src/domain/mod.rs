//! Domain models for card identification.
//!
//! This module contains the pipeline value types and the API contracts.

pub mod card;
pub mod dto;

pub use card::{
    ALLOWED_LENGTHS, Analysis, AnalysisResult, CardNetwork, DigitSequence, ExtractionOutcome,
    INVALID_VERDICT, MAX_DIGITS, MIN_PAN_LENGTH,
};
pub use dto::{
    AnalyzeRequest, AnalyzeResponse, ApiResponse, BatchAnalyzeRequest, BatchAnalyzeResponse,
    HealthResponse, NetworkListResponse, ReadyComponents, ReadyResponse,
};
