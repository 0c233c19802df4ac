//! Error handling module.
//!
//! The analysis pipeline itself never fails. These errors reject requests at
//! the service boundary and render as the standard API error envelope.

pub mod codes;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub use codes::ErrorCode;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// A request parameter is present but out of bounds.
    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    /// Request carries more work than the service accepts at once.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::BadRequest(_) => ErrorCode::BAD_REQUEST,
            Self::InvalidParam(_) => ErrorCode::INVALID_PARAM,
            Self::PayloadTooLarge(_) => ErrorCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidParam(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().as_i32();
        let message = self.to_string();

        tracing::warn!(error_code = code, status = %status, message = %message, "Request rejected");

        let body = Json(json!({
            "code": code,
            "message": message,
            "data": null
        }));

        (status, body).into_response()
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
