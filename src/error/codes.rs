//! Numeric error codes carried in the `code` field of the response envelope.
//!
//! 3xxx codes reject a request; 5xxx codes report the worker itself as unfit.

/// Envelope error code. `0` is reserved for success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Malformed request, or a batch with nothing in it.
    pub const BAD_REQUEST: Self = Self(3001);

    /// Input longer than `analysis.max_input_bytes`.
    pub const INVALID_PARAM: Self = Self(3003);

    /// Batch larger than `analysis.max_batch_size`.
    pub const PAYLOAD_TOO_LARGE: Self = Self(3004);

    /// Readiness self-check failed.
    pub const SERVICE_UNAVAILABLE: Self = Self(5003);

    /// Raw numeric value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}
