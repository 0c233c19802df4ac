//! End-to-end card number analysis.
//!
//! Extraction, length gating, Luhn validation and classification, in that
//! order. Every failure is reported through the returned [`Analysis`].

use crate::domain::{ALLOWED_LENGTHS, Analysis, AnalysisResult, MAX_DIGITS, MIN_PAN_LENGTH};
use crate::service::extractor::extract_digits;
use crate::service::luhn::luhn_valid;
use crate::service::network::detect_network;

/// Analyze raw card number input.
///
/// - Absent input: length 0, invalid, no extraction metadata.
/// - No digits, or more than [`MAX_DIGITS`]: invalid, classification skipped.
/// - Length outside the allowed set: invalid without running Luhn.
/// - Luhn failure: invalid, network `Unknown`.
///
/// Stray non-digit characters are reported in the extraction metadata but do
/// not by themselves make the input invalid.
#[must_use]
pub fn analyze(input: Option<&str>) -> Analysis {
    let Some(input) = input else {
        return Analysis::default();
    };

    let mut buffer = [0u8; MAX_DIGITS + 1];
    let extraction = extract_digits(Some(input), &mut buffer);
    let digits = &buffer[..extraction.digit_count];

    // Each check short-circuits the ones after it; Luhn never sees a gated length.
    let rejected = extraction.digit_count == 0
        || extraction.overflowed
        || !is_allowed_length(digits.len())
        || !luhn_valid(digits);

    let result = if rejected {
        AnalysisResult::invalid(digits.len())
    } else {
        AnalysisResult::valid(digits.len(), detect_network(digits))
    };

    buffer.fill(0);

    Analysis {
        result,
        extraction: Some(extraction),
    }
}

/// Whether `len` is a PAN length worth validating.
#[must_use]
pub fn is_allowed_length(len: usize) -> bool {
    (MIN_PAN_LENGTH..=MAX_DIGITS).contains(&len) && ALLOWED_LENGTHS.contains(&len)
}
