//! Digit extraction from free-form card number input.
//!
//! Digits are copied into a caller-supplied buffer, spaces and dashes are
//! skipped, and anything else is flagged but tolerated.

use crate::domain::ExtractionOutcome;

/// Extract the digits of `input` into `out`.
///
/// The capacity is `out.len()`; one slot is reserved for a `0` terminator,
/// so at most `out.len() - 1` digits are written. The buffer is zeroed
/// before anything is written.
///
/// Extraction stops as soon as the buffer is full, before looking at the
/// next character, and reports `overflowed` even if the rest of the input
/// is only separators.
///
/// An absent input or an empty buffer yields [`ExtractionOutcome::rejected`]
/// and leaves `out` untouched.
pub fn extract_digits(input: Option<&str>, out: &mut [u8]) -> ExtractionOutcome {
    let Some(input) = input else {
        return ExtractionOutcome::rejected();
    };
    if out.is_empty() {
        return ExtractionOutcome::rejected();
    }

    out.fill(0);

    let limit = out.len() - 1;
    let mut idx = 0;
    let mut found_non_digit = false;
    let mut overflowed = false;

    for byte in input.bytes() {
        if idx >= limit {
            overflowed = true;
            break;
        }

        if byte.is_ascii_digit() {
            out[idx] = byte;
            idx += 1;
        } else if !is_separator(byte) {
            found_non_digit = true;
        }
    }
    out[idx] = 0;

    ExtractionOutcome {
        digit_count: idx,
        found_non_digit,
        overflowed,
    }
}

/// ASCII whitespace (including vertical tab) and `-`.
const fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r' | b'-')
}
