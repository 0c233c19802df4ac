//! Luhn (mod 10) checksum.

/// Check `digits` against the Luhn checksum.
///
/// Digits are scanned from the rightmost one; every second digit is doubled
/// and reduced by 9 when the result exceeds 9. The sequence is valid when the
/// total is a multiple of 10.
///
/// Any byte that is not an ASCII digit makes the whole sequence invalid, as
/// does an empty sequence.
#[must_use]
pub fn luhn_valid(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    for (pos, &byte) in digits.iter().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return false;
        }
        sum += weighted(u32::from(byte - b'0'), pos);
    }

    sum.is_multiple_of(10)
}

/// Compute the check digit that makes `payload` followed by it Luhn-valid.
///
/// Returns `None` if `payload` contains a non-digit byte.
#[must_use]
pub fn check_digit(payload: &[u8]) -> Option<u8> {
    let mut sum = 0u32;
    // The check digit takes position 0, so payload digits start at 1.
    for (pos, &byte) in payload.iter().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return None;
        }
        sum += weighted(u32::from(byte - b'0'), pos + 1);
    }

    let digit = (10 - sum % 10) % 10;
    u8::try_from(digit).ok().map(|d| b'0' + d)
}

const fn weighted(value: u32, pos: usize) -> u32 {
    if pos % 2 == 1 {
        let doubled = value * 2;
        if doubled > 9 { doubled - 9 } else { doubled }
    } else {
        value
    }
}
