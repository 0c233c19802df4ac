//! Card number types shared by the analysis pipeline.
//!
//! Every value here is created per call and dropped when the call returns.

use serde::{Deserialize, Serialize};

use crate::service::extractor::extract_digits;

/// Maximum number of PAN digits supported (ISO/IEC 7812 allows up to 19).
pub const MAX_DIGITS: usize = 19;

/// Shortest PAN length the analyzer will consider.
pub const MIN_PAN_LENGTH: usize = 13;

/// PAN lengths that are passed on to Luhn validation and classification.
pub const ALLOWED_LENGTHS: [usize; 4] = [13, 15, 16, 19];

/// Token printed for anything that is not a recognised, checksum-valid card.
pub const INVALID_VERDICT: &str = "INVALID";

/// Card network a PAN belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardNetwork {
    /// No rule matched, or the number failed validation.
    #[default]
    Unknown,
    /// Visa.
    Visa,
    /// Mastercard.
    Mastercard,
    /// American Express.
    Amex,
    /// Discover.
    Discover,
}

impl CardNetwork {
    /// All networks, `Unknown` first.
    pub const ALL: [Self; 5] = [
        Self::Unknown,
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Discover,
    ];

    /// Upper-case name as printed by the command-line tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Visa => "VISA",
            Self::Mastercard => "MASTERCARD",
            Self::Amex => "AMEX",
            Self::Discover => "DISCOVER",
        }
    }

    /// Human-readable network name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
        }
    }

    /// Lower-case label used in metrics and JSON.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
        }
    }

    /// Whether this is one of the recognised networks.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata describing one extraction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    /// Number of digits written to the output buffer.
    pub digit_count: usize,

    /// At least one character that is neither a digit nor a separator was seen.
    pub found_non_digit: bool,

    /// The buffer filled up before the input was fully consumed.
    pub overflowed: bool,
}

impl ExtractionOutcome {
    /// Outcome reported when extraction cannot run at all
    /// (absent input or a zero-capacity buffer).
    #[must_use]
    pub const fn rejected() -> Self {
        Self {
            digit_count: 0,
            found_non_digit: true,
            overflowed: true,
        }
    }
}

/// Externally visible result of analysing one input string.
///
/// `network` is always [`CardNetwork::Unknown`] when `luhn_valid` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of digits extracted from the input.
    pub length: usize,

    /// Whether the digits passed the Luhn checksum.
    pub luhn_valid: bool,

    /// Detected card network.
    pub network: CardNetwork,
}

impl AnalysisResult {
    /// A failed result for a sequence of `length` digits.
    #[must_use]
    pub const fn invalid(length: usize) -> Self {
        Self {
            length,
            luhn_valid: false,
            network: CardNetwork::Unknown,
        }
    }

    /// A checksum-valid result classified as `network`.
    #[must_use]
    pub const fn valid(length: usize, network: CardNetwork) -> Self {
        Self {
            length,
            luhn_valid: true,
            network,
        }
    }
}

/// Full analysis output: the result plus extraction metadata.
///
/// `extraction` is `None` only when no input was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Analysis {
    /// Pipeline result.
    pub result: AnalysisResult,

    /// Extraction metadata, if extraction ran.
    pub extraction: Option<ExtractionOutcome>,
}

impl Analysis {
    /// Whether the input is a recognised card with a valid checksum.
    #[must_use]
    pub fn is_recognised(&self) -> bool {
        let overflowed = self.extraction.is_some_and(|e| e.overflowed);
        !overflowed
            && self.result.length > 0
            && self.result.luhn_valid
            && self.result.network.is_known()
    }

    /// Single-token verdict: the upper-case network name or `INVALID`.
    #[must_use]
    pub fn verdict(&self) -> &'static str {
        if self.is_recognised() {
            self.result.network.as_str()
        } else {
            INVALID_VERDICT
        }
    }
}

/// Owned, bounded sequence of ASCII digits.
///
/// Storage is zeroed on drop. `Debug` shows only the length.
#[derive(Clone, PartialEq, Eq)]
pub struct DigitSequence {
    digits: [u8; MAX_DIGITS],
    len: usize,
}

impl DigitSequence {
    /// Extract up to [`MAX_DIGITS`] digits from raw input.
    #[must_use]
    pub fn extract(input: Option<&str>) -> (Self, ExtractionOutcome) {
        let mut buffer = [0u8; MAX_DIGITS + 1];
        let outcome = extract_digits(input, &mut buffer);

        let mut digits = [0u8; MAX_DIGITS];
        digits[..outcome.digit_count].copy_from_slice(&buffer[..outcome.digit_count]);
        buffer.fill(0);

        (
            Self {
                digits,
                len: outcome.digit_count,
            },
            outcome,
        )
    }

    /// The digits as bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    /// The digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever written.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Number of digits.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no digits were extracted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for DigitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigitSequence")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl Drop for DigitSequence {
    fn drop(&mut self) {
        self.digits.fill(0);
    }
}
