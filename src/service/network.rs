//! Card network classification by length and numeric prefix.
//!
//! Rules are checked in table order and each one applies its own length gate
//! before looking at prefixes. The prefix ranges are disjoint over the
//! lengths they cover, so at most one rule can match.

use serde::Serialize;

use crate::domain::CardNetwork;

/// Inclusive range over the first `digits` digits of a PAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrefixRange {
    /// Number of leading digits to read.
    pub digits: usize,
    /// Lowest matching prefix value.
    pub low: u32,
    /// Highest matching prefix value.
    pub high: u32,
}

impl PrefixRange {
    const fn exact(digits: usize, value: u32) -> Self {
        Self {
            digits,
            low: value,
            high: value,
        }
    }

    const fn span(digits: usize, low: u32, high: u32) -> Self {
        Self { digits, low, high }
    }

    /// Whether the leading digits of `pan` fall inside this range.
    #[must_use]
    pub fn matches(&self, pan: &[u8]) -> bool {
        numeric_prefix(pan, self.digits).is_some_and(|p| (self.low..=self.high).contains(&p))
    }
}

/// Length gate and prefix ranges for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkRule {
    /// Network reported when the rule matches.
    pub network: CardNetwork,
    /// PAN lengths the rule applies to.
    pub lengths: &'static [usize],
    /// Prefix ranges, any of which may match.
    pub prefixes: &'static [PrefixRange],
}

impl NetworkRule {
    /// Whether `pan` satisfies both the length gate and a prefix range.
    #[must_use]
    pub fn matches(&self, pan: &[u8]) -> bool {
        self.lengths.contains(&pan.len()) && self.prefixes.iter().any(|r| r.matches(pan))
    }
}

/// Classification table, in evaluation order.
pub static NETWORK_RULES: [NetworkRule; 4] = [
    NetworkRule {
        network: CardNetwork::Amex,
        lengths: &[15],
        prefixes: &[PrefixRange::exact(2, 34), PrefixRange::exact(2, 37)],
    },
    NetworkRule {
        network: CardNetwork::Visa,
        lengths: &[13, 16, 19],
        prefixes: &[PrefixRange::exact(1, 4)],
    },
    NetworkRule {
        network: CardNetwork::Mastercard,
        lengths: &[16],
        prefixes: &[PrefixRange::span(2, 51, 55), PrefixRange::span(4, 2221, 2720)],
    },
    NetworkRule {
        network: CardNetwork::Discover,
        lengths: &[16, 19],
        prefixes: &[
            PrefixRange::exact(4, 6011),
            PrefixRange::exact(2, 65),
            PrefixRange::span(3, 644, 649),
            PrefixRange::span(6, 622_126, 622_925),
        ],
    },
];

/// Classify a digit sequence into a card network.
///
/// The sequence length is the slice length. Returns [`CardNetwork::Unknown`]
/// when no rule matches.
#[must_use]
pub fn detect_network(pan: &[u8]) -> CardNetwork {
    NETWORK_RULES
        .iter()
        .find(|rule| rule.matches(pan))
        .map_or(CardNetwork::Unknown, |rule| rule.network)
}

/// Read the first `n` digits of `pan` as a base-10 number.
///
/// `None` if `pan` is shorter than `n` or a leading byte is not a digit.
fn numeric_prefix(pan: &[u8], n: usize) -> Option<u32> {
    pan.get(..n)?
        .iter()
        .try_fold(0u32, |acc, &byte| byte.is_ascii_digit().then(|| acc * 10 + u32::from(byte - b'0')))
}
