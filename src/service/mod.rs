//! Service layer module.
//!
//! The extraction, validation and classification pipeline, plus the service
//! wrapper used by the HTTP API.

pub mod analyzer;
pub mod card;
pub mod extractor;
pub mod luhn;
pub mod network;

pub use analyzer::{analyze, is_allowed_length};
pub use card::CardService;
pub use extractor::extract_digits;
pub use luhn::{check_digit, luhn_valid};
pub use network::{NETWORK_RULES, NetworkRule, PrefixRange, detect_network};
