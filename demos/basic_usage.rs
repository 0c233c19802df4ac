//! Walkthrough of the card identification pipeline.
//!
//! Run with `cargo run --example basic_usage`.

use cardid_worker::domain::{CardNetwork, DigitSequence, MAX_DIGITS};
use cardid_worker::service::{
    NETWORK_RULES, analyze, check_digit, detect_network, extract_digits, luhn_valid,
};

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn basic_validation() {
    println!("=== Basic Card Validation ===");

    for card in [
        "4111111111111111",
        "5555555555554444",
        "378282246310005",
        "6011111111111117",
        "1234567890123456",
    ] {
        let result = analyze(Some(card)).result;
        println!("Card: {card}");
        println!("  Valid: {}", yes_no(result.luhn_valid));
        println!("  Network: {}", result.network.display_name());
        println!("  Length: {}", result.length);
        println!();
    }
}

fn with_separators() {
    println!("=== Cards with Separators ===");

    for card in [
        "4111-1111-1111-1111",
        "5555 5555 5555 4444",
        "3782-822463-10005",
        "6011-1111-1111-1117",
    ] {
        let analysis = analyze(Some(card));
        let extraction = analysis.extraction.unwrap_or_default();
        println!("Input: {card}");
        println!("  Extracted digits: {}", extraction.digit_count);
        println!("  Non-digit chars: {}", yes_no(extraction.found_non_digit));
        println!("  Valid: {}", yes_no(analysis.result.luhn_valid));
        println!("  Network: {}", analysis.result.network.display_name());
        println!();
    }
}

fn manual_extraction() {
    println!("=== Manual Digit Extraction ===");

    let input = "4111-1111-1111-1111";
    let mut buffer = [0u8; 32];
    let outcome = extract_digits(Some(input), &mut buffer);
    let digits = String::from_utf8_lossy(&buffer[..outcome.digit_count]);

    println!("Input: {input}");
    println!("Extracted: {digits}");
    println!("Digit count: {}", outcome.digit_count);
    println!("Overflowed: {}", yes_no(outcome.overflowed));
    println!("Found non-digits: {}", yes_no(outcome.found_non_digit));

    let (sequence, _) = DigitSequence::extract(Some("3782 822463 10005"));
    println!("Owned sequence: {} ({} digits)", sequence.as_str(), sequence.len());
    println!();
}

fn network_detection() {
    println!("=== Network Detection ===");

    for card in [
        "4111111111111111",
        "5555555555554444",
        "378282246310005",
        "6011111111111117",
        "1234567890123456",
    ] {
        let network = detect_network(card.as_bytes());
        println!("Card: {card}");
        println!("Network: {}", network.display_name());
        println!();
    }

    println!("Rules (evaluation order):");
    for rule in &NETWORK_RULES {
        let prefixes: Vec<String> = rule
            .prefixes
            .iter()
            .map(|p| {
                if p.low == p.high {
                    p.low.to_string()
                } else {
                    format!("{}-{}", p.low, p.high)
                }
            })
            .collect();
        println!(
            "  {:<16} lengths {:?} prefixes {}",
            rule.network.display_name(),
            rule.lengths,
            prefixes.join(", ")
        );
    }
    println!();
}

fn luhn_validation() {
    println!("=== Luhn Validation ===");

    for card in [
        "4111111111111111",
        "4111111111111112",
        "5555555555554444",
        "5555555555554445",
    ] {
        println!("Card: {card}");
        println!("Luhn valid: {}", yes_no(luhn_valid(card.as_bytes())));
        println!();
    }

    let payload = "650000000000000";
    if let Some(digit) = check_digit(payload.as_bytes()) {
        println!("Check digit for {payload}: {}", char::from(digit));
    }
    println!();
}

fn error_handling() {
    println!("=== Error Handling ===");

    let long_input = "1".repeat(99);
    let cases = [
        ("Absent input", None),
        ("Empty input", Some("")),
        ("Too short", Some("1234")),
        ("Too long", Some(long_input.as_str())),
    ];

    for (label, input) in cases {
        let result = analyze(input).result;
        println!(
            "{label} - Valid: {}, Network: {}",
            yes_no(result.luhn_valid),
            result.network.display_name()
        );
    }

    println!(
        "Longest supported PAN: {MAX_DIGITS} digits; networks: {}",
        CardNetwork::ALL
            .iter()
            .filter(|n| n.is_known())
            .map(|n| n.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();
}

fn main() {
    println!("CardID Library Examples");
    println!("=======================\n");

    basic_validation();
    with_separators();
    manual_extraction();
    network_detection();
    luhn_validation();
    error_handling();

    println!("All examples completed!");
}
