//! Command-line card identifier.
//!
//! Analyzes the arguments (joined by spaces) or, with no arguments, one line
//! from standard input, and prints the card network or `INVALID`.

use std::io;
use std::process::ExitCode;

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use cardid_worker::cli::{join_args, prompt_line};
use cardid_worker::service::analyze;

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let input = if args.is_empty() {
        match prompt_line(&mut io::stdin().lock(), &mut io::stdout().lock()) {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("No input on stdin");
                return ExitCode::FAILURE;
            }
            Err(err) => {
                error!(error = %err, "Failed to read input");
                return ExitCode::FAILURE;
            }
        }
    } else {
        join_args(&args)
    };

    let analysis = analyze(Some(input.as_str()));
    if let Some(extraction) = analysis.extraction {
        debug!(
            length = analysis.result.length,
            luhn_valid = analysis.result.luhn_valid,
            network = %analysis.result.network,
            found_non_digit = extraction.found_non_digit,
            overflowed = extraction.overflowed,
            "Input analysed"
        );
    }

    println!("{}", analysis.verdict());
    ExitCode::SUCCESS
}

/// Diagnostics go to stderr so stdout carries only the verdict.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
