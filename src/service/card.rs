//! Card analysis service.
//!
//! Wraps the analyzer for the HTTP layer: enforces request limits, emits
//! metrics and logs the outcome. Raw input and digits are never logged.

use metrics::counter;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::domain::{Analysis, CardNetwork};
use crate::error::{AppError, Result};
use crate::service::analyzer::analyze;

/// Known-good PAN used by the readiness self-check.
const SELF_CHECK_PAN: &str = "4111 1111 1111 1111";

/// Service for card number analysis.
pub struct CardService {
    /// Longest accepted input, in bytes.
    max_input_bytes: usize,
    /// Most inputs accepted per batch.
    max_batch_size: usize,
}

impl CardService {
    /// Create a new card service.
    #[must_use]
    pub const fn new(config: &AnalysisConfig) -> Self {
        Self {
            max_input_bytes: config.max_input_bytes,
            max_batch_size: config.max_batch_size,
        }
    }

    /// Analyze one input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidParam`] if the input exceeds the configured size limit.
    pub fn analyze(&self, input: Option<&str>) -> Result<Analysis> {
        self.check_input(input)?;

        let analysis = analyze(input);
        record(&analysis);
        Ok(analysis)
    }

    /// Analyze several inputs, preserving order.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch is empty, larger than the configured
    /// limit, or any input exceeds the size limit. Nothing is analysed in
    /// that case.
    pub fn analyze_batch(&self, inputs: &[Option<String>]) -> Result<Vec<Analysis>> {
        if inputs.is_empty() {
            return Err(AppError::BadRequest("inputs cannot be empty".to_string()));
        }
        if inputs.len() > self.max_batch_size {
            return Err(AppError::PayloadTooLarge(format!(
                "batch of {} inputs exceeds limit of {}",
                inputs.len(),
                self.max_batch_size
            )));
        }
        for input in inputs {
            self.check_input(input.as_deref())?;
        }

        let analyses: Vec<Analysis> = inputs
            .iter()
            .map(|input| {
                let analysis = analyze(input.as_deref());
                record(&analysis);
                analysis
            })
            .collect();

        debug!(count = analyses.len(), "Batch analysed");
        Ok(analyses)
    }

    /// Run the analyzer on a known Visa test number.
    #[must_use]
    pub fn self_check(&self) -> bool {
        let analysis = analyze(Some(SELF_CHECK_PAN));
        analysis.is_recognised() && analysis.result.network == CardNetwork::Visa
    }

    fn check_input(&self, input: Option<&str>) -> Result<()> {
        match input {
            Some(text) if text.len() > self.max_input_bytes => Err(AppError::InvalidParam(
                format!(
                    "input of {} bytes exceeds limit of {}",
                    text.len(),
                    self.max_input_bytes
                ),
            )),
            _ => Ok(()),
        }
    }
}

/// Log and count one analysis.
fn record(analysis: &Analysis) {
    let result = &analysis.result;
    let extraction = analysis.extraction.unwrap_or_default();

    debug!(
        length = result.length,
        luhn_valid = result.luhn_valid,
        network = %result.network,
        found_non_digit = extraction.found_non_digit,
        overflowed = extraction.overflowed,
        "Card analysed"
    );

    counter!(
        "cardid_analyses_total",
        "network" => result.network.label(),
        "valid" => if result.luhn_valid { "true" } else { "false" }
    )
    .increment(1);

    if extraction.overflowed {
        counter!("cardid_extraction_overflows_total").increment(1);
    }
}
