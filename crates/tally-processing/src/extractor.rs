//! Numeric extraction, the second pipeline stage.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Invalid regex: digits"));

/// Converts cleaned string records into integer values.
///
/// Extraction is a total function: records that do not represent a number
/// are silently omitted, never an error. Implementations must be stateless
/// (`Send + Sync`).
pub trait Extractor: Send + Sync {
    /// Extract integer values from the records, preserving relative order.
    fn extract(&self, records: &[String]) -> Vec<i64>;
}

static_assertions::assert_obj_safe!(Extractor);

/// Keeps records made up entirely of ASCII decimal digits and parses each
/// to its integer value.
///
/// Signs, decimal points, letters, and non-ASCII digit characters disqualify
/// a record. Digit runs too large for `i64` are dropped with the rest.
#[derive(Debug, Default, Clone, Copy)]
pub struct DigitExtractor;

impl Extractor for DigitExtractor {
    fn extract(&self, records: &[String]) -> Vec<i64> {
        let values: Vec<i64> = records
            .iter()
            .filter(|r| DIGITS.is_match(r))
            .filter_map(|r| r.parse::<i64>().ok())
            .collect();

        debug!(
            kept = values.len(),
            dropped = records.len() - values.len(),
            "extraction complete"
        );
        values
    }
}
