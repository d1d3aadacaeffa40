//! Shared types for pipeline construction and run metadata.

use serde::{Deserialize, Serialize};

/// Statistic variant selected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StatisticKind {
    /// Arithmetic mean of the extracted values
    #[default]
    Mean,
    /// Middle value after ascending sort (average of the two central values
    /// for even-length input)
    Median,
    /// Most frequent value, ties resolved to the smallest
    Mode,
}

impl StatisticKind {
    /// Short name used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Mode => "mode",
        }
    }
}

/// Presenter variant selected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PresenterKind {
    /// Write `"{label}: {value}"` to stdout
    Print,
    /// Emit a structured log event
    Log,
    /// Skip presentation entirely
    #[default]
    None,
}

impl PresenterKind {
    /// Short name used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Log => "log",
            Self::None => "none",
        }
    }
}

/// Metadata describing a single pipeline run.
///
/// The summary value itself is deterministic for a given input and statistic;
/// the surrounding fields (duration, timestamp) describe the run, not the
/// result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Label attached to the result
    pub label: String,
    /// Name of the statistic that produced the value
    pub statistic: String,
    /// The computed summary value
    pub value: f64,
    /// Number of raw records handed to the pipeline
    pub records_in: usize,
    /// Number of records surviving the cleaner
    pub records_cleaned: usize,
    /// Number of numeric values the extractor produced
    pub values_extracted: usize,
    /// Total execution time in milliseconds
    pub duration_ms: u64,
    /// Timestamp when the run finished
    pub generated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistic_kind_default_is_mean() {
        assert_eq!(StatisticKind::default(), StatisticKind::Mean);
    }

    #[test]
    fn test_presenter_kind_default_is_none() {
        assert_eq!(PresenterKind::default(), PresenterKind::None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(StatisticKind::Mean.as_str(), "mean");
        assert_eq!(StatisticKind::Median.as_str(), "median");
        assert_eq!(StatisticKind::Mode.as_str(), "mode");
        assert_eq!(PresenterKind::Print.as_str(), "print");
        assert_eq!(PresenterKind::Log.as_str(), "log");
        assert_eq!(PresenterKind::None.as_str(), "none");
    }

    #[test]
    fn test_statistic_kind_serde_round_trip() {
        let json = serde_json::to_string(&StatisticKind::Median).unwrap();
        let back: StatisticKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StatisticKind::Median);
    }

    #[test]
    fn test_run_report_serialization() {
        let report = RunReport {
            label: "Average".to_string(),
            statistic: "mean".to_string(),
            value: 12.5,
            records_in: 5,
            records_cleaned: 4,
            values_extracted: 3,
            duration_ms: 1,
            generated_at: "2026-01-01 00:00:00".to_string(),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"label\":\"Average\""));
        assert!(json.contains("\"values_extracted\":3"));

        let back: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.records_in, 5);
        assert_eq!(back.value, 12.5);
    }
}
