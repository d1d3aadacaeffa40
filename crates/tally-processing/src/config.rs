//! Configuration for declarative pipeline construction.
//!
//! [`PipelineConfig`] selects a statistic and presenter by kind and carries
//! the default result label. It round-trips through serde so embedding
//! applications can load it from JSON, and validates on build.

use crate::types::{PresenterKind, StatisticKind};
use serde::{Deserialize, Serialize};

/// Label used when the caller does not supply one.
pub const DEFAULT_LABEL: &str = "Result";

/// Configuration for the record processing pipeline.
///
/// Use [`PipelineConfig::builder()`] for a fluent setup, then hand the
/// result to [`Pipeline::from_config`](crate::Pipeline::from_config).
///
/// # Example
///
/// ```rust,ignore
/// use tally_processing::{PipelineConfig, StatisticKind, PresenterKind};
///
/// let config = PipelineConfig::builder()
///     .statistic(StatisticKind::Median)
///     .presenter(PresenterKind::Log)
///     .label("Median age")
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Which statistic reduces the extracted values.
    /// Default: Mean
    pub statistic: StatisticKind,

    /// Which presenter consumes the final result, if any.
    /// Default: None
    pub presenter: PresenterKind,

    /// Default label attached to results.
    /// Default: "Result"
    pub label: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            statistic: StatisticKind::default(),
            presenter: PresenterKind::default(),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.label.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLabel);
        }
        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("label must not be empty or whitespace-only")]
    EmptyLabel,
}

/// Builder for [`PipelineConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    statistic: Option<StatisticKind>,
    presenter: Option<PresenterKind>,
    label: Option<String>,
}

impl PipelineConfigBuilder {
    /// Set the statistic kind.
    pub fn statistic(mut self, kind: StatisticKind) -> Self {
        self.statistic = Some(kind);
        self
    }

    /// Set the presenter kind.
    pub fn presenter(mut self, kind: PresenterKind) -> Self {
        self.presenter = Some(kind);
        self
    }

    /// Set the default result label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `PipelineConfig` or an error if validation fails.
    pub fn build(self) -> Result<PipelineConfig, ConfigValidationError> {
        let config = PipelineConfig {
            statistic: self.statistic.unwrap_or_default(),
            presenter: self.presenter.unwrap_or_default(),
            label: self.label.unwrap_or_else(|| DEFAULT_LABEL.to_string()),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.statistic, StatisticKind::Mean);
        assert_eq!(config.presenter, PresenterKind::None);
        assert_eq!(config.label, "Result");
    }

    #[test]
    fn test_builder_defaults() {
        let config = PipelineConfig::builder().build().unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_builder_custom_values() {
        let config = PipelineConfig::builder()
            .statistic(StatisticKind::Median)
            .presenter(PresenterKind::Print)
            .label("Median age")
            .build()
            .unwrap();

        assert_eq!(config.statistic, StatisticKind::Median);
        assert_eq!(config.presenter, PresenterKind::Print);
        assert_eq!(config.label, "Median age");
    }

    #[test]
    fn test_validation_rejects_empty_label() {
        let result = PipelineConfig::builder().label("").build();
        assert_eq!(result.unwrap_err(), ConfigValidationError::EmptyLabel);

        let result = PipelineConfig::builder().label("   ").build();
        assert_eq!(result.unwrap_err(), ConfigValidationError::EmptyLabel);
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = PipelineConfig::builder()
            .statistic(StatisticKind::Mode)
            .presenter(PresenterKind::Log)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let back: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_pipeline_config_from_json() {
        // Shape an embedding application might send
        let json = r#"{
            "statistic": "Median",
            "presenter": "Log",
            "label": "Average score"
        }"#;

        let config: PipelineConfig =
            serde_json::from_str(json).expect("Should deserialize from embedding JSON");

        assert_eq!(config.statistic, StatisticKind::Median);
        assert_eq!(config.presenter, PresenterKind::Log);
        assert_eq!(config.label, "Average score");
    }
}
