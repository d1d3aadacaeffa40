//! The pipeline orchestrator and its builder.
//!
//! Control flow is strictly linear: raw input → clean → extract → compute →
//! optional present → returned value. The orchestrator knows the roles only
//! through their traits, so swapping a variant never changes this file.

use crate::cleaner::{Cleaner, WhitespaceCleaner};
use crate::config::{ConfigValidationError, DEFAULT_LABEL, PipelineConfig};
use crate::error::Result;
use crate::extractor::{DigitExtractor, Extractor};
use crate::presenter::{LogPresenter, Presenter, PrintPresenter};
use crate::statistic::{MeanStatistic, MedianStatistic, ModeStatistic, Statistic};
use crate::types::{PresenterKind, RunReport, StatisticKind};
use chrono::Local;
use std::time::Instant;
use tracing::{error, info};

/// The record processing pipeline.
///
/// Use [`Pipeline::builder()`] to inject role implementations, or
/// [`Pipeline::from_config()`] to construct one declaratively.
///
/// # Example
///
/// ```rust,ignore
/// use tally_processing::{MedianStatistic, Pipeline};
///
/// let pipeline = Pipeline::builder()
///     .statistic(MedianStatistic)
///     .build();
///
/// let value = pipeline.run(["1", "2", "3", "4"])?;
/// assert_eq!(value, 2.5);
/// ```
pub struct Pipeline {
    cleaner: Box<dyn Cleaner>,
    extractor: Box<dyn Extractor>,
    statistic: Box<dyn Statistic>,
    presenter: Option<Box<dyn Presenter>>,
    default_label: String,
}

// A pipeline holds only stateless role objects, so it can be shared across
// threads of a host application.
static_assertions::assert_impl_all!(Pipeline: Send, Sync);

impl Pipeline {
    /// Create a new pipeline builder.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Construct a pipeline from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config(
        config: &PipelineConfig,
    ) -> std::result::Result<Self, ConfigValidationError> {
        config.validate()?;

        let builder = Pipeline::builder().default_label(config.label.clone());
        let builder = match config.statistic {
            StatisticKind::Mean => builder.statistic(MeanStatistic),
            StatisticKind::Median => builder.statistic(MedianStatistic),
            StatisticKind::Mode => builder.statistic(ModeStatistic),
        };
        let builder = match config.presenter {
            PresenterKind::Print => builder.presenter(PrintPresenter),
            PresenterKind::Log => builder.presenter(LogPresenter),
            PresenterKind::None => builder,
        };
        Ok(builder.build())
    }

    /// Run the pipeline with the default label and return the summary value.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::EmptyInput`](crate::ProcessingError::EmptyInput)
    /// when no numeric values survive extraction. The error propagates
    /// unrecovered; there is no retry and no substitute value.
    pub fn run<I, S>(&self, raw: I) -> Result<f64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw = collect_records(raw);
        self.execute(raw, &self.default_label).map(|r| r.value)
    }

    /// Run the pipeline with an explicit label and return the summary value.
    ///
    /// # Errors
    ///
    /// Same failure semantics as [`run`](Self::run).
    pub fn run_with_label<I, S>(&self, raw: I, label: &str) -> Result<f64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw = collect_records(raw);
        self.execute(raw, label).map(|r| r.value)
    }

    /// Run the pipeline and return per-stage metadata alongside the value.
    ///
    /// # Errors
    ///
    /// Same failure semantics as [`run`](Self::run).
    pub fn run_report<I, S>(&self, raw: I) -> Result<RunReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw = collect_records(raw);
        self.execute(raw, &self.default_label)
    }

    fn execute(&self, raw: Vec<String>, label: &str) -> Result<RunReport> {
        match self.execute_inner(raw, label) {
            Ok(report) => Ok(report),
            Err(e) => {
                error!(label, error = %e, "pipeline run failed");
                Err(e)
            }
        }
    }

    fn execute_inner(&self, raw: Vec<String>, label: &str) -> Result<RunReport> {
        let start = Instant::now();
        info!(label, records = raw.len(), "starting pipeline run");

        let cleaned = self.cleaner.clean(&raw);
        let numbers = self.extractor.extract(&cleaned);
        let value = self.statistic.compute(&numbers)?;

        if let Some(presenter) = &self.presenter {
            presenter.present(label, value);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            label,
            statistic = self.statistic.name(),
            value,
            duration_ms,
            "pipeline run complete"
        );

        Ok(RunReport {
            label: label.to_string(),
            statistic: self.statistic.name().to_string(),
            value,
            records_in: raw.len(),
            records_cleaned: cleaned.len(),
            values_extracted: numbers.len(),
            duration_ms,
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }
}

fn collect_records<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter().map(|s| s.as_ref().to_string()).collect()
}

/// Builder for [`Pipeline`] with fluent API.
///
/// Every role has a default: [`WhitespaceCleaner`], [`DigitExtractor`],
/// [`MeanStatistic`], and no presenter.
#[derive(Default)]
pub struct PipelineBuilder {
    cleaner: Option<Box<dyn Cleaner>>,
    extractor: Option<Box<dyn Extractor>>,
    statistic: Option<Box<dyn Statistic>>,
    presenter: Option<Box<dyn Presenter>>,
    default_label: Option<String>,
}

impl PipelineBuilder {
    /// Set the cleaner implementation.
    pub fn cleaner(mut self, cleaner: impl Cleaner + 'static) -> Self {
        self.cleaner = Some(Box::new(cleaner));
        self
    }

    /// Set the extractor implementation.
    pub fn extractor(mut self, extractor: impl Extractor + 'static) -> Self {
        self.extractor = Some(Box::new(extractor));
        self
    }

    /// Set the statistic implementation.
    pub fn statistic(mut self, statistic: impl Statistic + 'static) -> Self {
        self.statistic = Some(Box::new(statistic));
        self
    }

    /// Set the presenter implementation.
    ///
    /// Without this call the pipeline skips the presentation stage.
    pub fn presenter(mut self, presenter: impl Presenter + 'static) -> Self {
        self.presenter = Some(Box::new(presenter));
        self
    }

    /// Set the label used by [`Pipeline::run`] and [`Pipeline::run_report`].
    pub fn default_label(mut self, label: impl Into<String>) -> Self {
        self.default_label = Some(label.into());
        self
    }

    /// Build the pipeline, filling unset roles with their defaults.
    pub fn build(self) -> Pipeline {
        Pipeline {
            cleaner: self.cleaner.unwrap_or_else(|| Box::new(WhitespaceCleaner)),
            extractor: self.extractor.unwrap_or_else(|| Box::new(DigitExtractor)),
            statistic: self.statistic.unwrap_or_else(|| Box::new(MeanStatistic)),
            presenter: self.presenter,
            default_label: self
                .default_label
                .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
        }
    }
}
