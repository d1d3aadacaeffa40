//! Record Statistics Pipeline Library
//!
//! A small, composable pipeline that turns raw string records into a single
//! summary statistic. Four roles run in fixed sequence:
//!
//! - **Cleaner**: filters and normalizes raw string records
//! - **Extractor**: converts cleaned strings into integers, discarding
//!   non-numeric entries
//! - **Statistic**: reduces the numbers to a single value (mean, median, mode)
//! - **Presenter**: optional side-effecting consumer of the final
//!   `(label, value)` pair
//!
//! Each role is a trait with one implementation per variant, injected at
//! construction time. Swapping a variant never touches orchestrator code.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tally_processing::{MeanStatistic, Pipeline, PrintPresenter};
//!
//! let pipeline = Pipeline::builder()
//!     .statistic(MeanStatistic)
//!     .presenter(PrintPresenter)
//!     .build();
//!
//! // Prints "Average: 12.333333333333334" and returns the value.
//! let value = pipeline.run_with_label([" 12", "abc", " 5", " 20 "], "Average")?;
//! ```
//!
//! # Configuration
//!
//! Declarative construction is available through [`PipelineConfig`], which
//! round-trips through serde:
//!
//! ```rust,ignore
//! use tally_processing::{Pipeline, PipelineConfig, PresenterKind, StatisticKind};
//!
//! let config = PipelineConfig::builder()
//!     .statistic(StatisticKind::Median)
//!     .presenter(PresenterKind::Log)
//!     .label("Median score")
//!     .build()?;
//!
//! let value = Pipeline::from_config(&config)?.run(["1", "2", "3", "4"])?;
//! assert_eq!(value, 2.5);
//! ```
//!
//! # Failure semantics
//!
//! Cleaning and extraction are total: malformed records are dropped, never
//! errors. The only core failure mode is reducing an empty sequence, which
//! surfaces as [`ProcessingError::EmptyInput`] and propagates to the caller
//! unrecovered — no retry, no sentinel value.

pub mod cleaner;
pub mod config;
pub mod error;
pub mod extractor;
pub mod pipeline;
pub mod presenter;
pub mod statistic;
pub mod types;

// Re-exports for convenient access
pub use cleaner::{Cleaner, WhitespaceCleaner};
pub use config::{ConfigValidationError, DEFAULT_LABEL, PipelineConfig, PipelineConfigBuilder};
pub use error::{ProcessingError, Result as ProcessingResult};
pub use extractor::{DigitExtractor, Extractor};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use presenter::{LogPresenter, Presenter, PrintPresenter};
pub use statistic::{MeanStatistic, MedianStatistic, ModeStatistic, Statistic};
pub use types::{PresenterKind, RunReport, StatisticKind};
