//! Pipeline module.
//!
//! This module provides the orchestrator wiring the four roles in fixed
//! sequence.

mod builder;

pub use builder::{Pipeline, PipelineBuilder};
