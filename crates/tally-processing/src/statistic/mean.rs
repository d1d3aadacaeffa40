//! Arithmetic mean.

use super::{Statistic, ensure_non_empty};
use crate::error::Result;

/// Arithmetic mean: sum divided by count.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanStatistic;

impl Statistic for MeanStatistic {
    fn name(&self) -> &'static str {
        "mean"
    }

    fn compute(&self, numbers: &[i64]) -> Result<f64> {
        ensure_non_empty(numbers)?;

        // Accumulate in f64 so large magnitudes cannot overflow the sum.
        let sum: f64 = numbers.iter().map(|&n| n as f64).sum();
        Ok(sum / numbers.len() as f64)
    }
}
