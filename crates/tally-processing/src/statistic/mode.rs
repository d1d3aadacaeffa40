//! Mode.

use super::{Statistic, ensure_non_empty};
use crate::error::Result;
use std::collections::HashMap;

/// Mode: the most frequent value. Ties resolve to the smallest value so the
/// result stays deterministic regardless of input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModeStatistic;

impl Statistic for ModeStatistic {
    fn name(&self) -> &'static str {
        "mode"
    }

    fn compute(&self, numbers: &[i64]) -> Result<f64> {
        ensure_non_empty(numbers)?;

        let mut counts: HashMap<i64, usize> = HashMap::new();
        for &n in numbers {
            *counts.entry(n).or_insert(0) += 1;
        }

        // Highest count wins; on equal counts the smaller value wins.
        let value = counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(&n, _)| n)
            .unwrap_or_default();
        Ok(value as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;

    #[test]
    fn test_mode_basic() {
        assert_eq!(ModeStatistic.compute(&[1, 2, 2, 3]).unwrap(), 2.0);
    }

    #[test]
    fn test_mode_tie_takes_smallest() {
        assert_eq!(ModeStatistic.compute(&[5, 3, 5, 3]).unwrap(), 3.0);
    }

    #[test]
    fn test_mode_all_unique_takes_smallest() {
        assert_eq!(ModeStatistic.compute(&[9, 4, 7]).unwrap(), 4.0);
    }

    #[test]
    fn test_mode_single_value() {
        assert_eq!(ModeStatistic.compute(&[6]).unwrap(), 6.0);
    }

    #[test]
    fn test_mode_deterministic_across_orderings() {
        let a = ModeStatistic.compute(&[1, 2, 2, 3, 3]).unwrap();
        let b = ModeStatistic.compute(&[3, 3, 2, 2, 1]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, 2.0);
    }

    #[test]
    fn test_mode_empty_input_fails() {
        let result = ModeStatistic.compute(&[]);
        assert!(matches!(result, Err(ProcessingError::EmptyInput)));
    }
}
