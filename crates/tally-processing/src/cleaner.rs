//! Record cleaning, the first pipeline stage.

use tracing::debug;

/// Filters and normalizes raw string records.
///
/// Cleaning is a total function: any input sequence is accepted and the
/// operation itself cannot fail. Implementations must be stateless
/// (`Send + Sync`) so a pipeline can be reused across threads.
pub trait Cleaner: Send + Sync {
    /// Clean a sequence of raw records, preserving relative order.
    ///
    /// Every returned record is non-empty and carries no surrounding
    /// whitespace.
    fn clean(&self, records: &[String]) -> Vec<String>;
}

static_assertions::assert_obj_safe!(Cleaner);

/// Trims surrounding whitespace and drops records that are empty after
/// trimming.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceCleaner;

impl Cleaner for WhitespaceCleaner {
    fn clean(&self, records: &[String]) -> Vec<String> {
        let cleaned: Vec<String> = records
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect();

        debug!(
            records_in = records.len(),
            records_out = cleaned.len(),
            "cleaning complete"
        );
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn records(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_clean_trims_and_drops_empties() {
        let cleaner = WhitespaceCleaner;
        let out = cleaner.clean(&records(&[" 12", "", "abc", " 5", " 20 "]));
        assert_eq!(out, vec!["12", "abc", "5", "20"]);
    }

    #[test]
    fn test_clean_preserves_order() {
        let cleaner = WhitespaceCleaner;
        let out = cleaner.clean(&records(&["b", " a ", "c"]));
        assert_eq!(out, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_clean_drops_whitespace_only_records() {
        let cleaner = WhitespaceCleaner;
        let out = cleaner.clean(&records(&[" ", "\t", "  \n "]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_clean_empty_input() {
        let cleaner = WhitespaceCleaner;
        assert!(cleaner.clean(&[]).is_empty());
    }

    #[test]
    fn test_clean_keeps_interior_whitespace() {
        let cleaner = WhitespaceCleaner;
        let out = cleaner.clean(&records(&["  1 2  "]));
        assert_eq!(out, vec!["1 2"]);
    }
}
