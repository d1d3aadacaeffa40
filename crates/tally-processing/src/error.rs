//! Error types for the record processing pipeline.
//!
//! The pipeline has a deliberately small failure surface: statistics reject
//! empty input, and construction rejects invalid configuration. Nothing else
//! in the core can fail. Errors serialize as `{code, message}` so embedding
//! applications can hand them to a frontend or log sink unchanged.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for pipeline operations.
#[derive(Error, Debug)]
pub enum ProcessingError {
    /// The statistic was asked to reduce an empty sequence.
    #[error("no numbers to compute statistic")]
    EmptyInput,

    /// Invalid configuration provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ProcessingError {
    /// Stable error code for embedding applications.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }

    /// Check if this error represents an empty-input rejection.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for ProcessingError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ProcessingError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, ProcessingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(ProcessingError::EmptyInput.error_code(), "EMPTY_INPUT");
        assert_eq!(
            ProcessingError::InvalidConfig("bad label".to_string()).error_code(),
            "INVALID_CONFIG"
        );
    }

    #[test]
    fn test_is_empty_input() {
        assert!(ProcessingError::EmptyInput.is_empty_input());
        assert!(!ProcessingError::InvalidConfig("x".to_string()).is_empty_input());
    }

    #[test]
    fn test_display_message() {
        assert_eq!(
            ProcessingError::EmptyInput.to_string(),
            "no numbers to compute statistic"
        );
    }

    #[test]
    fn test_error_serialization() {
        let error = ProcessingError::EmptyInput;
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("EMPTY_INPUT"));
        assert!(json.contains("no numbers to compute statistic"));
    }
}
