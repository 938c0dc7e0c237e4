//! Error types for the OT engine
//!
//! Every failure the engine can report is local to the call that produced
//! it. A failed builder call leaves the operation untouched, and a failed
//! apply/compose/transform returns no partial output.

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, OtError>;

/// Errors raised by the builder, the algebra, and the wire conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtError {
    /// A builder call received a zero retain count, an empty text, or an empty id
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input length does not match the length an operation requires
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Text under a delete differs from the text the delete recorded
    #[error("Content mismatch at {position}: expected '{expected}', found '{found}'")]
    ContentMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    /// An external record failed validation
    #[error("Validation error: {0}")]
    Validation(String),
}

impl OtError {
    pub(crate) fn length_mismatch(expected: usize, actual: usize) -> Self {
        OtError::LengthMismatch { expected, actual }
    }
}

impl From<serde_json::Error> for OtError {
    fn from(err: serde_json::Error) -> Self {
        OtError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = OtError::length_mismatch(4, 7);
        assert_eq!(err.to_string(), "Length mismatch: expected 4, got 7");

        let err = OtError::ContentMismatch {
            position: 2,
            expected: "ab".to_string(),
            found: "xy".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Content mismatch at 2: expected 'ab', found 'xy'"
        );
    }

    #[test]
    fn test_json_error_is_validation() {
        let err: OtError = serde_json::from_str::<u64>("-1").unwrap_err().into();
        assert!(matches!(err, OtError::Validation(_)));
    }
}
