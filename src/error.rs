//! Engine error type.

use std::fmt;

use crate::validation::ValidationError;

/// Errors returned by the simulation engine.
///
/// A run either succeeds with a complete timeline and metrics set or fails
/// with one of these; there is no partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulingError {
    /// The process list failed validation (empty, bad burst, duplicate names).
    InvalidInput(Vec<ValidationError>),
    /// A parameter the selected algorithm needs is missing or out of range.
    InvalidParameters(String),
    /// The algorithm identifier is not recognized.
    UnknownAlgorithm(String),
    /// No interval in the timeline carries this process's name.
    ProcessNotFound(String),
}

impl fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{}", e.message)?;
                }
                Ok(())
            }
            Self::InvalidParameters(msg) => write!(f, "invalid parameters: {msg}"),
            Self::UnknownAlgorithm(id) => write!(f, "unknown algorithm '{id}'"),
            Self::ProcessNotFound(name) => {
                write!(f, "process '{name}' has no interval in the timeline")
            }
        }
    }
}

impl std::error::Error for SchedulingError {}

impl From<Vec<ValidationError>> for SchedulingError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_invalid_input() {
        let err = SchedulingError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::EmptyName, "first"),
            ValidationError::new(ValidationErrorKind::DuplicateName, "second"),
        ]);
        assert_eq!(err.to_string(), "invalid input: first; second");
    }

    #[test]
    fn test_display_other_variants() {
        assert_eq!(
            SchedulingError::UnknownAlgorithm("LOTTERY".into()).to_string(),
            "unknown algorithm 'LOTTERY'"
        );
        assert_eq!(
            SchedulingError::InvalidParameters("quantum is required".into()).to_string(),
            "invalid parameters: quantum is required"
        );
        assert!(SchedulingError::ProcessNotFound("P3".into())
            .to_string()
            .contains("P3"));
    }
}
