//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid vote code: expected 5 digits, got {0:?}")]
    InvalidCodeFormat(String),

    #[error("No validated vote code")]
    MissingCode,

    #[error("Invalid car id: {0:?}")]
    InvalidItemId(String),

    #[error("Unknown car: {0}")]
    UnknownItem(String),

    #[error("Duplicate car id: {0}")]
    DuplicateItem(String),

    #[error("A vote for car {0} is already being submitted")]
    SubmissionInFlight(String),

    #[error("Vote control for car {0} is disabled")]
    ControlDisabled(String),
}

impl DomainError {
    /// Check if this error was produced by local validation of user input
    /// (as opposed to a widget that is busy or closed)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidCodeFormat(_)
                | DomainError::MissingCode
                | DomainError::InvalidItemId(_)
                | DomainError::UnknownItem(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_display() {
        let error = DomainError::InvalidCodeFormat("1234".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid vote code: expected 5 digits, got \"1234\""
        );
    }

    #[test]
    fn test_is_input_error() {
        assert!(DomainError::MissingCode.is_input_error());
        assert!(DomainError::UnknownItem("7".to_string()).is_input_error());
        assert!(!DomainError::SubmissionInFlight("7".to_string()).is_input_error());
        assert!(!DomainError::ControlDisabled("7".to_string()).is_input_error());
    }
}
