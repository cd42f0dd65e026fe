//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid sentiment category: {0}")]
    InvalidCategory(String),
}

impl DomainError {
    /// Check if this error was caused by the caller's input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_category_display() {
        let error = DomainError::InvalidCategory("ecstatic".to_string());
        assert_eq!(error.to_string(), "Invalid sentiment category: ecstatic");
    }

    #[test]
    fn test_is_invalid_input_check() {
        assert!(DomainError::InvalidInput("empty".to_string()).is_invalid_input());
        assert!(!DomainError::InvalidCategory("x".to_string()).is_invalid_input());
    }
}
