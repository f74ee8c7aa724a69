//! Unified error type for the domain layer
//!
//! Keeps request validation failures in one place so the API layer can map
//! them to client errors without matching on strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., field values outside allowed ranges)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a validation error for invariant violations.
    ///
    /// Use this when a brief or regeneration request carries values the
    /// generator cannot work with:
    /// - Values outside allowed ranges
    /// - A step index that points past the end of the quest
    /// - A missing step index for a step regeneration
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("number_of_steps must be between 3 and 8");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: number_of_steps must be between 3 and 8"
        );
    }
}
