//! Error types for the exercise tracker domain

use thiserror::Error;

/// Domain-level error taxonomy.
///
/// Not-found is never an error in this crate: lookups that can miss return
/// `Option` instead. Both variants below propagate untouched to the outer
/// boundary, which translates them into client-visible responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A guard clause rejected an input value before any state was written.
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument {
        param: &'static str,
        reason: String,
    },

    /// The value was fine but the aggregate's current state forbids the
    /// action (e.g. mutating a completed workout).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

impl DomainError {
    pub fn invalid_argument(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    pub fn invalid_operation(reason: impl Into<String>) -> Self {
        Self::InvalidOperation(reason.into())
    }
}

/// Result type alias used throughout the domain crate
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_carries_param_and_reason() {
        let err = DomainError::invalid_argument("sets", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid argument `sets`: must be greater than zero"
        );
    }

    #[test]
    fn invalid_operation_formats_reason() {
        let err = DomainError::invalid_operation("workout is already completed");
        assert_eq!(err.to_string(), "invalid operation: workout is already completed");
    }
}
