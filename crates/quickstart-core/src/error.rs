//! Unified error handling for the quickstart core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuickstartError {
    /// An answer was rejected (only escapes the prompt loop in tests).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl QuickstartError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation | crate::domain::ErrorCategory::Parse => {
                    ErrorCategory::Validation
                }
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the run stopped because input ended or was refused.
    pub fn is_cancellation(&self) -> bool {
        self.category() == ErrorCategory::Cancelled
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Cancelled,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type QuickstartResult<T> = Result<T, QuickstartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_closed_is_cancellation() {
        let err: QuickstartError = ApplicationError::InputClosed {
            question: "q".into(),
        }
        .into();
        assert!(err.is_cancellation());
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn domain_errors_map_to_validation() {
        let err: QuickstartError = DomainError::EmptyAnswer.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn template_not_found_category() {
        let err: QuickstartError = ApplicationError::TemplateNotFound {
            name: "x".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
