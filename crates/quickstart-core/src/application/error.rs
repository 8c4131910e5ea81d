//! Application layer errors.
//!
//! These errors represent failures in orchestration, not rejected
//! answers. Rejected answers are `DomainError` from `crate::domain` and
//! never leave the prompt loop.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::AnswerKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The input source ran dry before a question was answered.
    #[error("Input closed while waiting for: {question}")]
    InputClosed { question: String },

    /// The configured retry cap was reached.
    #[error("Gave up after {attempts} invalid answers to: {question}")]
    TooManyAttempts { question: String, attempts: u32 },

    /// A prompt was called with a default of the wrong kind.
    #[error("Invalid argument: {kind} prompt given a {default_kind} default")]
    InvalidArgument {
        kind: AnswerKind,
        default_kind: AnswerKind,
    },

    /// Reading from the terminal failed.
    #[error("Input error: {reason}")]
    InputFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The requested template does not exist.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Template rendering failed.
    #[error("Template rendering failed for {name}: {reason}")]
    RenderingFailed { name: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InputClosed { .. } => vec![
                "The input ended before every question was answered".into(),
                "When piping answers, provide one line per question".into(),
            ],
            Self::TooManyAttempts { attempts, .. } => vec![
                format!("{attempts} answers in a row were rejected"),
                "Raise prompt.max_attempts in the config file, or set it to 0".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::TemplateNotFound { name } => vec![
                format!("No template named '{name}'"),
                "Check templates.local_path in your config file".into(),
            ],
            Self::RenderingFailed { name, .. } => vec![
                format!("Template '{name}' could not be rendered"),
                "If you override templates, check their syntax".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputClosed { .. } | Self::TooManyAttempts { .. } => ErrorCategory::Cancelled,
            Self::InvalidArgument { .. } => ErrorCategory::Internal,
            Self::InputFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Configuration,
        }
    }
}
