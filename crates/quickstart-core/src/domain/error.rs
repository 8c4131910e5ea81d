// ============================================================================
// domain/error.rs - ANSWER REJECTIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant describes an answer the user typed that cannot be
/// accepted. The `Display` text is the hint shown before re-prompting, so
/// it is written for the person at the keyboard.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Deve ser inserido um valor")]
    EmptyAnswer,

    #[error("A resposta deve ter {expected} caracteres")]
    WrongLength { expected: usize, actual: usize },

    #[error("Responda com 'y' para sim e 'n' para não")]
    UnrecognizedAnswer { answer: String },

    #[error("Deve ser um número inteiro")]
    NotAnInteger { answer: String },

    #[error("Por favor defina um 'time zone' válido:\n (veja [{help_url}])")]
    UnknownTimezone { answer: String, help_url: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyAnswer => vec!["Digite um valor e pressione Enter".into()],
            Self::WrongLength { expected, actual } => vec![format!(
                "Foram digitados {actual} caracteres, esperados {expected}"
            )],
            Self::UnrecognizedAnswer { answer } => vec![
                format!("'{answer}' não é uma resposta reconhecida"),
                "Aceitos: y, yes, s, sim / n, no, nao, não".into(),
            ],
            Self::NotAnInteger { answer } => vec![format!("'{answer}' não é um número")],
            Self::UnknownTimezone { help_url, .. } => vec![
                "Use um nome como America/Sao_Paulo ou Europe/Lisbon".into(),
                format!("Lista completa: {help_url}"),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyAnswer | Self::WrongLength { .. } => ErrorCategory::Validation,
            Self::UnrecognizedAnswer { .. } | Self::NotAnInteger { .. } => ErrorCategory::Parse,
            Self::UnknownTimezone { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Parse,
    NotFound,
}
