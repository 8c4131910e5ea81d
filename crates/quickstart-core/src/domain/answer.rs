//! Answer kinds and the pure parsing rules behind every prompt.
//!
//! The prompt engine owns the retry loop; these functions only decide
//! whether a single line of input is acceptable.

use std::fmt;

use crate::domain::error::DomainError;

/// Tokens accepted as "yes", compared after trimming and lower-casing.
pub const AFFIRMATIVE: &[&str] = &["y", "yes", "s", "sim"];

/// Tokens accepted as "no".
pub const NEGATIVE: &[&str] = &["n", "no", "nao", "não"];

/// What kind of value a prompt collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    Text,
    Bool,
    Integer,
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Bool => write!(f, "bool"),
            Self::Integer => write!(f, "integer"),
        }
    }
}

/// A resolved answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Bool(bool),
    Integer(i64),
}

impl Answer {
    pub fn kind(&self) -> AnswerKind {
        match self {
            Self::Text(_) => AnswerKind::Text,
            Self::Bool(_) => AnswerKind::Bool,
            Self::Integer(_) => AnswerKind::Integer,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

/// Outcome of parsing one line: either a value, or "nothing typed and
/// nothing to fall back on" which the caller handles by asking again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<T> {
    Value(T),
    Empty,
}

/// Parse a free-text answer.
///
/// `length` counts characters, not bytes, so `"pé"` has length 2.
pub fn parse_text(
    raw: &str,
    default: Option<&str>,
    length: Option<usize>,
) -> Result<String, DomainError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return match default {
            Some(d) if !d.is_empty() => Ok(d.to_owned()),
            _ => Err(DomainError::EmptyAnswer),
        };
    }

    if let Some(expected) = length {
        let actual = trimmed.chars().count();
        if actual != expected {
            return Err(DomainError::WrongLength { expected, actual });
        }
    }

    Ok(trimmed.to_owned())
}

/// Parse a yes/no answer.
pub fn parse_bool(raw: &str, default: Option<bool>) -> Result<Parsed<bool>, DomainError> {
    let token = raw.trim().to_lowercase();

    if AFFIRMATIVE.contains(&token.as_str()) {
        return Ok(Parsed::Value(true));
    }
    if NEGATIVE.contains(&token.as_str()) {
        return Ok(Parsed::Value(false));
    }
    if token.is_empty() {
        return Ok(default.map_or(Parsed::Empty, Parsed::Value));
    }

    Err(DomainError::UnrecognizedAnswer { answer: token })
}

/// Parse an integer answer.
pub fn parse_integer(raw: &str, default: Option<i64>) -> Result<Parsed<i64>, DomainError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(default.map_or(Parsed::Empty, Parsed::Value));
    }

    trimmed
        .parse::<i64>()
        .map(Parsed::Value)
        .map_err(|_| DomainError::NotAnInteger {
            answer: trimmed.to_owned(),
        })
}

/// The prompt suffix that advertises the default.
pub fn bool_hint(default: Option<bool>) -> &'static str {
    match default {
        Some(true) => "(Y/n)",
        Some(false) => "(y/N)",
        None => "(y/n)",
    }
}
