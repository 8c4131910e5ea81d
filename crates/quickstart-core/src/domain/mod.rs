// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the quickstart.
//!
//! Pure logic only: the defaults table, the settings record, answer
//! parsing, time zone lookup and Python literal rendering. All terminal,
//! filesystem and template concerns go through the ports defined in the
//! application layer.
//!
//! ## Rules
//!
//! - **No I/O**: nothing here reads stdin or touches the disk
//! - **No external crates**: only std, serde and thiserror
//! - **Plain values**: every type is Clone + PartialEq
pub mod answer;
pub mod defaults;
pub mod error;
pub mod literal;
pub mod paths;
pub mod settings;
pub mod timezone;

// Re-exports for convenience
pub use answer::{Answer, AnswerKind, Parsed};
pub use defaults::{Defaults, GithubPagesKind};
pub use error::{DomainError, ErrorCategory};
pub use paths::PathArg;
pub use settings::{Pagination, SettingValue, Settings, TemplateVars};
pub use timezone::{TZ_URL, TimezoneIndex};
