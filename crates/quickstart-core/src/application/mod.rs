//! Application layer for the quickstart.
//!
//! This layer contains:
//! - **Services**: the run orchestrator, the prompt engine and the
//!   best-effort file generator
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Answer parsing and the settings record live in `crate::domain`; this
//! layer only sequences them.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GenerationFailure, GenerationReport, PromptEngine, QuickstartOutcome, QuickstartRequest,
    QuickstartService, RenderService, questions,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PromptIo, TemplateRenderer, TimezoneDatabase};

pub use error::ApplicationError;
