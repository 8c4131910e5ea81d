//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `quickstart-adapters` and the
//! CLI crate implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `PromptIo`: line-oriented question/answer channel
//!   - `Filesystem`: directory creation and file I/O
//!   - `TemplateRenderer`: named template rendering
//!   - `TimezoneDatabase`: canonical time zone names

pub mod output;

pub use output::{Filesystem, PromptIo, TemplateRenderer, TimezoneDatabase};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer};
