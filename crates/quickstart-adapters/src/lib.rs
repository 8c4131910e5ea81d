//! Infrastructure adapters for pelican-quickstart.
//!
//! This crate implements the ports defined in `quickstart_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod input;
pub mod locale;
pub mod renderer;
pub mod timezone;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use input::ScriptedInput;
pub use locale::SystemLocale;
pub use renderer::TeraRenderer;
pub use timezone::ChronoTzDatabase;
