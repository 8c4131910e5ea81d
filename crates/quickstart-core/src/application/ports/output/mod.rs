//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.

use std::path::Path;

use crate::domain::TemplateVars;
use crate::error::QuickstartResult;

/// Port for asking questions.
///
/// Implemented by:
/// - `quickstart_adapters::ScriptedInput` (tests, batch answers)
/// - the terminal prompts in the CLI crate
pub trait PromptIo {
    /// Show `prompt` and read one line.
    ///
    /// Returns `Ok(None)` once the input is exhausted; the prompt engine
    /// turns that into `ApplicationError::InputClosed`.
    fn read_line(&mut self, prompt: &str) -> QuickstartResult<Option<String>>;

    /// Show a message that is not a question (hints, status lines).
    fn notice(&mut self, message: &str);
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `quickstart_adapters::filesystem::LocalFilesystem` (production)
/// - `quickstart_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory, along with any missing parents.
    ///
    /// Fails if `path` already exists.
    fn create_dir(&self, path: &Path) -> QuickstartResult<()>;

    /// Write UTF-8 content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> QuickstartResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> QuickstartResult<String>;

    /// Check if path is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `quickstart_adapters::renderer::TeraRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the template called `name` with `vars`.
    fn render(&self, name: &str, vars: &TemplateVars) -> QuickstartResult<String>;
}

/// Port for the platform time zone database.
///
/// Implemented by:
/// - `quickstart_adapters::timezone::ChronoTzDatabase`
pub trait TimezoneDatabase: Send + Sync {
    /// Every canonical zone name, e.g. `America/Fortaleza`.
    fn names(&self) -> Vec<String>;
}
