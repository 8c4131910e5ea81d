//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use quickstart_core::{
    QuickstartError, QuickstartResult, application::ApplicationError,
    application::ports::Filesystem,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> QuickstartResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        // The leaf is created with `create_dir` so an existing entry fails.
        std::fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> QuickstartResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> QuickstartResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> QuickstartError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_makes_missing_parents() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("site/content");

        LocalFilesystem::new().create_dir(&target).unwrap();

        assert!(target.is_dir());
    }

    #[test]
    fn create_dir_fails_when_directory_exists() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("output");
        std::fs::create_dir(&target).unwrap();

        let err = LocalFilesystem::new().create_dir(&target).unwrap_err();

        assert!(err.to_string().contains("create directory"));
    }

    #[test]
    fn write_then_read_utf8() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("pelicanconf.py");
        let fs = LocalFilesystem::new();

        fs.write_file(&file, "SITENAME = 'Olá'\n").unwrap();

        assert!(fs.is_file(&file));
        assert_eq!(fs.read_to_string(&file).unwrap(), "SITENAME = 'Olá'\n");
    }

    #[test]
    fn write_into_missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("missing/publishconf.py");

        assert!(LocalFilesystem::new().write_file(&file, "x").is_err());
    }

    #[test]
    fn directories_are_not_files() {
        let temp = TempDir::new().unwrap();
        assert!(!LocalFilesystem::new().is_file(temp.path()));
    }
}
