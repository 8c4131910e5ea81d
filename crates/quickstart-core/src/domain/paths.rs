//! Base-directory resolution helpers.

use std::path::{Component, Path, PathBuf};

/// The `--path` argument, remembering whether the user actually typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathArg {
    /// Passed on the command line.
    Explicit(PathBuf),
    /// Fallback (the current directory) when nothing was passed.
    Implicit(PathBuf),
}

impl PathArg {
    pub fn from_cli(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Self::Explicit(p),
            None => Self::Implicit(PathBuf::from(".")),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(p) | Self::Implicit(p) => p,
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

/// Replace a leading `~` with `home`.
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home.to_path_buf(),
        (Some(rest), Some(home)) if rest.starts_with('/') || rest.starts_with('\\') => {
            home.join(&rest[1..])
        }
        _ => PathBuf::from(path),
    }
}

/// Make `path` absolute against `cwd` and drop `.`/`..` segments
/// lexically, without touching the filesystem.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
