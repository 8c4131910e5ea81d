//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the resulting
//! [`Defaults`] table and retry cap.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `PELICAN_QUICKSTART__<SECTION>__<KEY>`
//! 3. Config file (`--config FILE`, else the per-user `config.toml`)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use quickstart_core::domain::{
    Defaults,
    defaults::{LANG_LENGTH, is_valid_lang},
};

use crate::error::{CliError, CliResult};

/// Prefix of every environment override.
pub const ENV_PREFIX: &str = "PELICAN_QUICKSTART";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides for the built-in answer defaults.
    pub defaults: DefaultsConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Question loop settings.
    pub prompt: PromptConfig,
}

/// Every field replaces the matching built-in default when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub lang: Option<String>,
    pub timezone: Option<String>,
    pub siteurl: Option<String>,
    pub default_pagination: Option<i64>,
    pub pelican: Option<String>,
    pub pelicanopts: Option<String>,
    pub ftp_host: Option<String>,
    pub ftp_user: Option<String>,
    pub ftp_target_dir: Option<String>,
    pub ssh_host: Option<String>,
    pub ssh_port: Option<i64>,
    pub ssh_user: Option<String>,
    pub ssh_target_dir: Option<String>,
    pub s3_bucket: Option<String>,
    pub cloudfiles_username: Option<String>,
    pub cloudfiles_api_key: Option<String>,
    pub cloudfiles_container: Option<String>,
    pub dropbox_dir: Option<String>,
    pub github_pages_branch: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory whose files override the built-in templates.
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Rejected answers allowed per question; 0 means unlimited.
    pub max_attempts: u32,
}

impl DefaultsConfig {
    /// `base` with every configured field replaced.
    pub fn apply(&self, mut base: Defaults) -> Defaults {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                slot.clone_from(v);
            }
        }

        set(&mut base.lang, &self.lang);
        set(&mut base.timezone, &self.timezone);
        set(&mut base.siteurl, &self.siteurl);
        set(&mut base.default_pagination, &self.default_pagination);
        set(&mut base.pelican, &self.pelican);
        set(&mut base.pelicanopts, &self.pelicanopts);
        set(&mut base.ftp_host, &self.ftp_host);
        set(&mut base.ftp_user, &self.ftp_user);
        set(&mut base.ftp_target_dir, &self.ftp_target_dir);
        set(&mut base.ssh_host, &self.ssh_host);
        set(&mut base.ssh_port, &self.ssh_port);
        set(&mut base.ssh_user, &self.ssh_user);
        set(&mut base.ssh_target_dir, &self.ssh_target_dir);
        set(&mut base.s3_bucket, &self.s3_bucket);
        set(&mut base.cloudfiles_username, &self.cloudfiles_username);
        set(&mut base.cloudfiles_api_key, &self.cloudfiles_api_key);
        set(&mut base.cloudfiles_container, &self.cloudfiles_container);
        set(&mut base.dropbox_dir, &self.dropbox_dir);
        set(&mut base.github_pages_branch, &self.github_pages_branch);
        base
    }
}

impl AppConfig {
    /// Load configuration from the file layer and the process environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.
    /// Without it the per-user file is read if present.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        Self::load_with(config_file, None)
    }

    /// Like [`Self::load`], reading environment overrides from `env`
    /// instead of the process environment when given.
    pub fn load_with(
        config_file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> CliResult<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Self::config_path()).required(false),
        };
        debug!(explicit = config_file.is_some(), "Loading configuration");

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .source(env);

        let config = Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;

        config.validate()
    }

    /// Reject values the questions would refuse as answers.
    fn validate(self) -> CliResult<Self> {
        if let Some(lang) = self.defaults.lang.as_deref() {
            if !is_valid_lang(lang) {
                return Err(CliError::ConfigError {
                    message: format!(
                        "defaults.lang must have exactly {LANG_LENGTH} characters, got '{lang}'"
                    ),
                    source: None,
                });
            }
        }
        Ok(self)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.pelican-quickstart.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "getpelican", "pelican-quickstart")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".pelican-quickstart.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env() -> Option<config::Map<String, String>> {
        Some(config::Map::new())
    }

    fn write_config(body: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, body).unwrap();
        (temp, path)
    }

    #[test]
    fn default_overrides_nothing() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.apply(Defaults::default()), Defaults::default());
        assert_eq!(cfg.prompt.max_attempts, 0);
    }

    #[test]
    fn file_overrides_defaults() {
        let (_t, path) = write_config(
            r#"
[defaults]
lang = "en"
ssh_port = 2222
timezone = "Europe/Lisbon"

[prompt]
max_attempts = 3

[templates]
local_path = "/srv/templates"
"#,
        );

        let cfg = AppConfig::load_with(Some(&path), no_env()).unwrap();
        let defaults = cfg.defaults.apply(Defaults::default());

        assert_eq!(defaults.lang, "en");
        assert_eq!(defaults.ssh_port, 2222);
        assert_eq!(defaults.timezone, "Europe/Lisbon");
        assert_eq!(defaults.ftp_host, "localhost");
        assert_eq!(cfg.prompt.max_attempts, 3);
        assert_eq!(cfg.templates.local_path, Some(PathBuf::from("/srv/templates")));
    }

    #[test]
    fn environment_beats_file() {
        let (_t, path) = write_config("[defaults]\nlang = \"en\"\n");
        let mut env = config::Map::new();
        env.insert("PELICAN_QUICKSTART__DEFAULTS__LANG".into(), "es".into());
        env.insert("PELICAN_QUICKSTART__PROMPT__MAX_ATTEMPTS".into(), "5".into());

        let cfg = AppConfig::load_with(Some(&path), Some(env)).unwrap();

        assert_eq!(cfg.defaults.lang.as_deref(), Some("es"));
        assert_eq!(cfg.prompt.max_attempts, 5);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");

        let err = AppConfig::load_with(Some(&missing), no_env()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let (_t, path) = write_config("[prompt]\nmax_attempts = \"many\"\n");
        assert!(AppConfig::load_with(Some(&path), no_env()).is_err());
    }

    #[test]
    fn lang_of_wrong_length_is_rejected() {
        let (_t, path) = write_config("[defaults]\nlang = \"por\"\n");
        let err = AppConfig::load_with(Some(&path), no_env()).unwrap_err();
        assert_eq!(err.exit_code(), 4);

        let mut env = config::Map::new();
        env.insert("PELICAN_QUICKSTART__DEFAULTS__LANG".into(), "ast".into());
        assert!(AppConfig::load_with(None, Some(env)).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
