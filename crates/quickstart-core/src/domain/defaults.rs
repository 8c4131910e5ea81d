//! The fixed table of setting defaults.
//!
//! A [`Defaults`] value is built once at startup (built-ins, then config
//! file overrides) and handed to the orchestrator explicitly.

use serde::{Deserialize, Serialize};

/// Language used when the locale does not name one.
pub const FALLBACK_LANGUAGE: &str = "pt";

/// Time zone used when the host zone cannot be determined.
pub const FALLBACK_TIMEZONE: &str = "America/Fortaleza";

/// Branch conventions for GitHub Pages publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GithubPagesKind {
    /// `username.github.io` sites publish from `main`.
    Personal,
    /// Project sites publish from `gh-pages`.
    Project,
}

impl GithubPagesKind {
    pub fn branch(self) -> &'static str {
        match self {
            Self::Personal => "main",
            Self::Project => "gh-pages",
        }
    }
}

/// Default value for every setting the quickstart asks about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub pelican: String,
    pub pelicanopts: String,
    pub ftp_host: String,
    pub ftp_user: String,
    pub ftp_target_dir: String,
    pub ssh_host: String,
    pub ssh_port: i64,
    pub ssh_user: String,
    pub ssh_target_dir: String,
    pub s3_bucket: String,
    pub cloudfiles_username: String,
    pub cloudfiles_api_key: String,
    pub cloudfiles_container: String,
    pub dropbox_dir: String,
    pub github_pages_branch: String,
    pub default_pagination: i64,
    pub siteurl: String,
    pub lang: String,
    pub timezone: String,
}

impl Defaults {
    /// Built-in table with the locale-derived language and time zone.
    pub fn new(lang: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            pelican: "pelican".into(),
            pelicanopts: String::new(),
            ftp_host: "localhost".into(),
            ftp_user: "anonymous".into(),
            ftp_target_dir: "/".into(),
            ssh_host: "localhost".into(),
            ssh_port: 22,
            ssh_user: "root".into(),
            ssh_target_dir: "/var/www".into(),
            s3_bucket: "my_s3_bucket".into(),
            cloudfiles_username: "my_rackspace_username".into(),
            cloudfiles_api_key: "my_rackspace_api_key".into(),
            cloudfiles_container: "my_cloudfiles_container".into(),
            dropbox_dir: "~/Dropbox/Public/".into(),
            github_pages_branch: GithubPagesKind::Project.branch().into(),
            default_pagination: 10,
            siteurl: String::new(),
            lang: lang.into(),
            timezone: timezone.into(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::new(FALLBACK_LANGUAGE, FALLBACK_TIMEZONE)
    }
}

/// Characters in a site language code.
pub const LANG_LENGTH: usize = 2;

/// `true` if `lang` is usable as the site language, e.g. `pt` or `en`.
pub fn is_valid_lang(lang: &str) -> bool {
    lang.chars().count() == LANG_LENGTH
}

/// Language code from a POSIX locale string such as `pt_BR.UTF-8`.
///
/// `C`, `POSIX` and empty strings carry no language.
pub fn language_from_locale(locale: &str) -> Option<String> {
    let name = locale.split(['.', '@']).next().unwrap_or_default().trim();
    if name.is_empty() || name.eq_ignore_ascii_case("c") || name.eq_ignore_ascii_case("posix") {
        return None;
    }
    name.split(['_', '-'])
        .next()
        .filter(|lang| !lang.is_empty())
        .map(str::to_owned)
}
