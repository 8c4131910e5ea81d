//! The settings accumulated while prompting, and the template variables
//! derived from them.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{
    defaults::{Defaults, GithubPagesKind},
    literal::python_literal,
};

/// Articles-per-page setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    Enabled(i64),
    /// Rendered as `False` in the generated configuration.
    Disabled,
}

impl Pagination {
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    fn value(self) -> SettingValue {
        match self {
            Self::Enabled(n) => SettingValue::Int(n),
            Self::Disabled => SettingValue::Disabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FtpTarget {
    pub enabled: bool,
    pub host: String,
    pub user: String,
    pub target_dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshTarget {
    pub enabled: bool,
    pub host: String,
    pub port: i64,
    pub user: String,
    pub target_dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropboxTarget {
    pub enabled: bool,
    pub dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Target {
    pub enabled: bool,
    pub bucket: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudFilesTarget {
    pub enabled: bool,
    pub username: String,
    pub api_key: String,
    pub container: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubPagesTarget {
    pub enabled: bool,
    pub branch: String,
}

impl GithubPagesTarget {
    pub fn select(&mut self, kind: GithubPagesKind) {
        self.branch = kind.branch().to_owned();
    }
}

/// Every setting the generated files reference.
///
/// Seeded from [`Defaults`] so each key is well-typed before the first
/// question. Publishing targets keep their defaults unless opted into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub basedir: PathBuf,
    pub pelican: String,
    pub pelicanopts: String,
    pub sitename: String,
    pub author: String,
    pub lang: String,
    pub siteurl: String,
    pub timezone: String,
    pub pagination: Pagination,
    pub ftp: FtpTarget,
    pub ssh: SshTarget,
    pub dropbox: DropboxTarget,
    pub s3: S3Target,
    pub cloudfiles: CloudFilesTarget,
    pub github: GithubPagesTarget,
}

impl Settings {
    pub fn seeded(defaults: &Defaults, basedir: impl Into<PathBuf>) -> Self {
        Self {
            basedir: basedir.into(),
            pelican: defaults.pelican.clone(),
            pelicanopts: defaults.pelicanopts.clone(),
            sitename: String::new(),
            author: String::new(),
            lang: defaults.lang.clone(),
            siteurl: defaults.siteurl.clone(),
            timezone: defaults.timezone.clone(),
            pagination: if defaults.default_pagination > 0 {
                Pagination::Enabled(defaults.default_pagination)
            } else {
                Pagination::Disabled
            },
            ftp: FtpTarget {
                enabled: false,
                host: defaults.ftp_host.clone(),
                user: defaults.ftp_user.clone(),
                target_dir: defaults.ftp_target_dir.clone(),
            },
            ssh: SshTarget {
                enabled: false,
                host: defaults.ssh_host.clone(),
                port: defaults.ssh_port,
                user: defaults.ssh_user.clone(),
                target_dir: defaults.ssh_target_dir.clone(),
            },
            dropbox: DropboxTarget {
                enabled: false,
                dir: defaults.dropbox_dir.clone(),
            },
            s3: S3Target {
                enabled: false,
                bucket: defaults.s3_bucket.clone(),
            },
            cloudfiles: CloudFilesTarget {
                enabled: false,
                username: defaults.cloudfiles_username.clone(),
                api_key: defaults.cloudfiles_api_key.clone(),
                container: defaults.cloudfiles_container.clone(),
            },
            github: GithubPagesTarget {
                enabled: false,
                branch: defaults.github_pages_branch.clone(),
            },
        }
    }

    /// Flat key/value view used by the templates.
    pub fn entries(&self) -> Vec<(&'static str, SettingValue)> {
        use SettingValue::{Bool, Int, Text};

        vec![
            ("basedir", Text(self.basedir.display().to_string())),
            ("pelican", Text(self.pelican.clone())),
            ("pelicanopts", Text(self.pelicanopts.clone())),
            ("sitename", Text(self.sitename.clone())),
            ("author", Text(self.author.clone())),
            ("lang", Text(self.lang.clone())),
            ("siteurl", Text(self.siteurl.clone())),
            ("timezone", Text(self.timezone.clone())),
            ("with_pagination", Bool(self.pagination.is_enabled())),
            ("default_pagination", self.pagination.value()),
            ("ftp", Bool(self.ftp.enabled)),
            ("ftp_host", Text(self.ftp.host.clone())),
            ("ftp_user", Text(self.ftp.user.clone())),
            ("ftp_target_dir", Text(self.ftp.target_dir.clone())),
            ("ssh", Bool(self.ssh.enabled)),
            ("ssh_host", Text(self.ssh.host.clone())),
            ("ssh_port", Int(self.ssh.port)),
            ("ssh_user", Text(self.ssh.user.clone())),
            ("ssh_target_dir", Text(self.ssh.target_dir.clone())),
            ("dropbox", Bool(self.dropbox.enabled)),
            ("dropbox_dir", Text(self.dropbox.dir.clone())),
            ("s3", Bool(self.s3.enabled)),
            ("s3_bucket", Text(self.s3.bucket.clone())),
            ("cloudfiles", Bool(self.cloudfiles.enabled)),
            ("cloudfiles_username", Text(self.cloudfiles.username.clone())),
            ("cloudfiles_api_key", Text(self.cloudfiles.api_key.clone())),
            ("cloudfiles_container", Text(self.cloudfiles.container.clone())),
            ("github", Bool(self.github.enabled)),
            ("github_pages_branch", Text(self.github.branch.clone())),
        ]
    }
}

/// A single setting value as seen by templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Text(String),
    Bool(bool),
    Int(i64),
    /// A switched-off numeric setting; serialises as `false`.
    Disabled,
}

impl Serialize for SettingValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Disabled => serializer.serialize_bool(false),
        }
    }
}

/// Variables handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateVars(BTreeMap<String, SettingValue>);

impl TemplateVars {
    /// Values passed through unchanged, for templates that format them.
    pub fn raw(settings: &Settings) -> Self {
        Self(
            settings
                .entries()
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect(),
        )
    }

    /// Every value replaced by its Python literal text.
    pub fn python_literals(settings: &Settings) -> Self {
        Self(
            settings
                .entries()
                .into_iter()
                .map(|(k, v)| (k.to_owned(), SettingValue::Text(python_literal(&v))))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        let mut s = Settings::seeded(&Defaults::default(), "/srv/blog");
        s.sitename = "Meu Blog".into();
        s.author = "Ana".into();
        s
    }

    #[test]
    fn seeded_settings_take_defaults() {
        let s = settings();
        assert_eq!(s.pagination, Pagination::Enabled(10));
        assert_eq!(s.ssh.port, 22);
        assert!(!s.ftp.enabled);
        assert_eq!(s.github.branch, "gh-pages");
    }

    #[test]
    fn zero_pagination_default_seeds_disabled() {
        let mut d = Defaults::default();
        d.default_pagination = 0;
        assert_eq!(Settings::seeded(&d, ".").pagination, Pagination::Disabled);
    }

    #[test]
    fn raw_vars_keep_types() {
        let vars = TemplateVars::raw(&settings());
        assert_eq!(vars.get("ssh_port"), Some(&SettingValue::Int(22)));
        assert_eq!(vars.get("ftp"), Some(&SettingValue::Bool(false)));
        assert_eq!(
            vars.get("sitename"),
            Some(&SettingValue::Text("Meu Blog".into()))
        );
    }

    #[test]
    fn literal_vars_are_python_source() {
        let mut s = settings();
        s.pagination = Pagination::Disabled;
        let vars = TemplateVars::python_literals(&s);
        let text = |k: &str| match vars.get(k) {
            Some(SettingValue::Text(t)) => t.clone(),
            other => panic!("{k}: {other:?}"),
        };
        assert_eq!(text("sitename"), "'Meu Blog'");
        assert_eq!(text("default_pagination"), "False");
        assert_eq!(text("with_pagination"), "False");
        assert_eq!(text("ssh_port"), "22");
    }

    #[test]
    fn both_variants_cover_the_same_keys() {
        let s = settings();
        let raw: Vec<_> = TemplateVars::raw(&s).0.iter().map(|(k, _)| k.to_owned()).collect();
        let lit: Vec<_> = TemplateVars::python_literals(&s)
            .0.iter()
            .map(|(k, _)| k.to_owned())
            .collect();
        assert_eq!(raw, lit);
    }

    #[test]
    fn github_kind_selects_branch() {
        let mut s = settings();
        s.github.select(GithubPagesKind::Personal);
        assert_eq!(s.github.branch, "main");
    }
}
