//! Host locale probing for the language and time zone defaults.
//!
//! Environment lookups go through a closure so callers (and tests) choose
//! where variables come from.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use quickstart_core::domain::{
    Defaults,
    defaults::{FALLBACK_LANGUAGE, FALLBACK_TIMEZONE, is_valid_lang, language_from_locale},
};

use crate::timezone::ChronoTzDatabase;

/// Locale variables, highest precedence first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Reads the host's locale and zone settings.
#[derive(Debug, Clone)]
pub struct SystemLocale {
    root: PathBuf,
}

impl Default for SystemLocale {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemLocale {
    pub fn new() -> Self {
        Self::with_root("/")
    }

    /// Probe `etc/localtime` and `etc/timezone` below `root` instead of `/`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Built-in defaults seeded from the process environment.
    pub fn defaults(&self) -> Defaults {
        let env = |key: &str| std::env::var(key).ok();
        Defaults::new(self.language(env), self.timezone(env))
    }

    /// Two-letter language from the first set locale variable, else the fallback.
    pub fn language(&self, env: impl Fn(&str) -> Option<String>) -> String {
        let locale = LOCALE_VARS
            .into_iter()
            .filter_map(|key| env(key))
            .find(|value| !value.is_empty());

        let lang = locale
            .as_deref()
            .and_then(language_from_locale)
            .filter(|lang| is_valid_lang(lang));
        debug!(?locale, ?lang, "Language from locale");
        lang.unwrap_or_else(|| FALLBACK_LANGUAGE.to_owned())
    }

    /// Host time zone: `TZ`, then `/etc/localtime`, then `/etc/timezone`.
    ///
    /// Candidates that are not canonical zone names are skipped.
    pub fn timezone(&self, env: impl Fn(&str) -> Option<String>) -> String {
        let from_env = env("TZ").map(|tz| tz.trim_start_matches(':').to_owned());
        let candidates = [from_env, self.localtime_link(), self.timezone_file()];

        candidates
            .into_iter()
            .flatten()
            .find(|name| ChronoTzDatabase::is_known(name))
            .inspect(|name| debug!(%name, "Host time zone"))
            .unwrap_or_else(|| FALLBACK_TIMEZONE.to_owned())
    }

    /// `America/Fortaleza` from a link like `/usr/share/zoneinfo/America/Fortaleza`.
    fn localtime_link(&self) -> Option<String> {
        let target = fs::read_link(self.root.join("etc/localtime")).ok()?;
        zone_from_zoneinfo_path(&target)
    }

    fn timezone_file(&self) -> Option<String> {
        let content = fs::read_to_string(self.root.join("etc/timezone")).ok()?;
        content
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
    }
}

fn zone_from_zoneinfo_path(path: &Path) -> Option<String> {
    let text = path.to_str()?;
    let (_, zone) = text.split_once("zoneinfo/")?;
    Some(zone.to_owned())
}
