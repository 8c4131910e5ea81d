//! Case-insensitive lookup over canonical IANA time zone names.

use std::collections::HashMap;

use crate::domain::error::DomainError;

/// Where users are sent when their answer is not a known zone.
pub const TZ_URL: &str = "https://en.wikipedia.org/wiki/List_of_tz_database_time_zones";

/// Lower-cased name → canonical name.
#[derive(Debug, Clone, Default)]
pub struct TimezoneIndex {
    by_key: HashMap<String, String>,
}

impl TimezoneIndex {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let by_key = names
            .into_iter()
            .map(Into::into)
            .map(|canonical| (canonical.to_lowercase(), canonical))
            .collect();
        Self { by_key }
    }

    /// Trim, replace spaces with underscores, lower-case.
    pub fn normalize(input: &str) -> String {
        input.trim().replace(' ', "_").to_lowercase()
    }

    /// Canonical spelling of `input`, if it names a known zone.
    pub fn canonical(&self, input: &str) -> Option<&str> {
        self.by_key.get(&Self::normalize(input)).map(String::as_str)
    }

    /// Like [`Self::canonical`] but produces the re-prompt error.
    pub fn resolve(&self, input: &str, help_url: &str) -> Result<String, DomainError> {
        self.canonical(input)
            .map(str::to_owned)
            .ok_or_else(|| DomainError::UnknownTimezone {
                answer: input.trim().to_owned(),
                help_url: help_url.to_owned(),
            })
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> TimezoneIndex {
        TimezoneIndex::new(["America/Fortaleza", "America/Sao_Paulo", "UTC", "Europe/Lisbon"])
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(index().canonical("america/fortaleza"), Some("America/Fortaleza"));
        assert_eq!(index().canonical("AMERICA/FORTALEZA"), Some("America/Fortaleza"));
        assert_eq!(index().canonical("utc"), Some("UTC"));
    }

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(index().canonical(" america/sao paulo "), Some("America/Sao_Paulo"));
    }

    #[test]
    fn unknown_zone_is_rejected_with_url() {
        let err = index().resolve("Mars/Olympus", TZ_URL).unwrap_err();
        assert!(err.to_string().contains(TZ_URL));
    }

    #[test]
    fn normalize_rules() {
        assert_eq!(TimezoneIndex::normalize("  Europe/ Lisbon"), "europe/_lisbon");
    }
}
