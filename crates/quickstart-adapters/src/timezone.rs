//! Time zone database backed by `chrono-tz`.

use chrono_tz::{TZ_VARIANTS, Tz};

use quickstart_core::application::ports::TimezoneDatabase;

/// The IANA database compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTzDatabase;

impl ChronoTzDatabase {
    pub fn new() -> Self {
        Self
    }

    /// Exact (case sensitive) lookup of a canonical name.
    pub fn is_known(name: &str) -> bool {
        name.parse::<Tz>().is_ok()
    }
}

impl TimezoneDatabase for ChronoTzDatabase {
    fn names(&self) -> Vec<String> {
        TZ_VARIANTS.iter().map(|tz| tz.name().to_owned()).collect()
    }
}
