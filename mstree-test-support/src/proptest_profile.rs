//! Environment-driven tuning for the property suites.
//!
//! Every suite builds its proptest configuration from one [`ProptestRunProfile`]
//! so a CI job can scale all of them with a single override.

use std::env;
use std::fmt;

/// Environment variable overriding the number of cases per property.
pub const CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable enabling forked execution of property cases.
pub const FORK_ENV_KEY: &str = "MSTREE_PBT_FORK";

/// Case count and fork mode for a property suite run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

/// Reason an override was ignored.
#[derive(Debug, PartialEq, Eq)]
enum OverrideError {
    NotANumber,
    ZeroCases,
    NotABoolean,
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotANumber => "expected a positive integer",
            Self::ZeroCases => "case count must be greater than zero",
            Self::NotABoolean => "expected one of true/false/1/0/yes/no/on/off",
        };
        f.write_str(text)
    }
}

impl ProptestRunProfile {
    /// Reads the overrides, falling back to the supplied defaults.
    ///
    /// Invalid values are reported through `tracing::warn!` and ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use mstree_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_override(CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: read_override(FORK_ENV_KEY, parse_switch).unwrap_or(default_fork),
        }
    }

    /// Number of cases per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn read_override<T>(key: &'static str, parse: fn(&str) -> Result<T, OverrideError>) -> Option<T> {
    let raw = env::var(key).ok()?;
    parse(&raw)
        .inspect_err(|reason| {
            tracing::warn!(
                env = key,
                raw = %raw,
                reason = %reason,
                "ignoring invalid property-test override",
            );
        })
        .ok()
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber),
    }
}

fn parse_switch(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABoolean),
    }
}
