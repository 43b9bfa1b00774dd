//! Update policy selection
//!
//! The policy scopes how much of the version triple an update may change.
//! It is threaded through as an explicit value; there is no global state.

use clap::ValueEnum;
use semver::Version;
use std::fmt;
use std::str::FromStr;

/// How much of the version number an update is allowed to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UpdatePolicy {
    /// Any greater version is admissible
    Major,
    /// Only versions within the current major line
    Minor,
    /// Only versions within the current major.minor line
    #[default]
    Patch,
}

impl UpdatePolicy {
    /// Whether `candidate` stays within the version line this policy allows
    /// to move, relative to `current`.
    ///
    /// Strict ordering against `current` is checked by the resolver, not here.
    pub fn admits(&self, current: &Version, candidate: &Version) -> bool {
        match self {
            UpdatePolicy::Major => true,
            UpdatePolicy::Minor => candidate.major == current.major,
            UpdatePolicy::Patch => {
                candidate.major == current.major && candidate.minor == current.minor
            }
        }
    }
}

impl fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UpdatePolicy::Major => "major",
            UpdatePolicy::Minor => "minor",
            UpdatePolicy::Patch => "patch",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for UpdatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(UpdatePolicy::Major),
            "minor" => Ok(UpdatePolicy::Minor),
            "patch" => Ok(UpdatePolicy::Patch),
            other => Err(format!(
                "invalid update type '{}': expected 'major', 'minor', or 'patch'",
                other
            )),
        }
    }
}
