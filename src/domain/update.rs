//! Update decision emitted for a single package

use serde::{Deserialize, Serialize};
use std::fmt;

/// A package for which a newer admissible version was found.
///
/// Empty fields are omitted from the serialized form, matching the report
/// schema consumers of the JSON output expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageUpdate {
    /// Package id
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub include: String,
    /// Version currently declared in the manifest
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub current_version: String,
    /// Best admissible newer version found in the registry
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub new_version: String,
}

impl PackageUpdate {
    /// Creates a new update decision
    pub fn new(
        include: impl Into<String>,
        current_version: impl Into<String>,
        new_version: impl Into<String>,
    ) -> Self {
        Self {
            include: include.into(),
            current_version: current_version.into(),
            new_version: new_version.into(),
        }
    }
}

impl fmt::Display for PackageUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {}",
            self.include, self.current_version, self.new_version
        )
    }
}
