//! Package reference structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `<PackageReference>` declared in a .csproj file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReference {
    /// Package id, taken from the `Include` attribute
    pub name: String,
    /// Declared version string, exactly as written in the manifest
    pub version: String,
}

impl PackageReference {
    /// Creates a new package reference
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
