//! Project manifest reading
//!
//! This module provides:
//! - Recognition of .csproj project files by extension
//! - XML parsing of `<PackageReference>` declarations
//! - The (unimplemented) in-place rewrite path behind --fix

mod csproj;
mod writer;

pub use writer::apply_updates;

use crate::domain::PackageReference;
use crate::error::ManifestError;
use std::path::Path;

/// Parse the declared package references out of project file content.
///
/// Only `.csproj` files are recognized; anything else fails with
/// `UnsupportedFormat` before the content is looked at.
pub fn parse_packages(path: &Path, content: &str) -> Result<Vec<PackageReference>, ManifestError> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("csproj") {
        return Err(ManifestError::unsupported_format(path));
    }
    csproj::parse(path, content)
}

/// Read a project file from disk and parse its package references.
pub fn read_packages(path: &Path) -> Result<Vec<PackageReference>, ManifestError> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("csproj") {
        return Err(ManifestError::unsupported_format(path));
    }
    let content = std::fs::read_to_string(path).map_err(|e| ManifestError::read(path, e))?;
    csproj::parse(path, &content)
}
