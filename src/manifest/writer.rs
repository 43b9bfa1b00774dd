//! Project file rewrite (--fix)
//!
//! Intentionally unimplemented. Rewriting project XML in place needs a
//! contract for atomicity and formatting preservation that does not exist
//! yet, so the whole path fails up front and the file is never touched.

use crate::domain::PackageUpdate;
use crate::error::ManifestError;
use std::path::Path;

/// Apply update decisions to the project file in place.
pub fn apply_updates(_path: &Path, _updates: &[PackageUpdate]) -> Result<(), ManifestError> {
    Err(ManifestError::RewriteUnsupported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_apply_updates_is_unsupported() {
        let updates = vec![PackageUpdate::new("Serilog", "3.1.0", "3.1.1")];
        let result = apply_updates(&PathBuf::from("App.csproj"), &updates);
        assert!(matches!(result, Err(ManifestError::RewriteUnsupported)));
    }

    #[test]
    fn test_apply_updates_never_touches_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("App.csproj");
        let original = r#"<Project>
  <ItemGroup>
    <PackageReference Include="Serilog" Version="3.1.0" />
  </ItemGroup>
</Project>"#;
        fs::write(&path, original).unwrap();

        let updates = vec![PackageUpdate::new("Serilog", "3.1.0", "3.1.1")];
        let _ = apply_updates(&path, &updates);

        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
