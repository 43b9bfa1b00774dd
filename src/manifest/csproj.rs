//! .csproj XML parsing
//!
//! Only the dependency declarations are modeled; everything else in the
//! project XML is ignored. A project file nests references as
//! `<Project><ItemGroup><PackageReference Include=".." Version=".."/>`,
//! usually across several ItemGroup elements, so the groups are flattened
//! in document order.

use crate::domain::PackageReference;
use crate::error::ManifestError;
use serde::Deserialize;
use std::path::Path;

/// Root element of a .csproj file
#[derive(Debug, Deserialize)]
struct Project {
    #[serde(rename = "ItemGroup", default)]
    item_groups: Vec<ItemGroup>,
}

#[derive(Debug, Deserialize)]
struct ItemGroup {
    #[serde(rename = "PackageReference", default)]
    package_references: Vec<PackageReferenceElement>,
}

/// Raw `<PackageReference>` element. Both attributes are optional in the
/// MSBuild schema (the version can live in a props file), so they are only
/// turned into a [`PackageReference`] when both are present.
#[derive(Debug, Deserialize)]
struct PackageReferenceElement {
    #[serde(rename = "@Include")]
    include: Option<String>,
    #[serde(rename = "@Version")]
    version: Option<String>,
}

/// Parse the package references declared in `.csproj` content.
///
/// Malformed XML is fatal; entries without an `Include` or `Version`
/// attribute are skipped.
pub fn parse(path: &Path, content: &str) -> Result<Vec<PackageReference>, ManifestError> {
    let project: Project =
        quick_xml::de::from_str(content).map_err(|e| ManifestError::xml_parse(path, e.to_string()))?;

    Ok(project
        .item_groups
        .into_iter()
        .flat_map(|group| group.package_references)
        .filter_map(|element| match (element.include, element.version) {
            (Some(include), Some(version)) if !include.is_empty() => {
                Some(PackageReference::new(include, version))
            }
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn csproj_path() -> PathBuf {
        PathBuf::from("App.csproj")
    }

    const SAMPLE: &str = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework>net8.0</TargetFramework>
  </PropertyGroup>
  <ItemGroup>
    <PackageReference Include="Newtonsoft.Json" Version="13.0.1" />
    <PackageReference Include="Serilog" Version="3.1.0" />
  </ItemGroup>
  <ItemGroup>
    <PackageReference Include="xunit" Version="2.6.2" />
  </ItemGroup>
</Project>
"#;

    #[test]
    fn test_parse_flattens_item_groups_in_order() {
        let packages = parse(&csproj_path(), SAMPLE).unwrap();
        assert_eq!(packages.len(), 3);
        assert_eq!(packages[0], PackageReference::new("Newtonsoft.Json", "13.0.1"));
        assert_eq!(packages[1], PackageReference::new("Serilog", "3.1.0"));
        assert_eq!(packages[2], PackageReference::new("xunit", "2.6.2"));
    }

    #[test]
    fn test_parse_project_without_item_groups() {
        let packages = parse(&csproj_path(), "<Project></Project>").unwrap();
        assert!(packages.is_empty());
    }

    #[test]
    fn test_parse_item_group_without_package_references() {
        let content = r#"<Project>
  <ItemGroup>
    <Compile Include="Program.cs" />
  </ItemGroup>
</Project>"#;
        let packages = parse(&csproj_path(), content).unwrap();
        assert!(packages.is_empty());
    }

    #[test]
    fn test_parse_skips_reference_without_version() {
        // Version managed elsewhere (e.g. Directory.Packages.props)
        let content = r#"<Project>
  <ItemGroup>
    <PackageReference Include="Newtonsoft.Json" />
    <PackageReference Include="Serilog" Version="3.1.0" />
  </ItemGroup>
</Project>"#;
        let packages = parse(&csproj_path(), content).unwrap();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "Serilog");
    }

    #[test]
    fn test_parse_skips_reference_without_include() {
        let content = r#"<Project>
  <ItemGroup>
    <PackageReference Version="1.0.0" />
  </ItemGroup>
</Project>"#;
        let packages = parse(&csproj_path(), content).unwrap();
        assert!(packages.is_empty());
    }

    #[test]
    fn test_parse_malformed_xml() {
        let result = parse(&csproj_path(), "<Project><ItemGroup></Project>");
        assert!(matches!(result, Err(ManifestError::XmlParse { .. })));
    }

    #[test]
    fn test_parse_not_xml_at_all() {
        let result = parse(&csproj_path(), "{\"dependencies\": {}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_preserves_declaration_order() {
        let content = r#"<Project>
  <ItemGroup>
    <PackageReference Include="Zebra" Version="1.0.0" />
    <PackageReference Include="Alpha" Version="2.0.0" />
  </ItemGroup>
</Project>"#;
        let packages = parse(&csproj_path(), content).unwrap();
        let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Alpha"]);
    }
}
