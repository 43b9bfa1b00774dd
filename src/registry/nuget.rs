//! NuGet registration index adapter
//!
//! Fetches the list of released versions from the NuGet v3 registration
//! index. API endpoint: {base}/{package}/index.json, package id lowercased.
//!
//! The index nests versions two levels deep: the document holds pages under
//! `items`, each page holds leaves under its own `items`, and each leaf
//! carries the version in `catalogEntry.version`. Large packages get pages
//! served without inline leaves (only a page URL); those contribute nothing
//! here rather than being chased through extra requests.

use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use serde::Deserialize;

/// NuGet registration index base URL (gz, semver1 hive)
const NUGET_REGISTRATION_URL: &str = "https://api.nuget.org/v3/registration5-gz-semver1";

/// NuGet registration index adapter
pub struct NuGetAdapter {
    client: HttpClient,
    base_url: String,
}

/// Registration index document for one package
#[derive(Debug, Deserialize)]
struct RegistrationIndex {
    #[serde(default)]
    items: Vec<RegistrationPage>,
}

/// One page of the registration index
#[derive(Debug, Deserialize)]
struct RegistrationPage {
    #[serde(default)]
    items: Vec<RegistrationLeaf>,
}

/// One release entry within a page
#[derive(Debug, Deserialize)]
struct RegistrationLeaf {
    #[serde(rename = "catalogEntry")]
    catalog_entry: Option<CatalogEntry>,
}

/// Catalog metadata for one release
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    version: Option<String>,
}

impl NuGetAdapter {
    /// Create a new NuGet adapter against the public registry
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            base_url: NUGET_REGISTRATION_URL.to_string(),
        }
    }

    /// Create an adapter against a different registration endpoint (tests)
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the registration index URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}/index.json", self.base_url, package.to_lowercase())
    }
}

/// Flatten the page/leaf nesting of a registration index into one flat list
/// of raw version strings, in document order.
fn flatten_versions(index: RegistrationIndex) -> Vec<String> {
    index
        .items
        .into_iter()
        .flat_map(|page| page.items)
        .filter_map(|leaf| leaf.catalog_entry)
        .filter_map(|entry| entry.version)
        .collect()
}

#[async_trait]
impl RegistryAdapter for NuGetAdapter {
    fn registry_name(&self) -> &'static str {
        "NuGet"
    }

    async fn fetch_versions(&self, package: &str) -> Result<Vec<String>, RegistryError> {
        let url = self.build_url(package);
        let index: RegistrationIndex = self.client.get_json(&url, package).await?;
        Ok(flatten_versions(index))
    }
}
