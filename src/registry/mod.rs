//! Registry access for fetching package version information
//!
//! This module provides:
//! - A shared HTTP client foundation
//! - The NuGet registration index adapter

mod client;
mod nuget;

pub use client::HttpClient;
pub use nuget::NuGetAdapter;

use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for package registries that can list released versions
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// Get the registry name for logs and error messages
    fn registry_name(&self) -> &'static str;

    /// Fetch the raw version strings of every release the registry knows
    /// for `package`. The strings are unvalidated; filtering is the
    /// resolver's job.
    async fn fetch_versions(&self, package: &str) -> Result<Vec<String>, RegistryError>;
}
