//! Update check workflow
//!
//! Reads the project manifest, then walks the declared packages in
//! declaration order: fetch known versions from the registry, resolve the
//! best admissible update, collect a decision when one exists. Fetch
//! failures and unparsable declared versions are local to one package and
//! logged; only manifest-level failures abort the run.

use crate::domain::{PackageReference, PackageUpdate, UpdatePolicy};
use crate::error::AppError;
use crate::manifest;
use crate::progress::Progress;
use crate::registry::{HttpClient, NuGetAdapter, RegistryAdapter};
use crate::resolve::Resolver;
use std::path::Path;
use tracing::{debug, warn};

/// Orchestrator for the update check workflow
pub struct Orchestrator {
    resolver: Resolver,
    adapter: Box<dyn RegistryAdapter>,
}

/// Outcome of one run over a project file
#[derive(Debug)]
pub struct CheckReport {
    /// Update decisions, in declaration order
    pub updates: Vec<PackageUpdate>,
    /// Number of packages declared in the manifest
    pub checked: usize,
    /// Packages skipped because of a fetch failure or an unparsable
    /// declared version
    pub skipped: usize,
}

impl Orchestrator {
    /// Create an orchestrator against the public NuGet registry
    pub fn new(policy: UpdatePolicy) -> Result<Self, AppError> {
        let client = HttpClient::new()?;
        Ok(Self::with_adapter(policy, Box::new(NuGetAdapter::new(client))))
    }

    /// Create an orchestrator over a specific registry adapter
    pub fn with_adapter(policy: UpdatePolicy, adapter: Box<dyn RegistryAdapter>) -> Self {
        Self {
            resolver: Resolver::new(policy),
            adapter,
        }
    }

    /// Check every package declared in the project file at `path`.
    ///
    /// Manifest errors are fatal; everything past the manifest read cannot
    /// fail the run.
    pub async fn check_project(
        &self,
        path: &Path,
        show_progress: bool,
    ) -> Result<CheckReport, AppError> {
        let packages = manifest::read_packages(path)?;
        debug!(
            path = %path.display(),
            packages = packages.len(),
            policy = %self.resolver.policy(),
            "parsed project file"
        );
        Ok(self.check_packages(&packages, show_progress).await)
    }

    /// Check an already-parsed package list, one package at a time in
    /// declaration order.
    pub async fn check_packages(
        &self,
        packages: &[PackageReference],
        show_progress: bool,
    ) -> CheckReport {
        let mut progress = Progress::new(show_progress);
        progress.start(packages.len() as u64, "Checking packages");

        let mut updates = Vec::new();
        let mut skipped = 0usize;

        for package in packages {
            progress.set_message(&package.name);

            let candidates = match self.adapter.fetch_versions(&package.name).await {
                Ok(versions) => versions,
                Err(e) => {
                    warn!(
                        package = %package.name,
                        registry = self.adapter.registry_name(),
                        error = %e,
                        "failed to fetch package versions"
                    );
                    skipped += 1;
                    progress.inc();
                    continue;
                }
            };

            let resolved = match self.resolver.resolve(&package.version, &candidates) {
                Ok(resolved) => resolved,
                Err(e) => {
                    warn!(package = %package.name, error = %e, "skipping package");
                    skipped += 1;
                    progress.inc();
                    continue;
                }
            };

            if let Some(new_version) = resolved {
                let new_version = new_version.to_string();
                if new_version != package.version {
                    updates.push(PackageUpdate::new(
                        &package.name,
                        &package.version,
                        new_version,
                    ));
                }
            }
            progress.inc();
        }

        progress.finish_and_clear();

        CheckReport {
            updates,
            checked: packages.len(),
            skipped,
        }
    }
}
