//! Version resolution engine
//!
//! Given a package's declared version and the flat list of release versions
//! known to the registry, decide whether a newer version exists that the
//! selected update policy admits, and if so which one. This is a pure
//! reduction over the candidate list: filter, then take the maximum. No
//! best-so-far accumulator, no shared state.

use crate::domain::UpdatePolicy;
use crate::error::ResolveError;
use semver::Version;

/// Pure version resolver for a single package
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    policy: UpdatePolicy,
}

impl Resolver {
    /// Create a resolver for the given update policy
    pub fn new(policy: UpdatePolicy) -> Self {
        Self { policy }
    }

    /// Returns the configured policy
    pub fn policy(&self) -> UpdatePolicy {
        self.policy
    }

    /// Resolve the best admissible update for `current` among `candidates`.
    ///
    /// The declared version must parse as semver; otherwise the package
    /// cannot be compared at all and the caller is expected to skip it.
    /// Candidates that do not parse, or that carry a prerelease label, are
    /// dropped silently. A candidate is admissible when it is strictly
    /// greater than `current` and stays within the policy's version line.
    ///
    /// Returns `None` when no admissible candidate exists.
    pub fn resolve(
        &self,
        current: &str,
        candidates: &[String],
    ) -> Result<Option<Version>, ResolveError> {
        let current = Version::parse(current.trim())
            .map_err(|e| ResolveError::invalid_current_version(current, e.to_string()))?;

        Ok(candidates
            .iter()
            .filter_map(|raw| Version::parse(raw.trim()).ok())
            .filter(|candidate| candidate.pre.is_empty())
            .filter(|candidate| *candidate > current)
            .filter(|candidate| self.policy.admits(&current, candidate))
            .max())
    }
}
