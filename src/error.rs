//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: project file reading and parsing; fatal to the run
//! - RegistryError: NuGet registry communication; local to one package
//! - ResolveError: the declared version cannot be compared; local to one package

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Project file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Version resolution related errors
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Errors related to the project manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read the project file
    #[error("failed to read project file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a recognized project manifest
    #[error("unsupported project file type: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// The file looked like a .csproj but its XML is unparsable
    #[error("failed to parse project XML in {path}: {message}")]
    XmlParse { path: PathBuf, message: String },

    /// In-place rewrite of the project file is not supported
    #[error("applying updates to the project file is not implemented")]
    RewriteUnsupported,
}

/// Errors related to NuGet registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in the registry
    #[error("package '{package}' not found in the NuGet registry")]
    PackageNotFound { package: String },

    /// Network request failed
    #[error("failed to fetch package '{package}': {message}")]
    Network { package: String, message: String },

    /// Registry answered with a non-success status
    #[error("registry returned HTTP {status} for package '{package}'")]
    Http { package: String, status: u16 },

    /// Response body could not be used
    #[error("invalid registry response for '{package}': {message}")]
    InvalidResponse { package: String, message: String },

    /// Request timed out
    #[error("timeout while fetching package '{package}'")]
    Timeout { package: String },
}

/// Errors related to version resolution
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The declared version does not parse as a semantic version
    #[error("invalid current version '{version}': {message}")]
    InvalidCurrentVersion { version: String, message: String },
}

impl ManifestError {
    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new UnsupportedFormat error
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        ManifestError::UnsupportedFormat { path: path.into() }
    }

    /// Creates a new XmlParse error
    pub fn xml_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::XmlParse {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
        }
    }

    /// Creates a new Network error
    pub fn network(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Network {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
        }
    }
}

impl ResolveError {
    /// Creates a new InvalidCurrentVersion error
    pub fn invalid_current_version(
        version: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ResolveError::InvalidCurrentVersion {
            version: version.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ManifestError::read("/path/to/app.csproj", io_err);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read project file"));
        assert!(msg.contains("app.csproj"));
    }

    #[test]
    fn test_manifest_error_unsupported_format() {
        let err = ManifestError::unsupported_format("/path/to/package.json");
        let msg = format!("{}", err);
        assert!(msg.contains("unsupported project file type"));
        assert!(msg.contains("package.json"));
    }

    #[test]
    fn test_manifest_error_xml_parse() {
        let err = ManifestError::xml_parse("/path/to/app.csproj", "unexpected end of document");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse project XML"));
        assert!(msg.contains("unexpected end of document"));
    }

    #[test]
    fn test_manifest_error_rewrite_unsupported() {
        let msg = format!("{}", ManifestError::RewriteUnsupported);
        assert!(msg.contains("not implemented"));
    }

    #[test]
    fn test_registry_error_package_not_found() {
        let err = RegistryError::package_not_found("Nonexistent.Package");
        let msg = format!("{}", err);
        assert!(msg.contains("package 'Nonexistent.Package' not found"));
    }

    #[test]
    fn test_registry_error_network() {
        let err = RegistryError::network("Serilog", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to fetch"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_registry_error_http_status() {
        let err = RegistryError::Http {
            package: "Serilog".to_string(),
            status: 503,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("HTTP 503"));
    }

    #[test]
    fn test_registry_error_timeout() {
        let err = RegistryError::timeout("Newtonsoft.Json");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("Newtonsoft.Json"));
    }

    #[test]
    fn test_resolve_error_invalid_current_version() {
        let err = ResolveError::invalid_current_version("abc", "unexpected character");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid current version 'abc'"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let err: AppError = ManifestError::unsupported_format("/p").into();
        assert!(format!("{}", err).contains("unsupported project file type"));
    }

    #[test]
    fn test_app_error_from_registry_error() {
        let err: AppError = RegistryError::package_not_found("Pkg").into();
        assert!(format!("{}", err).contains("not found"));
    }

    #[test]
    fn test_app_error_from_resolve_error() {
        let err: AppError = ResolveError::invalid_current_version("x", "bad").into();
        assert!(format!("{}", err).contains("invalid current version"));
    }
}
