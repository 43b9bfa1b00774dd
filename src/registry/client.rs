//! HTTP client shared foundation
//!
//! Thin reqwest wrapper with a fixed timeout and User-Agent. Every request
//! is attempted exactly once; a failed fetch is final for that package in
//! that run and must not hold up the rest of the loop.

use crate::error::RegistryError;
use reqwest::Client;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("nugbot/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                RegistryError::network("", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request and deserialize the JSON response body.
    ///
    /// Status mapping: 404 becomes `PackageNotFound`, any other non-success
    /// status becomes `Http`, connection timeouts become `Timeout`, and an
    /// unparsable body becomes `InvalidResponse`.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
    ) -> Result<T, RegistryError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(package)
            } else {
                RegistryError::network(package, e.to_string())
            }
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::package_not_found(package));
        }

        if !response.status().is_success() {
            return Err(RegistryError::Http {
                package: package.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            RegistryError::invalid_response(package, format!("failed to parse JSON: {}", e))
        })
    }
}
