//! API endpoint configuration.
//!
//! # Design
//! - The base URL is fixed at build time; there is no runtime override.
//! - Join base and path without doubling or dropping the separator.

/// Base URL of the backend the UI talks to.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Liveness probe path.
pub const HEALTH_PATH: &str = "/api/health";
/// Item listing path.
pub const DATA_PATH: &str = "/api/data";

/// Resolved endpoints for the API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme, host and optional port of the backend.
    pub base_url: String,
    /// Path of the health probe.
    pub health_path: String,
    /// Path of the item listing.
    pub data_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Build a config for `base_url` using the standard endpoint paths.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            health_path: HEALTH_PATH.to_string(),
            data_path: DATA_PATH.to_string(),
        }
    }

    /// Absolute URL of the health probe.
    #[must_use]
    pub fn health_url(&self) -> String {
        self.join(&self.health_path)
    }

    /// Absolute URL of the item listing.
    #[must_use]
    pub fn data_url(&self) -> String {
        self.join(&self.data_path)
    }

    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
