//! Health indicator derived from the liveness probe.
//!
//! # Design
//! - Probe failures only change the indicator; they never reach the error banner.
//! - Keep the indicator a value type so the badge renders from store state alone.

use crate::core::error::ApiError;
use crate::core::text::{HEALTH_CHECKING, HEALTH_OK_MARKER, HEALTH_UNAVAILABLE};
use barebones_api_models::HealthResponse;

/// Display state of the API status badge.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum HealthIndicator {
    /// Probe not resolved yet.
    #[default]
    Checking,
    /// Backend answered the probe.
    Healthy {
        /// Status string reported by the backend.
        status: String,
        /// Service name, when reported.
        service: Option<String>,
    },
    /// Probe failed for any reason.
    Unavailable,
}

impl HealthIndicator {
    /// Collapse a probe result into an indicator.
    #[must_use]
    pub fn from_probe(result: Result<HealthResponse, ApiError>) -> Self {
        match result {
            Ok(health) => Self::Healthy {
                status: health.status,
                service: health.service,
            },
            Err(_) => Self::Unavailable,
        }
    }

    /// Text shown in the badge.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Checking => HEALTH_CHECKING.to_string(),
            Self::Healthy { status, .. } => format!("{HEALTH_OK_MARKER} {status}"),
            Self::Unavailable => HEALTH_UNAVAILABLE.to_string(),
        }
    }

    /// Tone class for the badge.
    #[must_use]
    pub const fn tone(&self) -> &'static str {
        match self {
            Self::Checking => "pending",
            Self::Healthy { .. } => "ok",
            Self::Unavailable => "error",
        }
    }

    /// Service name for the badge tooltip.
    #[must_use]
    pub fn service(&self) -> Option<&str> {
        match self {
            Self::Healthy { service, .. } => service.as_deref(),
            Self::Checking | Self::Unavailable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(status: &str) -> HealthResponse {
        HealthResponse {
            status: status.to_string(),
            service: None,
        }
    }

    #[test]
    fn starts_in_checking_state() {
        let indicator = HealthIndicator::default();
        assert_eq!(indicator.label(), "checking...");
        assert_eq!(indicator.tone(), "pending");
    }

    #[test]
    fn healthy_label_carries_reported_status() {
        for status in ["ok", "healthy", "degraded but alive", ""] {
            let label = HealthIndicator::from_probe(Ok(probe(status))).label();
            assert_eq!(label, format!("✅ {status}"));
        }
    }

    #[test]
    fn every_failure_reads_unavailable() {
        let failures = [
            ApiError::Transport("timed out".into()),
            ApiError::Status(500),
            ApiError::Decode("expected `status`".into()),
        ];
        for err in failures {
            let indicator = HealthIndicator::from_probe(Err(err));
            assert_eq!(indicator, HealthIndicator::Unavailable);
            assert_eq!(indicator.label(), "❌ API not available");
            assert_eq!(indicator.tone(), "error");
        }
    }

    #[test]
    fn service_name_is_exposed_when_reported() {
        let indicator = HealthIndicator::from_probe(Ok(HealthResponse {
            status: "healthy".into(),
            service: Some("barebones-api".into()),
        }));
        assert_eq!(indicator.service(), Some("barebones-api"));
        assert_eq!(HealthIndicator::Unavailable.service(), None);
    }
}
