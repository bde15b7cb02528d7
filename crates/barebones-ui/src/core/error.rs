//! Failure classification for API calls.

use thiserror::Error;

/// Error surfaced by the API client.
///
/// Callers collapse every variant except [`ApiError::Aborted`] into a single
/// user-facing failure; the variants exist for console diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network error, CORS, timeout).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("unexpected http status {0}")]
    Status(u16),
    /// The body was not the expected JSON shape.
    #[error("response body could not be decoded: {0}")]
    Decode(String),
    /// The request was cancelled because its owner was torn down.
    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    /// Whether the failure came from cancellation rather than the backend.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// Accept 2xx statuses and reject everything else.
///
/// # Errors
///
/// Returns [`ApiError::Status`] when `status` is outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_accepted() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert_eq!(check_status(500), Err(ApiError::Status(500)));
        assert_eq!(check_status(304), Err(ApiError::Status(304)));
        assert_eq!(check_status(199), Err(ApiError::Status(199)));
    }

    #[test]
    fn only_cancellation_counts_as_aborted() {
        assert!(ApiError::Aborted.is_aborted());
        assert!(!ApiError::Transport("refused".into()).is_aborted());
        assert_eq!(
            ApiError::Status(503).to_string(),
            "unexpected http status 503"
        );
    }
}
