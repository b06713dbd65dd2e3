//! Failure classification for API calls.

use thiserror::Error;

use crate::config::TRANSIENT_STATUS_CODES;

/// A failed API call, classified for retry purposes.
///
/// HTTP-level failures carry the status code; everything below HTTP
/// (connection errors, timeouts, undecodable bodies) is a transport failure.
/// Only rate limiting and the retryable 5xx statuses are transient; transport
/// failures are never retried even though a connection reset is arguably as
/// temporary as a 503 — changing that is a product decision, and the
/// classification lives in [`FetchFailure::is_transient`] alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// The API answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code returned by the endpoint
        status: u16,
        /// Human-readable description of the failure
        message: String,
    },

    /// The request never produced an HTTP response.
    #[error("Request failed: {message}")]
    Transport {
        /// Human-readable description of the failure
        message: String,
    },
}

impl FetchFailure {
    /// The HTTP status code, when the failure reached the HTTP layer.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchFailure::Status { status, .. } => Some(*status),
            FetchFailure::Transport { .. } => None,
        }
    }

    /// Whether a retry with backoff is expected to help.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchFailure::Status { status, .. } => TRANSIENT_STATUS_CODES.contains(status),
            FetchFailure::Transport { .. } => false,
        }
    }
}

impl From<reqwest::Error> for FetchFailure {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchFailure::Status {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => FetchFailure::Transport {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_failure(status: u16) -> FetchFailure {
        FetchFailure::Status {
            status,
            message: format!("status {status}"),
        }
    }

    #[test]
    fn test_transient_statuses() {
        for status in [429, 500, 502, 503, 504] {
            assert!(
                status_failure(status).is_transient(),
                "{status} should be transient"
            );
        }
    }

    #[test]
    fn test_permanent_statuses() {
        for status in [400, 401, 403, 404, 418, 501, 505] {
            assert!(
                !status_failure(status).is_transient(),
                "{status} should be permanent"
            );
        }
    }

    #[test]
    fn test_transport_is_never_transient() {
        let failure = FetchFailure::Transport {
            message: "connection reset by peer".into(),
        };
        assert!(!failure.is_transient());
        assert_eq!(failure.status(), None);
    }

    #[test]
    fn test_display_formats() {
        let failure = status_failure(503);
        assert_eq!(failure.to_string(), "HTTP 503: status 503");

        let failure = FetchFailure::Transport {
            message: "timed out".into(),
        };
        assert_eq!(failure.to_string(), "Request failed: timed out");
    }
}
