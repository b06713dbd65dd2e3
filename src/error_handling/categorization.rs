//! Failure categorization for statistics.

use crate::fetch::FetchFailure;

use super::types::ErrorType;

/// Maps a classified failure onto its statistics bucket.
pub fn categorize_failure(failure: &FetchFailure) -> ErrorType {
    match failure {
        FetchFailure::Status { status, .. } => match status {
            429 => ErrorType::TooManyRequests,
            500 => ErrorType::InternalServerError,
            502 => ErrorType::BadGateway,
            503 => ErrorType::ServiceUnavailable,
            504 => ErrorType::GatewayTimeout,
            400..=499 => ErrorType::ClientError,
            _ => ErrorType::OtherStatusError,
        },
        FetchFailure::Transport { .. } => ErrorType::TransportError,
    }
}
