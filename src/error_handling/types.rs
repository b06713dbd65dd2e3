//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Categories of task failures, tallied for the end-of-run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// 429 Too Many Requests
    TooManyRequests,
    /// 500 Internal Server Error
    InternalServerError,
    /// 502 Bad Gateway
    BadGateway,
    /// 503 Service Unavailable
    ServiceUnavailable,
    /// 504 Gateway Timeout
    GatewayTimeout,
    /// Any other 4xx status
    ClientError,
    /// Any other unexpected status
    OtherStatusError,
    /// Connection errors, timeouts, undecodable responses
    TransportError,
}

impl ErrorType {
    /// Human-readable label used in the statistics printout.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::TooManyRequests => "Too many requests (429)",
            ErrorType::InternalServerError => "Internal Server Error (500)",
            ErrorType::BadGateway => "Bad Gateway (502)",
            ErrorType::ServiceUnavailable => "Service Unavailable (503)",
            ErrorType::GatewayTimeout => "Gateway Timeout (504)",
            ErrorType::ClientError => "Client error (other 4xx)",
            ErrorType::OtherStatusError => "Unexpected status",
            ErrorType::TransportError => "Transport error",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
