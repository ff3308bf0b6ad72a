//! Error types for the 1secmail client.

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for all 1secmail client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The base URL or proxy URL could not be parsed.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// Transport failure: connect, DNS, TLS, or reading the body.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The service answered with something other than `200 OK`.
    #[error("unexpected HTTP status: {0}")]
    Status(StatusCode),
    /// The response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),
    /// A mailbox address did not contain exactly one `@`.
    #[error("invalid address: {0:?}")]
    InvalidAddress(String),
    /// The mailbox generator returned no addresses.
    #[error("service returned no addresses")]
    EmptyResponse,
    /// Writing attachment bytes to a caller-supplied writer failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status of the failed response, if the failure was a status error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status(status) => Some(*status),
            Error::Request(err) => err.status(),
            _ => None,
        }
    }
}
