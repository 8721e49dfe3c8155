//! Failure taxonomy for single-shot fetches.
//!
//! A missing fragment inside a fetched document is not an error; only the
//! transport and decoding steps can fail.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a fetch produced no usable payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request was rejected before a response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The body could not be decoded as JSON or HTML.
    #[error("parse error: {0}")]
    Parse(String),
    /// Browser-only call issued during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl FetchError {
    /// Classify an HTTP status; `None` for 2xx.
    pub fn from_status(status: u16) -> Option<Self> {
        if (200..300).contains(&status) { None } else { Some(Self::Status(status)) }
    }

    /// Transport-level failures (rejected or non-success) as opposed to decode failures.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status(_))
    }
}
