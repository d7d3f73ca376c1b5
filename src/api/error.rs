// Failure taxonomy for catalog requests. These never reach the UI: the public
// client methods log them and fall back to an empty or neutral value.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent, or timed out.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// Body was not JSON, or lacked the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("not found")]
    NotFound,

    /// Blank search input. A no-op, not a failure.
    #[error("empty search query")]
    EmptyQuery,
}

impl CatalogError {
    /// Whether this outcome should be reported to the log as a failure.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::EmptyQuery)
    }
}
