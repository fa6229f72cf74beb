//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when talking to the order API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure: host unreachable, DNS, CORS.
    #[error("Request failed: {0}")]
    Network(String),

    /// No response arrived within the caller's deadline.
    #[error("Request timed out")]
    Timeout,

    /// HTTP error response.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// JSON serialization error while building the request.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
