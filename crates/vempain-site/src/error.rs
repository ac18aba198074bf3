//! Internal error types for site client operations.
//!
//! These errors are internal to `vempain-site` and are mapped to
//! `ListingError` at the port boundary.

use thiserror::Error;

/// Result type alias for site client operations.
pub type SiteResult<T> = Result<T, SiteError>;

/// Errors related to site API operations.
#[derive(Debug, Error)]
pub enum SiteError {
    /// API request failed with an HTTP error status.
    #[error("Site API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from site API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
