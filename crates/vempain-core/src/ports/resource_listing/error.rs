//! Error types for resource listing operations.

use thiserror::Error;

/// Errors from a resource listing call.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The caller cancelled the request.
    #[error("Request cancelled")]
    Cancelled,

    /// The request did not finish before its deadline.
    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    /// The backend rejected the credentials.
    #[error("Not authorized to list site resources")]
    Unauthorized,

    /// The backend answered with a non-success status.
    #[error("Resource listing failed with status {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The response body is not a resource page.
    #[error("Invalid listing response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Client configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for resource listing operations.
pub type ListingResult<T> = Result<T, ListingError>;
