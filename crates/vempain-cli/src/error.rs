//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from listing and query errors to exit codes.

use thiserror::Error;
use vempain_core::{ListingError, QueryError};
use vempain_site::SiteError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Listing failed for a reason not covered below.
    #[error("{0}")]
    Core(String),

    /// Rejected command-line input.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The backend refused the credentials.
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    /// The backend could not be reached or timed out.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The user cancelled the request.
    #[error("Cancelled")]
    Cancelled,

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    /// - 130: Interrupted by Ctrl-C
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,
            Self::Unavailable(_) => 69,  // EX_UNAVAILABLE
            Self::Io(_) => 74,           // EX_IOERR
            Self::Unauthorized(_) => 77, // EX_NOPERM
            Self::Config(_) => 78,       // EX_CONFIG
            Self::Cancelled => 130,
        }
    }
}

impl From<QueryError> for CliError {
    fn from(err: QueryError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<ListingError> for CliError {
    fn from(err: ListingError) -> Self {
        match err {
            ListingError::Cancelled => Self::Cancelled,
            ListingError::Unauthorized => Self::Unauthorized(err.to_string()),
            ListingError::DeadlineExceeded | ListingError::Network { .. } => {
                Self::Unavailable(err.to_string())
            }
            ListingError::Configuration { message } => Self::Config(message),
            ListingError::RequestFailed { .. } | ListingError::InvalidResponse { .. } => {
                Self::Core(err.to_string())
            }
        }
    }
}

impl From<SiteError> for CliError {
    fn from(err: SiteError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.to_string())
    }
}
