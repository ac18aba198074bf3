#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultSiteClient is meant to be used through ResourceListingPort, not
// through its generic backend parameter
#![allow(private_interfaces, private_bounds)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultSiteClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, DEFAULT_RESOURCES_PATH, SiteClientConfig};

// Errors raised while building a client
pub use error::{SiteError, SiteResult};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
