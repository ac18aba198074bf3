//! Site client for the resource listing.
//!
//! This module provides the main client interface for talking to the
//! Vempain admin backend.

mod resources;

use crate::config::SiteClientConfig;
use crate::error::SiteResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::SiteConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default site client using the reqwest HTTP backend.
pub type DefaultSiteClient = SiteClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Vempain site resource listing.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultSiteClient` for production code; the listing itself is
/// reached through the `ResourceListingPort` trait.
pub struct SiteClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: SiteConfig,
}

impl DefaultSiteClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// built.
    pub fn new(config: &SiteClientConfig) -> SiteResult<Self> {
        let internal_config = SiteConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    /// Create a new client against the default local backend.
    pub fn default_client() -> SiteResult<Self> {
        Self::new(&SiteClientConfig::default())
    }
}

impl<B: HttpBackend> SiteClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: SiteConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Full URL of the listing endpoint, without a query.
    pub fn resources_url(&self) -> &str {
        self.config.resources_url.as_str()
    }
}
