//! Public configuration for the site resource client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

/// Default backend location.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Route of the resource listing, relative to the base URL.
pub const DEFAULT_RESOURCES_PATH: &str = "admin-management/site/resources";

/// Configuration for the site resource client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use vempain_site::SiteClientConfig;
/// use std::time::Duration;
///
/// let config = SiteClientConfig::new()
///     .with_base_url("https://admin.example.com")
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct SiteClientConfig {
    /// Base URL of the Vempain admin backend
    pub(crate) base_url: String,
    /// Path of the resource listing below the base URL
    pub(crate) resources_path: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Transport-level request timeout
    pub(crate) timeout: Duration,
    /// Optional bearer token
    pub(crate) token: Option<String>,
}

impl Default for SiteClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resources_path: DEFAULT_RESOURCES_PATH.to_string(),
            user_agent: concat!("vempain-site/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            token: None,
        }
    }
}

impl SiteClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the admin backend.
    ///
    /// Defaults to `http://localhost:8080`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the path of the resource listing below the base URL.
    ///
    /// Defaults to `admin-management/site/resources`.
    #[must_use]
    pub fn with_resources_path(mut self, path: impl Into<String>) -> Self {
        self.resources_path = path.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the transport timeout.
    ///
    /// Defaults to 30 seconds. A shorter per-call limit can be set with
    /// `RequestControl::with_timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a bearer token for the admin API.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional bearer token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}
