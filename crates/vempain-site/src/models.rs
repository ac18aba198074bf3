//! Internal types for the site client.
//!
//! These types are internal to `vempain-site`. External consumers configure
//! the client through `SiteClientConfig` and receive core DTOs.

use std::time::Duration;

use url::Url;

use crate::config::SiteClientConfig;
use crate::error::SiteResult;
use crate::url::build_endpoint_url;

/// Internal configuration for the site client, with URLs already parsed.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Full URL of the resource listing, without a query
    pub resources_url: Url,
    /// Optional bearer token
    pub token: Option<String>,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Transport-level request timeout
    pub timeout: Duration,
}

impl SiteConfig {
    /// Derive the internal config, rejecting an unparseable base URL.
    pub fn from_public(config: &SiteClientConfig) -> SiteResult<Self> {
        Ok(Self {
            resources_url: build_endpoint_url(&config.base_url, &config.resources_path)?,
            token: config.token.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        })
    }
}
