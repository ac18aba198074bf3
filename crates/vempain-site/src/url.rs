//! URL construction helpers for the site API.
//!
//! Pure functions, so every request URL is built the same way.

use url::Url;
use vempain_core::{ResourceQueryParams, build_resource_query};

use crate::error::SiteResult;
use crate::models::SiteConfig;

/// Join the backend base URL and the listing path.
///
/// Any path already on the base URL is kept, so the backend may live below
/// a prefix such as `https://example.com/vempain`.
pub fn build_endpoint_url(base_url: &str, resources_path: &str) -> SiteResult<Url> {
    let mut url = Url::parse(base_url)?;

    let base_path = url.path().trim_end_matches('/');
    let resources_path = resources_path.trim_matches('/');
    url.set_path(&format!("{base_path}/{resources_path}"));
    url.set_query(None);

    Ok(url)
}

/// Build the listing URL for one request.
///
/// The query is the canonical query string; no `?` is added for empty params.
pub fn build_resources_url(config: &SiteConfig, params: &ResourceQueryParams) -> Url {
    let mut url = config.resources_url.clone();
    let query = build_resource_query(params);

    if query.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&query));
    }

    url
}
