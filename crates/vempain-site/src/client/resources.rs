//! Resource listing requests.

use serde_json::Value;
use tracing::debug;
use vempain_core::{ResourcePage, ResourceQueryParams};

use crate::error::SiteResult;
use crate::http::HttpBackend;
use crate::parsing::parse_page_envelope;
use crate::url::build_resources_url;

use super::SiteClient;

impl<B: HttpBackend> SiteClient<B> {
    /// Fetch one page of resources with the items left untyped.
    ///
    /// Exactly one request is made; item vetting is left to the caller.
    pub(crate) async fn fetch_resource_page(
        &self,
        params: &ResourceQueryParams,
    ) -> SiteResult<ResourcePage<Value>> {
        let url = build_resources_url(&self.config, params);
        let json: Value = self.backend.get_json(&url).await?;
        let page = parse_page_envelope(json)?;

        debug!(
            page_number = page.page_number,
            items = page.items.len(),
            total_elements = page.total_elements,
            "Fetched resource page"
        );
        Ok(page)
    }
}
