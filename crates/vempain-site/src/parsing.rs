//! Parsing of resource listing responses.
//!
//! Sync functions that turn the decoded JSON body into core pages. The page
//! envelope must be well formed; items are vetted one by one and bad items
//! are dropped with a warning.

use serde_json::Value;
use tracing::warn;
use vempain_core::{ResourcePage, decode_resource, vet_items};

use crate::error::{SiteError, SiteResult};

/// Parse the page envelope, leaving items untyped.
pub fn parse_page_envelope(json: Value) -> SiteResult<ResourcePage<Value>> {
    if !json.is_object() {
        return Err(SiteError::InvalidResponse {
            message: "Expected object for resource page".to_string(),
        });
    }

    serde_json::from_value(json).map_err(|e| SiteError::InvalidResponse {
        message: format!("Malformed resource page: {e}"),
    })
}

/// Keep the items that pass the shallow resource check.
pub fn shallow_items(page: ResourcePage<Value>) -> ResourcePage<Value> {
    let ResourcePage {
        page_number,
        page_size,
        total_pages,
        total_elements,
        items,
    } = page;

    let vetted = vet_items(items);
    if vetted.rejected > 0 {
        warn!(
            page_number,
            rejected = vetted.rejected,
            "Dropping items that are not resource responses"
        );
    }

    ResourcePage {
        page_number,
        page_size,
        total_pages,
        total_elements,
        items: vetted.accepted,
    }
}

/// Decode every item strictly, dropping the ones that fail.
pub fn typed_items(page: ResourcePage<Value>) -> ResourcePage {
    let page_number = page.page_number;

    page.filter_map_items(|item| match decode_resource(&item) {
        Ok(resource) => Some(resource),
        Err(reason) => {
            let resource_id = item.get("resource_id").cloned().unwrap_or_default();
            warn!(
                page_number,
                %resource_id,
                %reason,
                "Skipping malformed resource item"
            );
            None
        }
    })
}
