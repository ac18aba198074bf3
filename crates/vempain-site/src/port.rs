//! Port trait implementation for `SiteClient`.
//!
//! This module implements the core-owned `ResourceListingPort` trait for
//! `SiteClient`, mapping internal errors to `ListingError` and vetting the
//! items of each page.

use async_trait::async_trait;
use serde_json::Value;
use vempain_core::{
    ListingError, ListingResult, RequestControl, ResourceListingPort, ResourcePage,
    ResourceQueryParams,
};

use crate::client::SiteClient;
use crate::error::SiteError;
use crate::http::HttpBackend;
use crate::parsing::{shallow_items, typed_items};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `SiteError` to core `ListingError`.
fn map_error(err: SiteError) -> ListingError {
    match err {
        SiteError::ApiRequestFailed { status, .. } => {
            if status == 401 || status == 403 {
                ListingError::Unauthorized
            } else {
                ListingError::RequestFailed { status }
            }
        }
        SiteError::InvalidResponse { message } => ListingError::InvalidResponse { message },
        SiteError::Network(e) => ListingError::Network {
            message: e.to_string(),
        },
        SiteError::InvalidUrl(e) => ListingError::Configuration {
            message: e.to_string(),
        },
        SiteError::JsonParse(e) => ListingError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ResourceListingPort for SiteClient<B> {
    async fn list_resources(
        &self,
        params: &ResourceQueryParams,
        control: &RequestControl,
    ) -> ListingResult<ResourcePage> {
        let page = control
            .run(async { self.fetch_resource_page(params).await.map_err(map_error) })
            .await?;

        Ok(typed_items(page))
    }

    async fn list_resources_raw(
        &self,
        params: &ResourceQueryParams,
        control: &RequestControl,
    ) -> ListingResult<ResourcePage<Value>> {
        let page = control
            .run(async { self.fetch_resource_page(params).await.map_err(map_error) })
            .await?;

        Ok(shallow_items(page))
    }
}
