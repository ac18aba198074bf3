//! Resource listing port trait.

use async_trait::async_trait;
use serde_json::Value;

use super::control::RequestControl;
use super::error::ListingResult;
use crate::domain::{ResourcePage, ResourceQueryParams};

/// Port trait for listing site resources.
///
/// Each call is exactly one request/response round trip. There is no retry,
/// no automatic advance to further pages and no streaming.
///
/// # Design
///
/// - Params are serialized with `build_resource_query`
/// - `control` bounds the call with a cancellation token and an optional
///   deadline
/// - Transport failures are mapped to `ListingError`
#[async_trait]
pub trait ResourceListingPort: Send + Sync {
    /// List one page of resources.
    ///
    /// Items that fail strict decoding are dropped and logged; page metadata
    /// is returned as the backend sent it.
    async fn list_resources(
        &self,
        params: &ResourceQueryParams,
        control: &RequestControl,
    ) -> ListingResult<ResourcePage>;

    /// List one page of resources as untyped items.
    ///
    /// Only items that fail the shallow `is_resource_response` check are
    /// dropped.
    async fn list_resources_raw(
        &self,
        params: &ResourceQueryParams,
        control: &RequestControl,
    ) -> ListingResult<ResourcePage<Value>>;
}
