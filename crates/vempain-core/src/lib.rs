#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod query_string;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    DEFAULT_DIRECTION, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT, MAX_PAGE_SIZE, QueryError,
    Resource, ResourcePage, ResourceQueryParams, ResourceResponse, ResourceVariant, SortDirection,
    SortField, StrictQueryBuilder,
};
pub use ports::{ListingError, ListingResult, RequestControl, ResourceListingPort};
pub use query_string::build_resource_query;
pub use validation::{
    DecodeError, VettedItems, decode_resource, decode_typed_resource, is_resource_response,
    vet_items,
};

// Re-exported so callers can build a `RequestControl` without naming tokio-util
pub use tokio_util::sync::CancellationToken;
