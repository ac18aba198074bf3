//! Domain types for the resource listing contract.

mod page;
mod query;
mod resource;

pub use page::ResourcePage;
pub use query::{
    DEFAULT_DIRECTION, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT, MAX_PAGE_SIZE, QueryError,
    ResourceQueryParams, SortDirection, SortField, StrictQueryBuilder,
};
pub use resource::{Resource, ResourceResponse, ResourceVariant};
