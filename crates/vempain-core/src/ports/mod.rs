//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the contract expects from infrastructure.
//! They contain no transport details and use only domain types.

pub mod resource_listing;

pub use resource_listing::{ListingError, ListingResult, RequestControl, ResourceListingPort};
