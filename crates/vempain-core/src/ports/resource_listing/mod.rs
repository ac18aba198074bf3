//! Resource listing port definitions.
//!
//! This module defines the port trait, error and request control types for
//! listing site resources. The HTTP implementation lives in `vempain-site`.

mod client;
mod control;
mod error;

pub use client::ResourceListingPort;
pub use control::RequestControl;
pub use error::{ListingError, ListingResult};
