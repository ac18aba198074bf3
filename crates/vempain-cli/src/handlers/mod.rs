//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Turn CLI arguments into query params
//! 2. Call the listing port
//! 3. Format output for the terminal

pub mod params;
pub mod query;
pub mod resources;
