//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no listing logic.

pub mod tables;

pub use tables::{format_optional, render_resource_table, truncate_string};
