//! Query command handler.
//!
//! Prints the query string a listing would send. No network access.

use anyhow::Result;
use vempain_core::build_resource_query;

use crate::commands::ResourceFilterArgs;
use crate::error::CliError;
use crate::handlers::params::build_params;

/// Execute the query command.
pub fn execute(filter: &ResourceFilterArgs, strict: bool) -> Result<()> {
    println!("{}", render(filter, strict)?);
    Ok(())
}

/// The query string for the given filters, possibly empty.
pub fn render(filter: &ResourceFilterArgs, strict: bool) -> Result<String, CliError> {
    let params = build_params(filter, strict)?;
    Ok(build_resource_query(&params))
}
