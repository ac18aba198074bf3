//! Query params from command-line filters.

use vempain_core::ResourceQueryParams;

use crate::commands::ResourceFilterArgs;
use crate::error::CliError;

/// Build query params from the filter flags.
///
/// Without `strict` every value is passed through as given, so the backend
/// decides what it accepts. With `strict` the documented constraints are
/// checked first.
pub fn build_params(
    filter: &ResourceFilterArgs,
    strict: bool,
) -> Result<ResourceQueryParams, CliError> {
    if strict {
        return build_strict(filter);
    }

    Ok(ResourceQueryParams {
        resource_type: filter.resource_type.clone(),
        file_type: filter.file_type.clone(),
        query: filter.query.clone(),
        acl_id: filter.acl_id,
        sort: filter.sort.clone(),
        direction: filter.direction.clone(),
        page: filter.page,
        size: filter.size,
    })
}

fn build_strict(filter: &ResourceFilterArgs) -> Result<ResourceQueryParams, CliError> {
    let mut builder = ResourceQueryParams::strict();

    if let Some(ref name) = filter.resource_type {
        builder = builder.type_name(name);
    }
    if let Some(ref file_type) = filter.file_type {
        builder = builder.file_type(file_type.as_str());
    }
    if let Some(ref query) = filter.query {
        builder = builder.query(query.as_str());
    }
    if let Some(acl_id) = filter.acl_id {
        builder = builder.acl_id(acl_id);
    }
    if let Some(ref sort) = filter.sort {
        builder = builder.sort_name(sort);
    }
    if let Some(ref direction) = filter.direction {
        builder = builder.direction_name(direction);
    }
    if let Some(page) = filter.page {
        builder = builder.page(page);
    }
    if let Some(size) = filter.size {
        builder = builder.size(size);
    }

    Ok(builder.build()?)
}
