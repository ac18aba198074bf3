//! Resources command handler.
//!
//! Sends one listing request and prints the page as a table or JSON.

use std::time::Duration;

use anyhow::Result;
use tracing::debug;
use vempain_core::{CancellationToken, RequestControl, ResourceListingPort, ResourcePage};

use crate::commands::ResourceFilterArgs;
use crate::error::CliError;
use crate::handlers::params::build_params;
use crate::presentation::render_resource_table;

/// Arguments for the resources command.
#[derive(Debug, Clone, Default)]
pub struct ResourcesArgs {
    pub filter: ResourceFilterArgs,
    pub strict: bool,
    pub json: bool,
    /// Per-request deadline in seconds
    pub timeout: Option<u64>,
}

/// Execute the resources command.
///
/// # Errors
///
/// Returns a [`CliError`] (wrapped in `anyhow`) when the filters are rejected
/// in strict mode, the listing fails, or it is cancelled via `cancel`.
pub async fn execute(
    port: &dyn ResourceListingPort,
    args: &ResourcesArgs,
    cancel: CancellationToken,
) -> Result<()> {
    let page = fetch(port, args, cancel).await?;
    println!("{}", render(&page, args.json)?);
    Ok(())
}

/// Fetch one page for the given arguments.
pub async fn fetch(
    port: &dyn ResourceListingPort,
    args: &ResourcesArgs,
    cancel: CancellationToken,
) -> Result<ResourcePage, CliError> {
    let params = build_params(&args.filter, args.strict)?;

    let mut control = RequestControl::none().with_cancellation(cancel);
    if let Some(secs) = args.timeout {
        control = control.with_timeout(Duration::from_secs(secs));
    }

    debug!(query = %params, strict = args.strict, "Listing site resources");
    Ok(port.list_resources(&params, &control).await?)
}

/// Format a page for the terminal.
pub fn render(page: &ResourcePage, json: bool) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string_pretty(page)?)
    } else if page.is_empty() {
        Ok(format!(
            "No resources found (page {}, {} total).",
            page.page_number, page.total_elements
        ))
    } else {
        Ok(render_resource_table(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::always;
    use serde_json::Value;
    use vempain_core::{
        ListingError, ListingResult, ResourceQueryParams, ResourceResponse, ResourceVariant,
    };

    mock! {
        pub Listing {}

        #[async_trait]
        impl ResourceListingPort for Listing {
            async fn list_resources(
                &self,
                params: &ResourceQueryParams,
                control: &RequestControl,
            ) -> ListingResult<ResourcePage>;

            async fn list_resources_raw(
                &self,
                params: &ResourceQueryParams,
                control: &RequestControl,
            ) -> ListingResult<ResourcePage<Value>>;
        }
    }

    fn one_page() -> ResourcePage {
        ResourcePage {
            page_number: 0,
            page_size: 10,
            total_pages: 1,
            total_elements: 1,
            items: vec![ResourceResponse {
                resource_type: ResourceVariant::Page,
                resource_id: 5,
                name: "Index".to_string(),
                path: Some("index".to_string()),
                acl_id: 1,
                file_type: None,
            }],
        }
    }

    #[tokio::test]
    async fn test_fetch_passes_params_and_timeout() {
        let mut port = MockListing::new();
        port.expect_list_resources()
            .withf(|params, control| {
                params.resource_type.as_deref() == Some("PAGE")
                    && params.size == Some(10)
                    && control.timeout() == Some(Duration::from_secs(3))
            })
            .times(1)
            .returning(|_, _| Ok(one_page()));

        let args = ResourcesArgs {
            filter: ResourceFilterArgs {
                resource_type: Some("PAGE".to_string()),
                size: Some(10),
                ..Default::default()
            },
            timeout: Some(3),
            ..Default::default()
        };

        let page = fetch(&port, &args, CancellationToken::new()).await.unwrap();
        assert_eq!(page.len(), 1);
    }

    #[tokio::test]
    async fn test_strict_error_skips_request() {
        let mut port = MockListing::new();
        port.expect_list_resources().never();

        let args = ResourcesArgs {
            filter: ResourceFilterArgs {
                sort: Some("popularity".to_string()),
                ..Default::default()
            },
            strict: true,
            ..Default::default()
        };

        let err = fetch(&port, &args, CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn test_control_carries_cancellation() {
        let mut port = MockListing::new();
        port.expect_list_resources()
            .with(always(), always())
            .returning(|_, control| {
                if control.is_cancelled() {
                    Err(ListingError::Cancelled)
                } else {
                    Ok(one_page())
                }
            });

        let token = CancellationToken::new();
        token.cancel();
        let err = fetch(&port, &ResourcesArgs::default(), token)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Cancelled));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_exit_code() {
        let mut port = MockListing::new();
        port.expect_list_resources()
            .returning(|_, _| Err(ListingError::Unauthorized));

        let err = fetch(&port, &ResourcesArgs::default(), CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 77);
    }

    #[test]
    fn test_render_json() {
        let out = render(&one_page(), true).unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["items"][0]["resource_type"], "PAGE");
        assert!(json["items"][0].get("file_type").is_none());
    }

    #[test]
    fn test_render_empty_page() {
        let page = ResourcePage {
            items: Vec::new(),
            total_elements: 40,
            page_number: 9,
            ..one_page()
        };
        assert_eq!(
            render(&page, false).unwrap(),
            "No resources found (page 9, 40 total)."
        );
    }

    #[test]
    fn test_render_table() {
        let out = render(&one_page(), false).unwrap();
        assert!(out.contains("Index"));
        assert!(out.ends_with("(1 shown, 1 total)"));
    }
}
