//! Table formatting utilities for CLI output.

use std::fmt::Write as _;

use vempain_core::ResourcePage;

/// Truncates a string to at most `max_len` characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use vempain_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<&T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), ToString::to_string)
}

const TABLE_WIDTH: usize = 100;

/// Render a page of resources as a table followed by a summary line.
pub fn render_resource_table(page: &ResourcePage) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<8} {:<10} {:<6} {:<30} {:<30} FILE TYPE",
        "ID", "TYPE", "ACL", "NAME", "PATH"
    );
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));

    for item in &page.items {
        let _ = writeln!(
            out,
            "{:<8} {:<10} {:<6} {:<30} {:<30} {}",
            item.resource_id,
            item.resource_type.as_str(),
            item.acl_id,
            truncate_string(&item.name, 29),
            truncate_string(&format_optional(item.path.as_ref(), "--"), 29),
            format_optional(item.file_type.as_ref(), "--"),
        );
    }

    let _ = write!(
        out,
        "Page {} of {} ({} shown, {} total)",
        page.page_number.saturating_add(1),
        page.total_pages.max(1),
        page.len(),
        page.total_elements
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vempain_core::{ResourceResponse, ResourceVariant};

    #[test]
    fn test_truncate_string_no_truncation_needed() {
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("äöäöäöäöäö", 6), "äöä...");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(&"pdf"), "--"), "pdf");
        assert_eq!(format_optional::<String>(None, "--"), "--");
    }

    #[test]
    fn test_render_resource_table() {
        let page = ResourcePage {
            page_number: 0,
            page_size: 25,
            total_pages: 1,
            total_elements: 2,
            items: vec![
                ResourceResponse {
                    resource_type: ResourceVariant::SiteFile,
                    resource_id: 11,
                    name: "report.pdf".to_string(),
                    path: Some("docs/report.pdf".to_string()),
                    acl_id: 4,
                    file_type: Some("document".to_string()),
                },
                ResourceResponse {
                    resource_type: ResourceVariant::Gallery,
                    resource_id: 3,
                    name: "summer".to_string(),
                    path: None,
                    acl_id: 2,
                    file_type: None,
                },
            ],
        };

        let table = render_resource_table(&page);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("SITE_FILE") && lines[2].contains("document"));
        assert!(lines[3].contains("GALLERY") && lines[3].ends_with("--"));
        assert_eq!(lines[4], "Page 1 of 1 (2 shown, 2 total)");
    }

    #[test]
    fn test_render_empty_page() {
        let page = ResourcePage {
            page_number: 0,
            page_size: 25,
            total_pages: 0,
            total_elements: 0,
            items: Vec::new(),
        };
        assert!(render_resource_table(&page).ends_with("Page 1 of 1 (0 shown, 0 total)"));
    }

    #[test]
    fn test_render_extreme_page_number() {
        let page = ResourcePage {
            page_number: i64::MAX,
            page_size: 25,
            total_pages: 1,
            total_elements: 0,
            items: Vec::new(),
        };
        let summary = format!("Page {} of 1 (0 shown, 0 total)", i64::MAX);
        assert!(render_resource_table(&page).ends_with(&summary));
    }
}
