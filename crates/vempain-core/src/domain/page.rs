//! Paginated listing response.

use serde::{Deserialize, Serialize};

use super::resource::ResourceResponse;

/// One page of a resource listing.
///
/// The backend guarantees `total_pages = ceil(total_elements / page_size)`
/// for a positive page size, and an empty `items` past the last page. These
/// are documented here, not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePage<T = ResourceResponse> {
    /// Current page (0-indexed)
    pub page_number: i64,
    /// Requested page size
    pub page_size: i64,
    pub total_pages: i64,
    pub total_elements: i64,
    /// Items in the requested sort order, at most `page_size` of them
    pub items: Vec<T>,
}

impl<T> ResourcePage<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert the items, keeping the page metadata.
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> ResourcePage<U> {
        ResourcePage {
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Keep only the items `f` maps to `Some`, keeping the page metadata.
    pub fn filter_map_items<U>(self, f: impl FnMut(T) -> Option<U>) -> ResourcePage<U> {
        ResourcePage {
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            items: self.items.into_iter().filter_map(f).collect(),
        }
    }
}
