//! Query parameters for listing site resources.
//!
//! `ResourceQueryParams` mirrors the backend's leniency: every field is
//! optional and nothing is checked, so out-of-set sort keys or directions
//! reach the backend unchanged. `StrictQueryBuilder` is the checked way to
//! produce the same params.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::resource::ResourceVariant;

/// Sort key the backend uses when none is given.
pub const DEFAULT_SORT: &str = "id";
/// Sort direction the backend uses when none is given.
pub const DEFAULT_DIRECTION: SortDirection = SortDirection::Asc;
/// Page the backend returns when none is given (0-indexed).
pub const DEFAULT_PAGE: i64 = 0;
/// Page size the backend uses when none is given.
pub const DEFAULT_PAGE_SIZE: i64 = 25;
/// Largest page size the backend honours.
pub const MAX_PAGE_SIZE: i64 = 200;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised by the strict query builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Resource type outside `SITE_FILE`, `PAGE`, `GALLERY`.
    #[error("Unknown resource type '{value}'")]
    UnknownVariant {
        /// The rejected value
        value: String,
    },

    /// Sort key outside the documented set.
    #[error("Unsupported sort field '{value}'")]
    UnknownSortField {
        /// The rejected value
        value: String,
    },

    /// Direction other than `asc` or `desc`.
    #[error("Unsupported sort direction '{value}', expected 'asc' or 'desc'")]
    UnknownDirection {
        /// The rejected value
        value: String,
    },

    /// Numeric parameter outside its accepted range.
    #[error("Parameter '{field}' out of range: {value}")]
    OutOfRange {
        /// Wire name of the parameter
        field: &'static str,
        /// The rejected value
        value: i64,
    },
}

// ============================================================================
// Sort field and direction
// ============================================================================

/// Sort keys documented for the resource listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    /// Virtual key, resolved per variant by the backend
    Name,
    Path,
    Title,
    Shortname,
    Description,
    AclId,
    FileType,
    Created,
}

impl SortField {
    pub const ALL: [Self; 9] = [
        Self::Id,
        Self::Name,
        Self::Path,
        Self::Title,
        Self::Shortname,
        Self::Description,
        Self::AclId,
        Self::FileType,
        Self::Created,
    ];

    /// Wire value of the sort key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Path => "path",
            Self::Title => "title",
            Self::Shortname => "shortname",
            Self::Description => "description",
            Self::AclId => "acl_id",
            Self::FileType => "file_type",
            Self::Created => "created",
        }
    }

    /// Column the backend actually sorts on for the given variant.
    ///
    /// `name` has no column of its own: files sort by path, pages by title
    /// and galleries by shortname. Snake case keys map to entity fields.
    pub const fn backend_column(self, variant: ResourceVariant) -> &'static str {
        match (self, variant) {
            (Self::Name, ResourceVariant::SiteFile) => "path",
            (Self::Name, ResourceVariant::Page) => "title",
            (Self::Name, ResourceVariant::Gallery) => "shortname",
            (Self::AclId, _) => "aclId",
            (Self::FileType, _) => "fileType",
            (other, _) => other.as_str(),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    /// Trimmed and case-insensitive, like the backend.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| QueryError::UnknownSortField {
                value: s.to_string(),
            })
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    /// Trimmed and case-insensitive, like the backend.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(QueryError::UnknownDirection {
                value: s.to_string(),
            })
        }
    }
}

// ============================================================================
// Permissive params
// ============================================================================

/// Filters, sort and pagination for a resource listing.
///
/// All fields are optional and unchecked. Field order matches the order the
/// serializer emits them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceQueryParams {
    /// Resource type, sent as `type`
    pub resource_type: Option<String>,
    /// File type short name, only meaningful for site files
    pub file_type: Option<String>,
    /// Free-text search
    pub query: Option<String>,
    /// Restrict to resources protected by this ACL
    pub acl_id: Option<i64>,
    /// Sort key, see [`SortField`] for the documented set
    pub sort: Option<String>,
    /// `asc` or `desc`
    pub direction: Option<String>,
    /// Page number (0-indexed)
    pub page: Option<i64>,
    /// Page size
    pub size: Option<i64>,
}

impl ResourceQueryParams {
    /// Create empty params.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by resource variant.
    #[must_use]
    pub fn with_type(mut self, variant: ResourceVariant) -> Self {
        self.resource_type = Some(variant.as_str().to_string());
        self
    }

    /// Filter by a resource type name, passed through unchecked.
    #[must_use]
    pub fn with_raw_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    #[must_use]
    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub const fn with_acl_id(mut self, acl_id: i64) -> Self {
        self.acl_id = Some(acl_id);
        self
    }

    /// Set the sort key, passed through unchecked.
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Set the sort direction, passed through unchecked.
    #[must_use]
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    #[must_use]
    pub const fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub const fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// Start a checked builder.
    pub fn strict() -> StrictQueryBuilder {
        StrictQueryBuilder::new()
    }
}

impl fmt::Display for ResourceQueryParams {
    /// Writes the canonical query string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::query_string::build_resource_query(self))
    }
}

// ============================================================================
// Strict builder
// ============================================================================

/// Builder that only produces params the backend documents.
///
/// Raw string setters parse into the constrained types; the first failure is
/// kept and reported by [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct StrictQueryBuilder {
    params: ResourceQueryParams,
    error: Option<QueryError>,
}

impl StrictQueryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, error: QueryError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    #[must_use]
    pub fn resource_type(mut self, variant: ResourceVariant) -> Self {
        self.params.resource_type = Some(variant.as_str().to_string());
        self
    }

    /// Set the resource type from its wire name.
    #[must_use]
    pub fn type_name(mut self, name: &str) -> Self {
        match name.parse::<ResourceVariant>() {
            Ok(variant) => self.resource_type(variant),
            Err(e) => {
                self.fail(e);
                self
            }
        }
    }

    #[must_use]
    pub fn file_type(mut self, file_type: impl Into<String>) -> Self {
        self.params.file_type = Some(file_type.into());
        self
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.params.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn acl_id(mut self, acl_id: i64) -> Self {
        if acl_id < 0 {
            self.fail(QueryError::OutOfRange {
                field: "acl_id",
                value: acl_id,
            });
        }
        self.params.acl_id = Some(acl_id);
        self
    }

    #[must_use]
    pub fn sort(mut self, field: SortField) -> Self {
        self.params.sort = Some(field.as_str().to_string());
        self
    }

    /// Set the sort key from its wire name.
    #[must_use]
    pub fn sort_name(mut self, name: &str) -> Self {
        match name.parse::<SortField>() {
            Ok(field) => self.sort(field),
            Err(e) => {
                self.fail(e);
                self
            }
        }
    }

    #[must_use]
    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.params.direction = Some(direction.as_str().to_string());
        self
    }

    /// Set the direction from `asc`/`desc`, case-insensitive.
    #[must_use]
    pub fn direction_name(mut self, name: &str) -> Self {
        match name.parse::<SortDirection>() {
            Ok(direction) => self.direction(direction),
            Err(e) => {
                self.fail(e);
                self
            }
        }
    }

    #[must_use]
    pub fn page(mut self, page: i64) -> Self {
        if page < 0 {
            self.fail(QueryError::OutOfRange {
                field: "page",
                value: page,
            });
        }
        self.params.page = Some(page);
        self
    }

    /// Page size, `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn size(mut self, size: i64) -> Self {
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            self.fail(QueryError::OutOfRange {
                field: "size",
                value: size,
            });
        }
        self.params.size = Some(size);
        self
    }

    pub fn build(self) -> Result<ResourceQueryParams, QueryError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.params),
        }
    }
}
