//! Site resource variants and their listing response shapes.
//!
//! `ResourceResponse` is the loose wire shape returned by the backend. Its
//! optional fields are tied to the discriminant only by convention, so any
//! combination deserializes. `Resource` is the tagged form where invalid
//! combinations cannot be represented.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::query::QueryError;
use crate::validation::DecodeError;

// ============================================================================
// Variant
// ============================================================================

/// Kind of an ACL-protectable site resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceVariant {
    /// A file published on the site
    SiteFile,
    /// A rendered page
    Page,
    /// An image gallery
    Gallery,
}

impl ResourceVariant {
    /// All variants in wire order.
    pub const ALL: [Self; 3] = [Self::SiteFile, Self::Page, Self::Gallery];

    /// Wire name of the variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SiteFile => "SITE_FILE",
            Self::Page => "PAGE",
            Self::Gallery => "GALLERY",
        }
    }
}

impl fmt::Display for ResourceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceVariant {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| QueryError::UnknownVariant {
                value: s.to_string(),
            })
    }
}

// ============================================================================
// Loose response shape
// ============================================================================

/// One listed resource as the backend sends it.
///
/// `resource_id` is opaque: it is compared by equality only, and nothing here
/// assumes it is unique per variant or across variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceResponse {
    /// Discriminant
    pub resource_type: ResourceVariant,
    /// Backend identifier of the resource
    pub resource_id: i64,
    /// Primary display name
    pub name: String,
    /// Optional path or URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// ACL protecting the resource
    pub acl_id: i64,
    /// File type short name, normally only set for site files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

impl ResourceResponse {
    /// Convert into the tagged form.
    ///
    /// Fails when a page or gallery carries a `file_type`.
    pub fn into_resource(self) -> Result<Resource, DecodeError> {
        match self.resource_type {
            ResourceVariant::SiteFile => Ok(Resource::SiteFile {
                id: self.resource_id,
                name: self.name,
                path: self.path,
                acl_id: self.acl_id,
                file_type: self.file_type,
            }),
            ResourceVariant::Page => {
                reject_file_type(ResourceVariant::Page, self.file_type.as_ref())?;
                Ok(Resource::Page {
                    id: self.resource_id,
                    title: self.name,
                    path: self.path,
                    acl_id: self.acl_id,
                })
            }
            ResourceVariant::Gallery => {
                reject_file_type(ResourceVariant::Gallery, self.file_type.as_ref())?;
                Ok(Resource::Gallery {
                    id: self.resource_id,
                    shortname: self.name,
                    description: self.path,
                    acl_id: self.acl_id,
                })
            }
        }
    }
}

fn reject_file_type(variant: ResourceVariant, file_type: Option<&String>) -> Result<(), DecodeError> {
    if file_type.is_some() {
        return Err(DecodeError::InconsistentVariant {
            variant,
            field: "file_type",
        });
    }
    Ok(())
}

// ============================================================================
// Tagged resource
// ============================================================================

/// A listed resource with per-variant payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// A site file; its path doubles as its name on the backend
    SiteFile {
        id: i64,
        name: String,
        path: Option<String>,
        acl_id: i64,
        file_type: Option<String>,
    },
    /// A page, named by its title
    Page {
        id: i64,
        title: String,
        path: Option<String>,
        acl_id: i64,
    },
    /// A gallery; the backend sends its description in `path`
    Gallery {
        id: i64,
        shortname: String,
        description: Option<String>,
        acl_id: i64,
    },
}

impl Resource {
    pub const fn variant(&self) -> ResourceVariant {
        match self {
            Self::SiteFile { .. } => ResourceVariant::SiteFile,
            Self::Page { .. } => ResourceVariant::Page,
            Self::Gallery { .. } => ResourceVariant::Gallery,
        }
    }

    pub const fn id(&self) -> i64 {
        match self {
            Self::SiteFile { id, .. } | Self::Page { id, .. } | Self::Gallery { id, .. } => *id,
        }
    }

    pub const fn acl_id(&self) -> i64 {
        match self {
            Self::SiteFile { acl_id, .. }
            | Self::Page { acl_id, .. }
            | Self::Gallery { acl_id, .. } => *acl_id,
        }
    }

    /// Name shown to users: file name, page title or gallery shortname.
    pub fn display_name(&self) -> &str {
        match self {
            Self::SiteFile { name, .. } => name,
            Self::Page { title, .. } => title,
            Self::Gallery { shortname, .. } => shortname,
        }
    }

    /// Convert back into the loose wire shape.
    pub fn into_response(self) -> ResourceResponse {
        match self {
            Self::SiteFile {
                id,
                name,
                path,
                acl_id,
                file_type,
            } => ResourceResponse {
                resource_type: ResourceVariant::SiteFile,
                resource_id: id,
                name,
                path,
                acl_id,
                file_type,
            },
            Self::Page {
                id,
                title,
                path,
                acl_id,
            } => ResourceResponse {
                resource_type: ResourceVariant::Page,
                resource_id: id,
                name: title,
                path,
                acl_id,
                file_type: None,
            },
            Self::Gallery {
                id,
                shortname,
                description,
                acl_id,
            } => ResourceResponse {
                resource_type: ResourceVariant::Gallery,
                resource_id: id,
                name: shortname,
                path: description,
                acl_id,
                file_type: None,
            },
        }
    }
}

impl From<Resource> for ResourceResponse {
    fn from(resource: Resource) -> Self {
        resource.into_response()
    }
}

impl TryFrom<ResourceResponse> for Resource {
    type Error = DecodeError;

    fn try_from(response: ResourceResponse) -> Result<Self, Self::Error> {
        response.into_resource()
    }
}
