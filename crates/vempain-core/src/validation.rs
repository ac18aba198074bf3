//! Runtime checks for untyped resource items.
//!
//! [`is_resource_response`] is the shallow, permissive check: it looks at the
//! primitive types of `resource_type`, `resource_id` and `acl_id` only and
//! accepts any string as the discriminant. [`decode_resource`] is the strict
//! counterpart that reports why an item was rejected.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::domain::{Resource, ResourceResponse, ResourceVariant};

/// Why a value could not be decoded into a resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The value is not a JSON object.
    #[error("Expected a JSON object, got {found}")]
    NotAnObject {
        /// JSON type that was found instead
        found: &'static str,
    },

    /// A required field is absent or null.
    #[error("Missing required field '{field}'")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A field has the wrong JSON type.
    #[error("Field '{field}' must be {expected}, got {found}")]
    WrongType {
        /// Name of the field
        field: &'static str,
        /// Expected type
        expected: &'static str,
        /// JSON type that was found
        found: &'static str,
    },

    /// The discriminant is not one of the known variants.
    #[error("Unknown resource type '{value}'")]
    UnknownVariant {
        /// The discriminant that was found
        value: String,
    },

    /// A field is set that the variant never carries.
    #[error("Resource of type {variant} must not carry '{field}'")]
    InconsistentVariant {
        /// The item's variant
        variant: ResourceVariant,
        /// The offending field
        field: &'static str,
    },
}

// ============================================================================
// Shallow check
// ============================================================================

/// Check that a value looks like a resource response.
///
/// True iff the value is an object whose `resource_type` is a string and
/// whose `resource_id` and `acl_id` are numbers. `name`, `path` and
/// `file_type` are not looked at, and the discriminant is not checked
/// against the known variants.
pub fn is_resource_response(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };

    object.get("resource_type").is_some_and(Value::is_string)
        && object.get("resource_id").is_some_and(Value::is_number)
        && object.get("acl_id").is_some_and(Value::is_number)
}

/// Items split by the shallow check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VettedItems {
    /// Items that passed, in their original order
    pub accepted: Vec<Value>,
    /// Number of items that failed
    pub rejected: usize,
}

/// Partition raw items with [`is_resource_response`].
pub fn vet_items(items: Vec<Value>) -> VettedItems {
    let total = items.len();
    let accepted: Vec<Value> = items.into_iter().filter(is_resource_response).collect();
    let rejected = total - accepted.len();

    if rejected > 0 {
        debug!(total, rejected, "Rejected untyped resource items");
    }

    VettedItems { accepted, rejected }
}

// ============================================================================
// Strict decoding
// ============================================================================

/// Decode a value into a resource response, checking every field.
pub fn decode_resource(value: &Value) -> Result<ResourceResponse, DecodeError> {
    let object = value.as_object().ok_or(DecodeError::NotAnObject {
        found: json_type(value),
    })?;

    let type_name = required_str(object, "resource_type")?;
    let resource_type = ResourceVariant::ALL
        .into_iter()
        .find(|variant| variant.as_str() == type_name)
        .ok_or_else(|| DecodeError::UnknownVariant {
            value: type_name.to_string(),
        })?;

    Ok(ResourceResponse {
        resource_type,
        resource_id: required_int(object, "resource_id")?,
        name: required_str(object, "name")?.to_string(),
        path: optional_str(object, "path")?,
        acl_id: required_int(object, "acl_id")?,
        file_type: optional_str(object, "file_type")?,
    })
}

/// Decode a value into the tagged form.
///
/// Also rejects optional fields that do not belong to the variant.
pub fn decode_typed_resource(value: &Value) -> Result<Resource, DecodeError> {
    decode_resource(value)?.into_resource()
}

fn required<'a>(object: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, DecodeError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(DecodeError::MissingField { field }),
        Some(value) => Ok(value),
    }
}

fn required_str<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, DecodeError> {
    let value = required(object, field)?;
    value.as_str().ok_or(DecodeError::WrongType {
        field,
        expected: "a string",
        found: json_type(value),
    })
}

fn required_int(object: &Map<String, Value>, field: &'static str) -> Result<i64, DecodeError> {
    let value = required(object, field)?;
    value.as_i64().ok_or(DecodeError::WrongType {
        field,
        expected: "an integer",
        found: json_type(value),
    })
}

fn optional_str(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, DecodeError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(DecodeError::WrongType {
            field,
            expected: "a string",
            found: json_type(other),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() => "an integer",
        Value::Number(n) if n.is_u64() => "an integer out of range",
        Value::Number(_) => "a float",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
