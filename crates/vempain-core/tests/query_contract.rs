//! Integration tests for the public resource query contract.
//!
//! Exercises the serializer, the shallow validator and the strict decoder
//! through the crate's re-exports only.

use serde_json::{Value, json};
use vempain_core::{
    DecodeError, ResourcePage, ResourceQueryParams, ResourceVariant, SortDirection, SortField,
    build_resource_query, decode_resource, is_resource_response, vet_items,
};

#[test]
fn test_empty_params_serialize_to_empty_string() {
    assert_eq!(build_resource_query(&ResourceQueryParams::default()), "");
}

#[test]
fn test_zero_values_survive_serialization() {
    let params = ResourceQueryParams {
        acl_id: Some(0),
        page: Some(0),
        size: Some(0),
        ..Default::default()
    };
    assert_eq!(build_resource_query(&params), "acl_id=0&page=0&size=0");
}

#[test]
fn test_all_fields_serialize_in_declared_order() {
    let params = ResourceQueryParams {
        resource_type: Some("GALLERY".to_string()),
        file_type: Some("image".to_string()),
        query: Some("talvi renkaat".to_string()),
        acl_id: Some(42),
        sort: Some("shortname".to_string()),
        direction: Some("desc".to_string()),
        page: Some(1),
        size: Some(25),
    };

    assert_eq!(
        build_resource_query(&params),
        "type=GALLERY&file_type=image&query=talvi+renkaat&acl_id=42&sort=shortname&direction=desc&page=1&size=25"
    );
}

#[test]
fn test_site_file_listing_query() {
    let params = ResourceQueryParams::new()
        .with_type(ResourceVariant::SiteFile)
        .with_file_type("pdf")
        .with_page(2)
        .with_size(10);
    assert_eq!(
        build_resource_query(&params),
        "type=SITE_FILE&file_type=pdf&page=2&size=10"
    );
}

#[test]
fn test_strict_and_permissive_agree_on_valid_input() {
    let strict = ResourceQueryParams::strict()
        .resource_type(ResourceVariant::Page)
        .sort(SortField::Name)
        .direction(SortDirection::Desc)
        .build()
        .unwrap();
    let permissive = ResourceQueryParams::new()
        .with_raw_type("PAGE")
        .with_sort("name")
        .with_direction("desc");

    assert_eq!(strict, permissive);
    assert_eq!(
        build_resource_query(&strict),
        "type=PAGE&sort=name&direction=desc"
    );
}

#[test]
fn test_validator_properties() {
    assert!(is_resource_response(
        &json!({"resource_type": "PAGE", "resource_id": 5, "acl_id": 2})
    ));
    assert!(!is_resource_response(
        &json!({"resource_type": "PAGE", "acl_id": 2})
    ));
    assert!(is_resource_response(
        &json!({"resource_type": "BOGUS", "resource_id": 1, "acl_id": 1})
    ));
    assert!(!is_resource_response(&Value::Null));
    assert!(!is_resource_response(&json!(42)));
}

#[test]
fn test_shallow_pass_strict_fail() {
    let item = json!({"resource_type": "BOGUS", "resource_id": 1, "acl_id": 1});
    assert!(is_resource_response(&item));
    assert!(matches!(
        decode_resource(&item),
        Err(DecodeError::UnknownVariant { .. })
    ));
}

#[test]
fn test_raw_page_vetting() {
    let page: ResourcePage<Value> = serde_json::from_value(json!({
        "page_number": 0,
        "page_size": 25,
        "total_pages": 1,
        "total_elements": 3,
        "items": [
            {"resource_type": "SITE_FILE", "resource_id": 1, "name": "a", "acl_id": 1},
            {"resource_type": "PAGE", "name": "no id", "acl_id": 1},
            "not an object"
        ]
    }))
    .unwrap();

    let vetted = vet_items(page.items);
    assert_eq!(vetted.accepted.len(), 1);
    assert_eq!(vetted.rejected, 2);

    let typed = decode_resource(&vetted.accepted[0]).unwrap();
    assert_eq!(typed.resource_type, ResourceVariant::SiteFile);
}
