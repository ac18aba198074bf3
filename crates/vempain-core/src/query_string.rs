//! Canonical query string for resource listings.
//!
//! Pairs are emitted in a fixed order (`type`, `file_type`, `query`,
//! `acl_id`, `sort`, `direction`, `page`, `size`) and only for fields that
//! are present. Zero numbers and empty strings count as present. Values use
//! `application/x-www-form-urlencoded` encoding and are never checked
//! against their documented sets.

use url::form_urlencoded::Serializer;

use crate::domain::ResourceQueryParams;

/// Build the query string for a listing request, without a leading `?`.
pub fn build_resource_query(params: &ResourceQueryParams) -> String {
    let mut serializer = Serializer::new(String::new());

    append_str(&mut serializer, "type", params.resource_type.as_deref());
    append_str(&mut serializer, "file_type", params.file_type.as_deref());
    append_str(&mut serializer, "query", params.query.as_deref());
    append_int(&mut serializer, "acl_id", params.acl_id);
    append_str(&mut serializer, "sort", params.sort.as_deref());
    append_str(&mut serializer, "direction", params.direction.as_deref());
    append_int(&mut serializer, "page", params.page);
    append_int(&mut serializer, "size", params.size);

    serializer.finish()
}

fn append_str(serializer: &mut Serializer<'_, String>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        serializer.append_pair(key, value);
    }
}

fn append_int(serializer: &mut Serializer<'_, String>, key: &str, value: Option<i64>) {
    if let Some(value) = value {
        serializer.append_pair(key, &value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResourceVariant;
    use url::form_urlencoded;

    #[test]
    fn test_empty_params() {
        assert_eq!(build_resource_query(&ResourceQueryParams::default()), "");
    }

    #[test]
    fn test_zero_values_are_emitted() {
        let params = ResourceQueryParams::new()
            .with_acl_id(0)
            .with_page(0)
            .with_size(0);
        assert_eq!(build_resource_query(&params), "acl_id=0&page=0&size=0");
    }

    #[test]
    fn test_empty_query_is_emitted() {
        let params = ResourceQueryParams::new().with_query("");
        assert_eq!(build_resource_query(&params), "query=");
    }

    #[test]
    fn test_site_file_listing() {
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
    fn test_field_order_is_fixed() {
        // Set in reverse order; output order must not change
        let params = ResourceQueryParams::new()
            .with_size(25)
            .with_page(1)
            .with_direction("desc")
            .with_sort("name")
            .with_acl_id(42)
            .with_query("winter")
            .with_file_type("image")
            .with_type(ResourceVariant::Gallery);

        let query = build_resource_query(&params);
        let keys: Vec<String> = form_urlencoded::parse(query.as_bytes())
            .map(|(k, _)| k.into_owned())
            .collect();
        assert_eq!(
            keys,
            [
                "type",
                "file_type",
                "query",
                "acl_id",
                "sort",
                "direction",
                "page",
                "size"
            ]
        );
    }

    #[test]
    fn test_values_decode_back() {
        let params = ResourceQueryParams::new()
            .with_raw_type("PAGE")
            .with_file_type("a/b")
            .with_query("\"winter tyres\" 2014 & more=yes ä")
            .with_acl_id(-3)
            .with_sort("name")
            .with_direction("asc")
            .with_page(7)
            .with_size(200);

        let query = build_resource_query(&params);
        assert_eq!(query.matches('&').count(), 7);

        let decoded: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(decoded.len(), 8);
        assert_eq!(decoded[1].1, "a/b");
        assert_eq!(decoded[2].1, "\"winter tyres\" 2014 & more=yes ä");
        assert_eq!(decoded[3].1, "-3");
        assert_eq!(decoded[7].1, "200");
    }

    #[test]
    fn test_space_and_reserved_encoding() {
        let params = ResourceQueryParams::new().with_query("a b&c=d");
        assert_eq!(build_resource_query(&params), "query=a+b%26c%3Dd");
    }

    #[test]
    fn test_out_of_set_values_pass_through() {
        let params = ResourceQueryParams::new()
            .with_raw_type("BOGUS")
            .with_sort("popularity")
            .with_direction("sideways");
        assert_eq!(
            build_resource_query(&params),
            "type=BOGUS&sort=popularity&direction=sideways"
        );
    }

    #[test]
    fn test_no_leading_question_mark() {
        let params = ResourceQueryParams::new().with_page(1);
        assert!(!build_resource_query(&params).starts_with('?'));
    }

    #[test]
    fn test_display_matches_serializer() {
        let params = ResourceQueryParams::new().with_query("x y").with_size(5);
        assert_eq!(params.to_string(), build_resource_query(&params));
    }

    #[test]
    fn test_deterministic() {
        let params = ResourceQueryParams::new()
            .with_type(ResourceVariant::Page)
            .with_query("same");
        assert_eq!(build_resource_query(&params), build_resource_query(&params));
    }
}
