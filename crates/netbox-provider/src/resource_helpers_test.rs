//! Unit tests for resource_helpers module

use super::*;
use netbox_client::MockNetBoxClient;
use serde_json::json;

#[test]
fn test_parse_id() {
    assert_eq!(parse_id("17").unwrap(), 17);
    assert!(matches!(parse_id("abc"), Err(ProviderError::InvalidId(_))));
    assert!(matches!(parse_id(""), Err(ProviderError::InvalidId(_))));
    assert!(matches!(parse_id("-1"), Err(ProviderError::InvalidId(_))));
}

#[test]
fn test_optional_string_defaults_to_empty() {
    let data = ResourceData::from_values([("label", json!("front"))]);
    assert_eq!(get_optional_str(&data, "label"), "front");
    assert_eq!(get_optional_str(&data, "description"), "");
}

#[test]
fn test_optional_int_zero_is_null() {
    let data = ResourceData::from_values([("commit_rate", json!(0)), ("other", json!(250))]);
    assert_eq!(get_optional_int(&data, "commit_rate").unwrap(), None);
    assert_eq!(get_optional_int(&data, "other").unwrap(), Some(250));
    assert_eq!(get_optional_int(&data, "missing").unwrap(), None);
}

#[test]
fn test_require_id_rejects_non_integer() {
    let data = ResourceData::from_values([("provider_id", json!("one"))]);
    assert!(matches!(require_id(&data, "provider_id"), Err(ProviderError::InvalidValue { .. })));
    assert!(matches!(require_id(&data, "type_id"), Err(ProviderError::MissingRequired(_))));
}

#[test]
fn test_optional_date_parsing() {
    let data = ResourceData::from_values([
        ("install_date", json!("2024-01-15")),
        ("termination_date", json!("")),
        ("bad", json!("15/01/2024")),
    ]);

    assert_eq!(
        get_optional_date(&data, "install_date").unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 15)
    );
    assert_eq!(get_optional_date(&data, "termination_date").unwrap(), None);

    let err = get_optional_date(&data, "bad").unwrap_err();
    assert!(matches!(err, ProviderError::InvalidDate { ref value, .. } if value == "15/01/2024"));
}

#[test]
fn test_date_value_round_trips_format() {
    assert_eq!(date_value(NaiveDate::from_ymd_opt(2023, 2, 1)), json!("2023-02-01"));
    assert_eq!(date_value(None), json!(null));
}

#[test]
fn test_tag_list_value_is_sorted() {
    let tags = vec![
        NestedTag { id: 2, url: String::new(), display: String::new(), name: "edge".to_string(), slug: "edge".to_string() },
        NestedTag { id: 1, url: String::new(), display: String::new(), name: "core".to_string(), slug: "core".to_string() },
    ];
    assert_eq!(tag_list_value(&tags), json!(["core", "edge"]));
    assert_eq!(tag_list_value(&[]), json!([]));
}

#[test]
fn test_custom_fields_drop_nulls() {
    let mut fields = CustomFields::new();
    fields.insert("owner".to_string(), json!("noc"));
    fields.insert("ticket".to_string(), json!(null));
    assert_eq!(custom_fields_value(&fields), json!({"owner": "noc"}));
}

#[test]
fn test_empty_custom_fields_are_not_sent() {
    let data = ResourceData::from_values([("custom_fields", json!({}))]);
    assert_eq!(get_custom_fields(&data), None);

    let data = ResourceData::from_values([("custom_fields", json!({"owner": "noc"}))]);
    assert_eq!(get_custom_fields(&data).map(|f| f.len()), Some(1));
}

#[tokio::test]
async fn test_tag_references_resolve_unique_names() {
    let mock = MockNetBoxClient::new("http://test-netbox");
    mock.add_tag("core");
    let data = ResourceData::from_values([("tags", json!(["core"]))]);

    let refs = get_tag_references(&mock, &data).await.unwrap();
    assert_eq!(refs, vec![TagReference { name: "core".to_string(), slug: "core".to_string() }]);
}

#[tokio::test]
async fn test_unknown_tag_is_not_unique() {
    let mock = MockNetBoxClient::new("http://test-netbox");
    let data = ResourceData::from_values([("tags", json!(["missing"]))]);

    let err = get_tag_references(&mock, &data).await.unwrap_err();
    assert!(matches!(err, ProviderError::TagNotUnique { matches: 0, .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_duplicate_tag_names_are_not_unique() {
    let mock = MockNetBoxClient::new("http://test-netbox");
    mock.add_tag("core");
    mock.add_tag("core");
    let data = ResourceData::from_values([("tags", json!(["core"]))]);

    let err = get_tag_references(&mock, &data).await.unwrap_err();
    assert!(matches!(err, ProviderError::TagNotUnique { matches: 2, .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_no_tags_makes_no_lookup() {
    let mock = MockNetBoxClient::new("http://test-netbox");
    let refs = get_tag_references(&mock, &ResourceData::new()).await.unwrap();
    assert!(refs.is_empty());
    assert_eq!(mock.call_count("query_tags"), 0);
}

#[test]
fn test_read_not_found_clears_id() {
    let mut data = ResourceData::with_id("9");
    let result: Result<(), NetBoxError> = Err(NetBoxError::NotFound("gone".to_string()));
    assert!(found_or_cleared(result, &mut data, "Circuit").unwrap().is_none());
    assert!(!data.has_id());
}

#[test]
fn test_read_other_error_keeps_id() {
    let mut data = ResourceData::with_id("9");
    let result: Result<(), NetBoxError> = Err(NetBoxError::Api { status: 500, message: "boom".to_string() });
    assert!(found_or_cleared(result, &mut data, "Circuit").is_err());
    assert_eq!(data.id(), "9");
}

#[test]
fn test_delete_not_found_is_success() {
    let mut data = ResourceData::with_id("9");
    deleted_or_gone(Err(NetBoxError::NotFound("gone".to_string())), &mut data, "Device bay").unwrap();
    assert!(!data.has_id());

    let mut data = ResourceData::with_id("9");
    let err = deleted_or_gone(
        Err(NetBoxError::Api { status: 409, message: "in use".to_string() }),
        &mut data,
        "Device bay",
    )
    .unwrap_err();
    assert!(matches!(err, ProviderError::NetBox(_)));
    assert_eq!(data.id(), "9");
}
