/// Property store behaviour through the public API: typed round-trips for
/// every registered type, multi-value semantics, and the document encoding.
use chrono::{TimeZone, Utc};
use noteblocks_core::properties::{property_type, PropertyType};
use noteblocks_core::{keys, Block, Error, Properties, PropertyValue};
use serde_json::json;

#[test]
fn test_replace_then_typed_getter_round_trip() {
    let mut props = Properties::new();
    let when = Utc.with_ymd_and_hms(2024, 6, 30, 18, 45, 0).unwrap();

    props.replace_value(keys::TITLE, "Heat").unwrap();
    props.replace_value(keys::RUNTIME, 170).unwrap();
    props.replace_value(keys::RATING, 8.3).unwrap();
    props.replace_value(keys::CHECKED, true).unwrap();
    props.replace_value(keys::TARGET_DATETIME, when).unwrap();
    props.replace_value(keys::GENRES, "Crime").unwrap();
    props.replace_value(keys::COORDINATES, [34.05, -118.24]).unwrap();

    assert_eq!(props.get_string(keys::TITLE).as_deref(), Some("Heat"));
    assert_eq!(props.get_int(keys::RUNTIME), Some(170));
    assert_eq!(props.get_float(keys::RATING), Some(8.3));
    assert_eq!(props.get_bool(keys::CHECKED), Some(true));
    assert_eq!(props.get_time(keys::TARGET_DATETIME), Some(when));
    assert_eq!(
        props.get_string_array(keys::GENRES),
        Some(vec!["Crime".to_string()])
    );
    assert_eq!(props.get_float_pair(keys::COORDINATES), Some([34.05, -118.24]));
}

#[test]
fn test_append_twice_preserves_call_order() {
    let mut props = Properties::new();
    props.append_value(keys::CAST, "Al Pacino").unwrap();
    props.append_value(keys::CAST, "Robert De Niro").unwrap();

    let slot = props.get_array(keys::CAST).unwrap();
    assert_eq!(slot.len(), 2);
    assert_eq!(slot[0], PropertyValue::from("Al Pacino"));
    assert_eq!(slot[1], PropertyValue::from("Robert De Niro"));
    assert_eq!(props.get(keys::CAST), Some(&PropertyValue::from("Al Pacino")));
}

#[test]
fn test_document_round_trip_is_key_wise_equal() {
    let doc = json!({
        "title": ["Hello"],
        "checked": [true],
        "tags": ["a", "b", "c"],
        "coordinates": [[48.85, 2.35]],
        "custom": [{"nested": 1}, null],
        "empty": []
    });

    let props: Properties = serde_json::from_value(doc.clone()).unwrap();
    let back = serde_json::to_value(&props).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_coercion_failure_is_reported_and_store_unchanged() {
    let mut props = Properties::new();
    props.replace_value(keys::PAGE_COUNT, 320).unwrap();
    let before = props.clone();

    let err = props.append_value(keys::PAGE_COUNT, 320.5).unwrap_err();
    match err {
        Error::Coercion { key, expected, .. } => {
            assert_eq!(key, keys::PAGE_COUNT);
            assert_eq!(expected, PropertyType::Int);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(props, before);
}

#[test]
fn test_registry_covers_adapter_keys() {
    assert_eq!(property_type(keys::BIRTHDAY), PropertyType::DateTime);
    assert_eq!(property_type(keys::PRICE), PropertyType::Float);
    assert_eq!(property_type(keys::MEDIA_URLS), PropertyType::StringArray);
    assert_eq!(property_type(keys::HAS_CAPTIONS), PropertyType::Bool);
    assert_eq!(property_type("not_registered"), PropertyType::Any);
}

#[test]
fn test_block_document_merges_properties_by_key() {
    let mut block = Block::new();
    block.properties.append_value(keys::TAGS, "x").unwrap();
    block.properties.append_value(keys::TAGS, "y").unwrap();
    block.properties.replace_value(keys::TEXT, "body").unwrap();

    block
        .properties
        .merge_document(r#"{"tags": ["z"], "title": ["New"]}"#)
        .unwrap();

    assert_eq!(block.properties.get_string_array(keys::TAGS), Some(vec!["z".to_string()]));
    assert_eq!(block.properties.get_string(keys::TEXT).as_deref(), Some("body"));
    assert_eq!(block.properties.get_string(keys::TITLE).as_deref(), Some("New"));
}
