//! Tests for structured value sources.

use std::collections::BTreeMap;

use istring::{Message, ToStringMap, format, format_choice};
use serde_json::json;

#[test]
fn json_object_members_become_values() {
    let values = json!({
        "name": "Ann",
        "count": 3,
        "ratio": 0.5,
        "admin": true,
        "missing": null,
        "tags": ["a", "b"]
    });
    let map = values.to_string_map();
    assert_eq!(map["name"], "Ann");
    assert_eq!(map["count"], "3");
    assert_eq!(map["ratio"], "0.5");
    assert_eq!(map["admin"], "true");
    assert_eq!(map["missing"], "");
    assert_eq!(map["tags"], r#"["a","b"]"#);
}

#[test]
fn json_non_object_is_empty() {
    assert!(json!(null).to_string_map().is_empty());
    assert!(json!([1, 2]).to_string_map().is_empty());
    assert!(json!("text").to_string_map().is_empty());
}

#[test]
fn format_with_json_values() {
    let values = json!({ "user": "Bo", "n": 2 });
    assert_eq!(format("{user} has {n} messages", &values), "Bo has 2 messages");
}

#[test]
fn format_choice_with_json_values() {
    let values = json!({ "n": 4 });
    assert_eq!(
        format_choice("1#one message|#{n} messages", 4, &values),
        "4 messages"
    );
}

#[test]
fn null_json_keeps_choice_text() {
    let message = Message::new("#{n} messages");
    assert_eq!(message.format_choice(4, &json!(null)), "{n} messages");
}

#[test]
fn maps_are_ordered_by_key() {
    let map = [("b", "2"), ("a", "1")].to_string_map();
    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn reference_to_map_is_a_source() {
    let owned: BTreeMap<&str, String> = BTreeMap::from([("k", "v".to_string())]);
    let borrowed = &owned;
    assert_eq!(borrowed.to_string_map()["k"], "v");
}
