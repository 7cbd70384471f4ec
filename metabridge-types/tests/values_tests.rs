use metabridge_types::{PropertyBag, TypedValue};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn s(value: &str) -> TypedValue {
    TypedValue::String(value.to_string())
}

// ── Insertion order & uniqueness ─────────────────────────────────

#[test]
fn bag_preserves_insertion_order() {
    let bag = PropertyBag::new()
        .with("c", s("3"))
        .with("a", s("1"))
        .with("b", s("2"));

    let names: Vec<&str> = bag.names().collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn insert_replaces_in_place() {
    let mut bag = PropertyBag::new()
        .with("first", s("one"))
        .with("second", s("two"));
    bag.insert("first", s("updated"));

    let names: Vec<&str> = bag.names().collect();
    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(bag.get("first"), Some(&s("updated")));
    assert_eq!(bag.len(), 2);
}

#[test]
fn remove_returns_value_and_shrinks_bag() {
    let mut bag = PropertyBag::new().with("x", TypedValue::Int(7));
    assert_eq!(bag.remove("x"), Some(TypedValue::Int(7)));
    assert_eq!(bag.remove("x"), None);
    assert!(bag.is_empty());
}

#[test]
fn get_missing_is_none() {
    let bag = PropertyBag::new();
    assert_eq!(bag.get("anything"), None);
    assert!(!bag.contains("anything"));
}

// ── JSON projection ──────────────────────────────────────────────

#[test]
fn to_value_map_projects_all_kinds() {
    let mut string_map = BTreeMap::new();
    string_map.insert("k".to_string(), "v".to_string());

    let bag = PropertyBag::new()
        .with("name", s("hello"))
        .with("count", TypedValue::Int(3))
        .with("big", TypedValue::Long(9_000_000_000))
        .with("flag", TypedValue::Boolean(true))
        .with("when", TypedValue::Date(1_700_000_000_000))
        .with("tags", TypedValue::StringList(vec!["a".to_string(), "b".to_string()]))
        .with("map", TypedValue::StringMap(string_map))
        .with(
            "level",
            TypedValue::Enum {
                ordinal: 2,
                symbol: "Approved".to_string(),
            },
        );

    let projected = bag.to_value_map().unwrap();
    assert_eq!(projected["name"], serde_json::json!("hello"));
    assert_eq!(projected["count"], serde_json::json!(3));
    assert_eq!(projected["big"], serde_json::json!(9_000_000_000i64));
    assert_eq!(projected["flag"], serde_json::json!(true));
    assert_eq!(projected["when"], serde_json::json!(1_700_000_000_000i64));
    assert_eq!(projected["tags"], serde_json::json!(["a", "b"]));
    assert_eq!(projected["map"], serde_json::json!({"k": "v"}));
    // Enums project as their symbolic name.
    assert_eq!(projected["level"], serde_json::json!("Approved"));
}

#[test]
fn to_value_map_of_empty_bag_is_none() {
    assert_eq!(PropertyBag::new().to_value_map(), None);
}

#[test]
fn nested_value_map_projects_recursively() {
    let mut inner = BTreeMap::new();
    inner.insert("depth".to_string(), TypedValue::Int(2));
    let bag = PropertyBag::new().with("nested", TypedValue::ValueMap(inner));

    let projected = bag.to_value_map().unwrap();
    assert_eq!(projected["nested"], serde_json::json!({"depth": 2}));
}

// ── Serde round trip ─────────────────────────────────────────────

#[test]
fn bag_serde_roundtrip_keeps_order() {
    let bag = PropertyBag::new()
        .with("z", s("last"))
        .with("a", TypedValue::Boolean(false));

    let json = serde_json::to_string(&bag).unwrap();
    let parsed: PropertyBag = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, bag);
    let names: Vec<&str> = parsed.names().collect();
    assert_eq!(names, vec!["z", "a"]);
}

#[test]
fn from_iterator_deduplicates() {
    let bag: PropertyBag = vec![
        ("a".to_string(), s("1")),
        ("a".to_string(), s("2")),
        ("b".to_string(), s("3")),
    ]
    .into_iter()
    .collect();

    assert_eq!(bag.len(), 2);
    assert_eq!(bag.get("a"), Some(&s("2")));
}
