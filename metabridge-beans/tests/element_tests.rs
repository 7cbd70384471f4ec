use metabridge_beans::{
    ElementHeader, ElementStatus, ElementStub, ElementType, GlossaryCategory,
};
use metabridge_types::Guid;
use pretty_assertions::assert_eq;

// ── Serialization shape ──────────────────────────────────────────

#[test]
fn header_omits_classifications_when_none() {
    let header = ElementHeader::default();
    let json = serde_json::to_value(&header).unwrap();
    assert!(json.get("classifications").is_none());
}

#[test]
fn category_omits_unpopulated_buckets() {
    let bean = GlossaryCategory {
        terms: Some(vec![ElementStub::new(Guid::new(), "GlossaryTerm")]),
        ..Default::default()
    };
    let json = serde_json::to_value(&bean).unwrap();

    assert!(json.get("terms").is_some());
    assert!(json.get("anchor").is_none());
    assert!(json.get("parent_category").is_none());
    assert!(json.get("child_categories").is_none());
    assert!(json.get("external_references").is_none());
    assert!(json.get("other_related_elements").is_none());
    assert!(json.get("related_by").is_none());
    assert!(json.get("diagram").is_none());
}

#[test]
fn statuses_serialize_as_snake_case() {
    assert_eq!(
        serde_json::to_value(ElementStatus::ApprovedConcept).unwrap(),
        serde_json::json!("approved_concept")
    );
    assert_eq!(
        serde_json::to_value(ElementStatus::Active).unwrap(),
        serde_json::json!("active")
    );
}

#[test]
fn element_type_omits_empty_super_types() {
    let element_type = ElementType {
        type_id: "t-1".to_string(),
        type_name: "Glossary".to_string(),
        type_version: 1,
        type_description: None,
        super_type_names: None,
    };
    let json = serde_json::to_value(&element_type).unwrap();
    assert!(json.get("super_type_names").is_none());
    assert!(json.get("type_description").is_none());
}

// ── Stubs ────────────────────────────────────────────────────────

#[test]
fn stub_builder_sets_unique_name() {
    let guid = Guid::new();
    let stub = ElementStub::new(guid, "Glossary").with_unique_name("glossary::main");
    assert_eq!(stub.guid, guid);
    assert_eq!(stub.type_name, "Glossary");
    assert_eq!(stub.unique_name.as_deref(), Some("glossary::main"));
}

#[test]
fn stub_serde_roundtrip() {
    let stub = ElementStub::new(Guid::new(), "GlossaryTerm").with_unique_name("term::t1");
    let json = serde_json::to_string(&stub).unwrap();
    let parsed: ElementStub = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, stub);
}

#[test]
fn default_bean_roundtrips_through_json() {
    let bean = GlossaryCategory::default();
    let json = serde_json::to_string(&bean).unwrap();
    let parsed: GlossaryCategory = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, bean);
}
