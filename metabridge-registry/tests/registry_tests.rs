use metabridge_registry::{names, InMemoryTypeRegistry, TypeDescriptor, TypeRegistry};
use pretty_assertions::assert_eq;

fn glossary_registry() -> InMemoryTypeRegistry {
    InMemoryTypeRegistry::new()
        .with_type(TypeDescriptor::new("t-ref", names::REFERENCEABLE_TYPE_NAME))
        .with_type(
            TypeDescriptor::new("t-glossary", names::GLOSSARY_TYPE_NAME)
                .with_super_types(vec![names::REFERENCEABLE_TYPE_NAME.to_string()]),
        )
        .with_type(
            TypeDescriptor::new("t-category", names::GLOSSARY_CATEGORY_TYPE_NAME)
                .with_super_types(vec![names::REFERENCEABLE_TYPE_NAME.to_string()]),
        )
        .with_type(
            TypeDescriptor::new("t-subject-area", "SubjectAreaDefinition").with_super_types(
                vec![
                    names::GLOSSARY_CATEGORY_TYPE_NAME.to_string(),
                    names::REFERENCEABLE_TYPE_NAME.to_string(),
                ],
            ),
        )
}

// ── Resolution ───────────────────────────────────────────────────

#[test]
fn resolve_returns_registered_descriptor() {
    let registry = glossary_registry();
    let descriptor = registry.resolve(names::GLOSSARY_TYPE_NAME).unwrap();
    assert_eq!(descriptor.id, "t-glossary");
    assert_eq!(descriptor.version, 1);
}

#[test]
fn resolve_unknown_is_none() {
    let registry = glossary_registry();
    assert!(registry.resolve("NoSuchType").is_none());
}

#[test]
fn register_replaces_previous_descriptor() {
    let mut registry = glossary_registry();
    let count = registry.len();
    registry.register(TypeDescriptor {
        version: 2,
        ..TypeDescriptor::new("t-glossary-v2", names::GLOSSARY_TYPE_NAME)
    });

    assert_eq!(registry.len(), count);
    let descriptor = registry.resolve(names::GLOSSARY_TYPE_NAME).unwrap();
    assert_eq!(descriptor.version, 2);
}

// ── Super-type chains ────────────────────────────────────────────

#[test]
fn super_types_of_root_type_is_empty() {
    let registry = glossary_registry();
    assert!(registry.super_types(names::REFERENCEABLE_TYPE_NAME).is_empty());
}

#[test]
fn super_types_of_unknown_type_is_empty() {
    let registry = glossary_registry();
    assert!(registry.super_types("NoSuchType").is_empty());
}

#[test]
fn super_types_lists_the_full_chain() {
    let registry = glossary_registry();
    assert_eq!(
        registry.super_types("SubjectAreaDefinition"),
        &[
            names::GLOSSARY_CATEGORY_TYPE_NAME.to_string(),
            names::REFERENCEABLE_TYPE_NAME.to_string(),
        ]
    );
}

// ── Subtype queries ──────────────────────────────────────────────

#[test]
fn a_type_is_a_subtype_of_itself() {
    let registry = glossary_registry();
    assert!(registry.is_subtype_of(
        "test",
        names::GLOSSARY_TYPE_NAME,
        names::GLOSSARY_TYPE_NAME
    ));
}

#[test]
fn subtype_matches_anywhere_in_the_chain() {
    let registry = glossary_registry();
    assert!(registry.is_subtype_of(
        "test",
        "SubjectAreaDefinition",
        names::GLOSSARY_CATEGORY_TYPE_NAME
    ));
    assert!(registry.is_subtype_of(
        "test",
        "SubjectAreaDefinition",
        names::REFERENCEABLE_TYPE_NAME
    ));
}

#[test]
fn unrelated_types_do_not_match() {
    let registry = glossary_registry();
    assert!(!registry.is_subtype_of(
        "test",
        names::GLOSSARY_TYPE_NAME,
        names::GLOSSARY_CATEGORY_TYPE_NAME
    ));
}

#[test]
fn unknown_candidate_only_matches_itself() {
    let registry = glossary_registry();
    assert!(registry.is_subtype_of("test", "NoSuchType", "NoSuchType"));
    assert!(!registry.is_subtype_of("test", "NoSuchType", names::REFERENCEABLE_TYPE_NAME));
}
