#![allow(dead_code)]

//! Shared fixtures: a registry loaded with the glossary/annotation/
//! connection/schema types, a factory with every shipped converter, and
//! record builders.

use metabridge_convert::converters::{
    AnnotationConverter, ConnectionConverter, GlossaryCategoryConverter, GlossaryConverter,
    GlossaryTermConverter, RelatedElementsConverter, SchemaTypeConverter,
};
use metabridge_convert::BeanFactory;
use metabridge_registry::{names, InMemoryTypeRegistry, TypeDescriptor};
use metabridge_types::{
    AuditHeader, EntityProxy, EntityRecord, Guid, PropertyBag, RecordEnd, RelationshipRecord,
    TypedValue,
};

/// A relationship subtype used to exercise subtype-aware matching.
pub const NESTED_CATEGORY_LINK_TYPE_NAME: &str = "NestedCategoryLink";

pub const SERVICE_NAME: &str = "asset-catalog";
pub const SOURCE_SERVER: &str = "test-server";

fn descriptor(id: &str, name: &str, supers: &[&str]) -> TypeDescriptor {
    TypeDescriptor::new(id, name)
        .with_super_types(supers.iter().map(|s| s.to_string()).collect())
}

/// A registry loaded with every type the shipped converters reference,
/// plus one relationship subtype.
pub fn registry() -> InMemoryTypeRegistry {
    let mut registry = InMemoryTypeRegistry::new()
        .with_type(descriptor("t-ref", names::REFERENCEABLE_TYPE_NAME, &[]));

    for name in [
        names::GLOSSARY_TYPE_NAME,
        names::GLOSSARY_CATEGORY_TYPE_NAME,
        names::GLOSSARY_TERM_TYPE_NAME,
        names::EXTERNAL_GLOSSARY_LINK_TYPE_NAME,
        names::ANNOTATION_TYPE_NAME,
        names::ANNOTATION_REVIEW_TYPE_NAME,
        names::CONNECTION_TYPE_NAME,
        names::CONNECTOR_TYPE_TYPE_NAME,
        names::ENDPOINT_TYPE_NAME,
        names::SCHEMA_TYPE_TYPE_NAME,
    ] {
        registry.register(descriptor(
            &format!("t-{}", name.to_lowercase()),
            name,
            &[names::REFERENCEABLE_TYPE_NAME],
        ));
    }

    for name in [
        names::CATEGORY_ANCHOR_TYPE_NAME,
        names::CATEGORY_HIERARCHY_LINK_TYPE_NAME,
        names::TERM_CATEGORIZATION_TYPE_NAME,
        names::LIBRARY_CATEGORY_REFERENCE_TYPE_NAME,
        names::ANNOTATION_REVIEW_LINK_TYPE_NAME,
        names::ASSOCIATED_ANNOTATION_TYPE_NAME,
        names::CONNECTION_CONNECTOR_TYPE_TYPE_NAME,
        names::CONNECTION_ENDPOINT_TYPE_NAME,
    ] {
        registry.register(descriptor(&format!("r-{}", name.to_lowercase()), name, &[]));
    }

    registry.register(descriptor(
        "r-nestedcategorylink",
        NESTED_CATEGORY_LINK_TYPE_NAME,
        &[names::CATEGORY_HIERARCHY_LINK_TYPE_NAME],
    ));

    registry
}

/// A factory with every shipped converter registered.
pub fn factory() -> BeanFactory {
    let mut factory = BeanFactory::new();
    factory.register_converter(&GlossaryConverter);
    factory.register_converter(&GlossaryCategoryConverter);
    factory.register_converter(&GlossaryTermConverter);
    factory.register_converter(&AnnotationConverter);
    factory.register_converter(&ConnectionConverter);
    factory.register_converter(&RelatedElementsConverter);
    factory.register_converter(&SchemaTypeConverter);
    factory
}

pub fn s(value: &str) -> TypedValue {
    TypedValue::String(value.to_string())
}

/// An entity with an empty bag.
pub fn entity(guid: Guid, type_name: &str) -> EntityRecord {
    EntityRecord {
        header: AuditHeader::new(guid, type_name, "tester"),
        properties: PropertyBag::new(),
        classifications: Vec::new(),
    }
}

/// An entity with the given property bag.
pub fn entity_with(guid: Guid, type_name: &str, properties: PropertyBag) -> EntityRecord {
    EntityRecord {
        properties,
        ..entity(guid, type_name)
    }
}

/// An entity whose `qualifiedName` is set, so stubs pick up a unique name.
pub fn named_entity(guid: Guid, type_name: &str, qualified_name: &str) -> EntityRecord {
    entity_with(
        guid,
        type_name,
        PropertyBag::new().with(names::QUALIFIED_NAME_PROPERTY_NAME, s(qualified_name)),
    )
}

/// A relationship with full records at both ends.
pub fn relationship(
    type_name: &str,
    end_one: EntityRecord,
    end_two: EntityRecord,
) -> RelationshipRecord {
    RelationshipRecord {
        header: AuditHeader::new(Guid::new(), type_name, "tester"),
        properties: PropertyBag::new(),
        end_one: RecordEnd::Full(Box::new(end_one)),
        end_two: RecordEnd::Full(Box::new(end_two)),
    }
}

/// A proxy end for an entity that was not hydrated.
pub fn proxy_end(guid: Guid, type_name: &str) -> RecordEnd {
    RecordEnd::Proxy(EntityProxy {
        guid,
        type_name: type_name.to_string(),
        unique_name: None,
        classifications: Vec::new(),
    })
}
