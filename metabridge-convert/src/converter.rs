//! The generic converter contract.
//!
//! A [`Converter`] exposes seven assembly operations, one per recognized
//! input shape. Every operation defaults to a loud
//! `UnimplementedConverterMethod` failure naming the operation, the
//! converter, and the target bean type; a concrete converter overrides
//! only the operations its bean family supports and declares that set
//! via [`Converter::supported_shapes`], which the bean factory validates
//! at registration time.

use crate::factory::BeanFactory;
use crate::{ConversionError, ConversionResult};
use metabridge_beans::{DerivedSchemaTypeQueryTarget, SchemaType};
use metabridge_registry::TypeRegistry;
use metabridge_types::{
    AuditHeader, ClassificationRecord, EntityRecord, PropertyBag, RelationshipRecord,
};
use serde::{Deserialize, Serialize};

/// The input shapes a converter can accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputShape {
    /// A single entity.
    Entity,
    /// An entity plus the relationship it was retrieved through.
    EntityAndRelationship,
    /// A primary entity plus all of its attached relationships.
    AttachedRelationships,
    /// A primary entity, an optional retrieval relationship, and a list
    /// of (relationship, counterpart) pairs for triage.
    RelatedRecords,
    /// A primary entity plus supplementary entities and the
    /// relationships linking them.
    LinkedEntities,
    /// A relationship on its own.
    Relationship,
    /// A schema-type constellation of linked records.
    SchemaAssembly,
}

impl InputShape {
    /// The dispatch operation implementing this shape.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            InputShape::Entity => "bean_from_entity",
            InputShape::EntityAndRelationship => "bean_from_entity_and_relationship",
            InputShape::AttachedRelationships => "bean_from_attached_relationships",
            InputShape::RelatedRecords => "bean_from_related_records",
            InputShape::LinkedEntities => "bean_from_linked_entities",
            InputShape::Relationship => "bean_from_relationship",
            InputShape::SchemaAssembly => "bean_from_schema_assembly",
        }
    }
}

/// One (relationship, counterpart entity) pair for triage. Either half
/// may be missing; triage skips pairs it cannot orient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedRecord {
    pub relationship: Option<RelationshipRecord>,
    pub entity: Option<EntityRecord>,
}

impl RelatedRecord {
    #[must_use]
    pub fn new(relationship: RelationshipRecord, entity: EntityRecord) -> Self {
        Self {
            relationship: Some(relationship),
            entity: Some(entity),
        }
    }
}

/// The pieces of a schema type, which is stored as a constellation of
/// linked records rather than one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaAssembly {
    /// Audit header of the root schema-type record.
    pub audit: Option<AuditHeader>,
    /// The specific schema-type name to present, which may be a subtype
    /// of the root record's declared type.
    pub type_name: String,
    #[serde(default)]
    pub properties: PropertyBag,
    #[serde(default)]
    pub classifications: Vec<ClassificationRecord>,
    pub attribute_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_schema_type: Option<SchemaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_from_element: Option<SchemaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_to_element: Option<SchemaType>,
    #[serde(default)]
    pub schema_options: Vec<SchemaType>,
    #[serde(default)]
    pub queries: Vec<DerivedSchemaTypeQueryTarget>,
}

/// External helper that renders a diagram for a fully populated bean.
/// Invoked, never implemented, by the engine; families that support
/// diagrams attach the returned text verbatim.
pub trait DiagramRenderer: Send + Sync {
    fn render(&self, bean: &serde_json::Value) -> Option<String>;
}

/// Call-scoped capabilities handed to every conversion operation.
///
/// The registry and factory are shared read-only resources; nothing in
/// the context is mutated by a conversion, so a single context can serve
/// concurrent calls.
pub struct ConverterContext<'a> {
    pub registry: &'a dyn TypeRegistry,
    pub factory: &'a BeanFactory,
    /// Service scope passed to subtype queries, for diagnostics.
    pub service_name: String,
    /// Identity of the server answering the request; copied verbatim
    /// into every origin block.
    pub source_server: String,
    pub renderer: Option<&'a dyn DiagramRenderer>,
}

impl<'a> ConverterContext<'a> {
    #[must_use]
    pub fn new(
        registry: &'a dyn TypeRegistry,
        factory: &'a BeanFactory,
        service_name: impl Into<String>,
        source_server: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            factory,
            service_name: service_name.into(),
            source_server: source_server.into(),
            renderer: None,
        }
    }

    /// Builder-style diagram renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: &'a dyn DiagramRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }
}

/// A converter for one bean family.
///
/// Default operations fail with `UnimplementedConverterMethod`; the
/// overridden set must match [`Converter::supported_shapes`].
pub trait Converter: Send + Sync {
    /// The bean family this converter produces.
    type Bean;

    /// Converter identity, used in error reports.
    fn converter_name(&self) -> &'static str;

    /// Name of the output type this converter is registered under.
    fn bean_type_name(&self) -> &str;

    /// The input shapes this family supports. Checked against the bean
    /// factory registration.
    fn supported_shapes(&self) -> &'static [InputShape];

    // ── Dispatch operations ──────────────────────────────────────

    fn bean_from_entity(
        &self,
        ctx: &ConverterContext<'_>,
        entity: Option<&EntityRecord>,
    ) -> ConversionResult<Self::Bean> {
        let _ = (ctx, entity);
        Err(self.unimplemented(InputShape::Entity))
    }

    fn bean_from_entity_and_relationship(
        &self,
        ctx: &ConverterContext<'_>,
        entity: Option<&EntityRecord>,
        relationship: Option<&RelationshipRecord>,
    ) -> ConversionResult<Self::Bean> {
        let _ = (ctx, entity, relationship);
        Err(self.unimplemented(InputShape::EntityAndRelationship))
    }

    fn bean_from_attached_relationships(
        &self,
        ctx: &ConverterContext<'_>,
        primary: Option<&EntityRecord>,
        relationships: &[RelationshipRecord],
    ) -> ConversionResult<Self::Bean> {
        let _ = (ctx, primary, relationships);
        Err(self.unimplemented(InputShape::AttachedRelationships))
    }

    fn bean_from_related_records(
        &self,
        ctx: &ConverterContext<'_>,
        primary: Option<&EntityRecord>,
        relationship: Option<&RelationshipRecord>,
        related: &[RelatedRecord],
    ) -> ConversionResult<Self::Bean> {
        let _ = (ctx, primary, relationship, related);
        Err(self.unimplemented(InputShape::RelatedRecords))
    }

    fn bean_from_linked_entities(
        &self,
        ctx: &ConverterContext<'_>,
        primary: Option<&EntityRecord>,
        supplementary: &[EntityRecord],
        relationships: &[RelationshipRecord],
    ) -> ConversionResult<Self::Bean> {
        let _ = (ctx, primary, supplementary, relationships);
        Err(self.unimplemented(InputShape::LinkedEntities))
    }

    fn bean_from_relationship(
        &self,
        ctx: &ConverterContext<'_>,
        relationship: Option<&RelationshipRecord>,
    ) -> ConversionResult<Self::Bean> {
        let _ = (ctx, relationship);
        Err(self.unimplemented(InputShape::Relationship))
    }

    fn bean_from_schema_assembly(
        &self,
        ctx: &ConverterContext<'_>,
        assembly: &SchemaAssembly,
    ) -> ConversionResult<Self::Bean> {
        let _ = (ctx, assembly);
        Err(self.unimplemented(InputShape::SchemaAssembly))
    }

    // ── Provided helpers ─────────────────────────────────────────

    /// The failure every unsupported operation reports.
    fn unimplemented(&self, shape: InputShape) -> ConversionError {
        ConversionError::UnimplementedConverterMethod {
            converter: self.converter_name(),
            operation: shape.operation(),
            bean_type: self.bean_type_name().to_string(),
        }
    }

    /// Unwraps the primary entity or reports `MissingMetadataInstance`.
    fn require_entity<'r>(
        &self,
        operation: &'static str,
        entity: Option<&'r EntityRecord>,
    ) -> ConversionResult<&'r EntityRecord> {
        entity.ok_or_else(|| ConversionError::MissingMetadataInstance {
            record_category: "entity",
            operation,
            bean_type: self.bean_type_name().to_string(),
        })
    }

    /// Unwraps the relationship or reports `MissingMetadataInstance`.
    fn require_relationship<'r>(
        &self,
        operation: &'static str,
        relationship: Option<&'r RelationshipRecord>,
    ) -> ConversionResult<&'r RelationshipRecord> {
        relationship.ok_or_else(|| ConversionError::MissingMetadataInstance {
            record_category: "relationship",
            operation,
            bean_type: self.bean_type_name().to_string(),
        })
    }

    /// Structural validation: the audit header must name a type.
    fn validate_entity(&self, entity: &EntityRecord) -> ConversionResult<()> {
        if entity.header.type_name.is_empty() {
            return Err(ConversionError::BadEntity {
                guid: entity.header.guid.to_string(),
                detail: "audit header has no type name".to_string(),
            });
        }
        Ok(())
    }

    /// Structural validation: the audit header must name a type.
    fn validate_relationship(&self, relationship: &RelationshipRecord) -> ConversionResult<()> {
        if relationship.header.type_name.is_empty() {
            return Err(ConversionError::BadRelationship {
                guid: relationship.header.guid.to_string(),
                detail: "audit header has no type name".to_string(),
            });
        }
        Ok(())
    }

    /// Checks the entity's declared type against the expected type via
    /// the registry's subtype matching.
    fn check_entity_type(
        &self,
        ctx: &ConverterContext<'_>,
        entity: &EntityRecord,
        expected_type: &str,
    ) -> ConversionResult<()> {
        if ctx
            .registry
            .is_subtype_of(&ctx.service_name, &entity.header.type_name, expected_type)
        {
            Ok(())
        } else {
            Err(ConversionError::BadInstanceType {
                guid: entity.header.guid.to_string(),
                actual_type: entity.header.type_name.clone(),
                expected_type: expected_type.to_string(),
            })
        }
    }
}
