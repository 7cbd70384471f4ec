//! Typed output beans produced by the Metabridge conversion engine.
//!
//! Every bean starts from an [`ElementHeader`] (identity, resolved type
//! info, status, origin, versions, classification views) and adds a
//! family-specific properties block plus, for the richer families, named
//! relationship buckets. A bucket that received nothing stays `None` and
//! is omitted from the serialized form — callers treat "unset" and
//! "empty" as the same observable state.
//!
//! All beans are `Default`-constructible so the factory registry can
//! zero-initialize them from a runtime type name.

mod annotation;
mod connection;
mod element;
mod glossary;
mod related;
mod schema_type;

pub use annotation::{Annotation, AnnotationProperties};
pub use connection::{
    Connection, ConnectionProperties, ConnectorType, ConnectorTypeProperties, Endpoint,
    EndpointProperties,
};
pub use element::{
    ElementClassification, ElementHeader, ElementOrigin, ElementOriginCategory, ElementStatus,
    ElementStub, ElementType, ElementVersions,
};
pub use glossary::{
    Glossary, GlossaryCategory, GlossaryCategoryProperties, GlossaryProperties, GlossaryTerm,
    GlossaryTermProperties, RelatedBy,
};
pub use related::RelatedElements;
pub use schema_type::{DerivedSchemaTypeQueryTarget, SchemaType, SchemaTypeProperties};

/// Generic name→value projection used for classification properties,
/// relationship snapshots, and extended (residual) properties.
pub type ValueMap = serde_json::Map<String, serde_json::Value>;
