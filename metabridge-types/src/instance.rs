//! Raw metadata records: entities, relationships, classifications.
//!
//! Records arrive fully hydrated from the (out-of-scope) record source.
//! The engine treats them as read-only input; all drain/mutate work
//! happens on per-call working copies of the property bag.

use crate::{Guid, InstanceProvenance, InstanceStatus, PropertyBag};
use serde::{Deserialize, Serialize};

/// Identity, status, origin, and version metadata common to stored
/// entities and relationships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditHeader {
    pub guid: Guid,
    /// Name of the instance's declared type; resolved against the type
    /// registry during conversion.
    pub type_name: String,
    pub status: InstanceStatus,
    pub provenance: InstanceProvenance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_collection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_collection_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    pub created_by: String,
    /// Milliseconds since the Unix epoch.
    pub create_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintained_by: Option<Vec<String>>,
    pub version: i64,
}

impl AuditHeader {
    /// A minimal header for a freshly sourced instance; fixtures fill in
    /// the rest field by field.
    #[must_use]
    pub fn new(guid: Guid, type_name: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            guid,
            type_name: type_name.into(),
            status: InstanceStatus::Active,
            provenance: InstanceProvenance::LocalCohort,
            metadata_collection_id: None,
            metadata_collection_name: None,
            license: None,
            created_by: created_by.into(),
            create_time: 0,
            updated_by: None,
            update_time: None,
            maintained_by: None,
            version: 1,
        }
    }
}

/// A stored entity: audit header, property bag, attached classifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub header: AuditHeader,
    #[serde(default)]
    pub properties: PropertyBag,
    #[serde(default)]
    pub classifications: Vec<ClassificationRecord>,
}

/// A lightweight stand-in for an entity at a relationship end, used when
/// the full record was not hydrated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityProxy {
    pub guid: Guid,
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
    #[serde(default)]
    pub classifications: Vec<ClassificationRecord>,
}

/// One end of a relationship: either a full entity record or a proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "end", rename_all = "snake_case")]
pub enum RecordEnd {
    Full(Box<EntityRecord>),
    Proxy(EntityProxy),
}

impl RecordEnd {
    /// GUID of the entity at this end.
    #[must_use]
    pub fn guid(&self) -> Guid {
        match self {
            RecordEnd::Full(entity) => entity.header.guid,
            RecordEnd::Proxy(proxy) => proxy.guid,
        }
    }

    /// Declared type name of the entity at this end.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            RecordEnd::Full(entity) => &entity.header.type_name,
            RecordEnd::Proxy(proxy) => &proxy.type_name,
        }
    }

    /// Unique name of the entity at this end, when known. For a full
    /// record this is the `qualifiedName` property.
    #[must_use]
    pub fn unique_name(&self) -> Option<&str> {
        match self {
            RecordEnd::Full(entity) => match entity.properties.get("qualifiedName") {
                Some(crate::TypedValue::String(s)) => Some(s.as_str()),
                _ => None,
            },
            RecordEnd::Proxy(proxy) => proxy.unique_name.as_deref(),
        }
    }

    /// Classifications attached to the entity at this end.
    #[must_use]
    pub fn classifications(&self) -> &[ClassificationRecord] {
        match self {
            RecordEnd::Full(entity) => &entity.classifications,
            RecordEnd::Proxy(proxy) => &proxy.classifications,
        }
    }
}

/// A stored relationship linking two entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub header: AuditHeader,
    #[serde(default)]
    pub properties: PropertyBag,
    pub end_one: RecordEnd,
    pub end_two: RecordEnd,
}

impl RelationshipRecord {
    /// The end whose GUID differs from `guid`, i.e. the counterpart of the
    /// given entity in this relationship. Falls back to end two when both
    /// ends carry the same GUID (self-referencing link).
    #[must_use]
    pub fn other_end(&self, guid: Guid) -> &RecordEnd {
        if self.end_one.guid() == guid {
            &self.end_two
        } else {
            &self.end_one
        }
    }
}

/// A classification attached to an entity. Carries its own audit fields
/// (status, provenance, versions) but no independent GUID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Classification name; doubles as its type name in the registry.
    pub name: String,
    #[serde(default)]
    pub properties: PropertyBag,
    pub status: InstanceStatus,
    pub provenance: InstanceProvenance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_collection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_collection_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    pub created_by: String,
    pub create_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintained_by: Option<Vec<String>>,
    pub version: i64,
}

impl ClassificationRecord {
    /// A minimal active classification; fixtures fill in the rest.
    #[must_use]
    pub fn new(name: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: PropertyBag::new(),
            status: InstanceStatus::Active,
            provenance: InstanceProvenance::LocalCohort,
            metadata_collection_id: None,
            metadata_collection_name: None,
            license: None,
            created_by: created_by.into(),
            create_time: 0,
            updated_by: None,
            update_time: None,
            maintained_by: None,
            version: 1,
        }
    }
}
