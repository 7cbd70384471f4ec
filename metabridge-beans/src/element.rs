//! Common element metadata shared by every bean.

use crate::ValueMap;
use metabridge_types::Guid;
use serde::{Deserialize, Serialize};

/// Public lifecycle status of an element. Mapped one-to-one from the
/// internal `InstanceStatus` codes; anything unmapped surfaces as
/// `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementStatus {
    #[default]
    Unknown,
    Draft,
    Prepared,
    Proposed,
    Approved,
    Rejected,
    ApprovedConcept,
    UnderDevelopment,
    DevelopmentComplete,
    ApprovedForDeployment,
    Standby,
    Active,
    Failed,
    Disabled,
    Complete,
    Deprecated,
    Deleted,
    Other,
}

/// Where an element originated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementOriginCategory {
    #[default]
    Unknown,
    LocalCohort,
    ExportArchive,
    ContentPack,
    DeregisteredRepository,
    Configuration,
    ExternalSource,
}

/// Resolved type information for an element, looked up in the type
/// registry at conversion time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementType {
    pub type_id: String,
    pub type_name: String,
    pub type_version: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_description: Option<String>,
    /// Super-type chain in registry order; omitted when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_type_names: Option<Vec<String>>,
}

/// Origin block: which server supplied the element and how it came to be
/// in that server's repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementOrigin {
    pub source_server: String,
    pub origin_category: ElementOriginCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_metadata_collection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_metadata_collection_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// Version block, copied verbatim from the audit header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementVersions {
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

/// View of one classification attached to an element. Built with the
/// same status/origin/version mapping as the element header; properties
/// are a read-only generic projection, never drained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementClassification {
    pub classification_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_type: Option<ElementType>,
    pub status: ElementStatus,
    pub origin: ElementOrigin,
    pub versions: ElementVersions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_properties: Option<ValueMap>,
}

/// Common identity/status/origin/version metadata on every bean. Built
/// fresh per conversion call, immutable once returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementHeader {
    pub guid: Guid,
    pub element_type: ElementType,
    pub status: ElementStatus,
    pub origin: ElementOrigin,
    pub versions: ElementVersions,
    /// Classification views; `None` when the element carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifications: Option<Vec<ElementClassification>>,
}

/// A lightweight reference to a related element, used inside triage
/// buckets where the full bean is not wanted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementStub {
    pub guid: Guid,
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
}

impl ElementStub {
    #[must_use]
    pub fn new(guid: Guid, type_name: impl Into<String>) -> Self {
        Self {
            guid,
            type_name: type_name.into(),
            unique_name: None,
        }
    }

    /// Builder-style unique name.
    #[must_use]
    pub fn with_unique_name(mut self, unique_name: impl Into<String>) -> Self {
        self.unique_name = Some(unique_name.into());
        self
    }
}
