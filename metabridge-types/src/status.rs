//! Internal status and provenance codes carried on audit headers.
//!
//! These are the repository-side enumerations. The conversion engine maps
//! them to the public `ElementStatus` / `ElementOriginCategory` views via
//! fixed one-to-one tables in `metabridge-convert`.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a stored instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceStatus {
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

/// How an instance came to be in the local repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceProvenance {
    #[default]
    Unknown,
    LocalCohort,
    ExportArchive,
    ContentPack,
    DeregisteredRepository,
    Configuration,
    ExternalSource,
}
