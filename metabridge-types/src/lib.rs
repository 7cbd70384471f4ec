//! Raw metadata record model for the Metabridge conversion engine.
//!
//! This crate defines the graph-shaped input records the engine converts:
//! - [`Guid`] — instance identifiers
//! - [`TypedValue`] and [`PropertyBag`] — the dynamic, ordered property store
//!   attached to every record
//! - [`AuditHeader`], [`EntityRecord`], [`RelationshipRecord`],
//!   [`ClassificationRecord`] — the records themselves, as supplied by the
//!   (out-of-scope) record source
//! - [`InstanceStatus`], [`InstanceProvenance`] — internal status/provenance
//!   codes carried on audit headers
//!
//! All records are immutable inputs: the engine clones a working property
//! bag per conversion call and never mutates the original.

mod ids;
mod instance;
mod status;
mod values;

pub use ids::Guid;
pub use instance::{
    AuditHeader, ClassificationRecord, EntityProxy, EntityRecord, RecordEnd, RelationshipRecord,
};
pub use status::{InstanceProvenance, InstanceStatus};
pub use values::{PropertyBag, TypedValue};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in record-model operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid GUID: {0}")]
    InvalidGuid(#[from] uuid::Error),
}
