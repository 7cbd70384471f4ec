//! Generic record-to-bean conversion engine.
//!
//! Transforms graph-shaped raw metadata records (entities, relationships,
//! classifications, each with a dynamic property bag) into the typed
//! beans of `metabridge-beans`, without compile-time knowledge of which
//! bean a caller will request:
//!
//! - [`PropertyDrain`] — typed get/remove extraction over a call-scoped
//!   working bag, with residual capture for forward compatibility
//! - [`build_element_header`] — common identity/status/origin/version
//!   assembly, including classification projection
//! - [`Converter`] — the seven-operation dispatch contract; unsupported
//!   operations fail loudly with the converter and bean type named
//! - [`BeanFactory`] — zero-argument bean construction from a runtime
//!   type name, with construction-time shape validation
//! - [`triage_related_records`] — classification of a flat relationship
//!   list into named semantic buckets
//!
//! Everything is synchronous and reentrant: working state is call-scoped,
//! the registry and factory are shared read-only capabilities.

mod classifications;
mod converter;
pub mod converters;
mod error;
mod factory;
mod header;
mod properties;
mod triage;

pub use classifications::{classification_view, classification_views};
pub use converter::{
    Converter, ConverterContext, DiagramRenderer, InputShape, RelatedRecord, SchemaAssembly,
};
pub use error::{ConversionError, ConversionResult};
pub use factory::BeanFactory;
pub use header::{build_element_header, element_status, element_type_info, origin_category};
pub use properties::PropertyDrain;
pub use triage::{
    stub_from_end, stub_from_entity, triage_related_records, Disposition, TriageOutcome,
    TriageRule,
};
