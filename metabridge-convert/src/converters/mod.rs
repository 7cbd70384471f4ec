//! Concrete converters, one per bean family. Each overrides exactly the
//! dispatch operations its family supports; everything else fails loudly
//! through the trait defaults.

mod annotation;
mod category;
mod connection;
mod glossary;
mod related;
mod schema_type;
mod term;

pub use annotation::AnnotationConverter;
pub use category::GlossaryCategoryConverter;
pub use connection::ConnectionConverter;
pub use glossary::GlossaryConverter;
pub use related::{RelatedElementsConverter, RELATED_ELEMENTS_BEAN_TYPE_NAME};
pub use schema_type::SchemaTypeConverter;
pub use term::GlossaryTermConverter;

use crate::converter::ConverterContext;
use crate::header::build_element_header;
use crate::triage::stub_from_end;
use crate::ConversionResult;
use metabridge_beans::RelatedBy;
use metabridge_types::{Guid, RelationshipRecord};
use serde::Serialize;

/// Hands the fully populated bean to the external diagram renderer, when
/// one is configured. The returned text is attached verbatim.
pub(crate) fn render_diagram<B: Serialize>(ctx: &ConverterContext<'_>, bean: &B) -> Option<String> {
    let renderer = ctx.renderer?;
    let value = serde_json::to_value(bean).ok()?;
    renderer.render(&value)
}

/// Snapshot of the relationship a bean was retrieved through: its own
/// element header, a generic projection of its properties, and a stub
/// for the far end.
pub(crate) fn related_by_snapshot(
    ctx: &ConverterContext<'_>,
    bean_type: &str,
    operation: &'static str,
    primary_guid: Guid,
    relationship: &RelationshipRecord,
) -> ConversionResult<RelatedBy> {
    Ok(RelatedBy {
        relationship_header: build_element_header(
            ctx,
            bean_type,
            operation,
            "relationship",
            Some(&relationship.header),
            &[],
        )?,
        relationship_properties: relationship.properties.to_value_map(),
        other_end: Some(stub_from_end(relationship.other_end(primary_guid))),
    })
}
