//! Classification projection: raw classification records become
//! read-only output views. Classifications are never drained — their
//! bags are projected generically, not consumed field by field.

use crate::converter::ConverterContext;
use crate::header::{element_status, element_type_info, origin_block};
use metabridge_beans::{ElementClassification, ElementVersions};
use metabridge_types::ClassificationRecord;

/// Builds the view of one attached classification, applying the same
/// status/origin/version mapping as the element header to the
/// classification's own audit fields.
#[must_use]
pub fn classification_view(
    ctx: &ConverterContext<'_>,
    record: &ClassificationRecord,
) -> ElementClassification {
    ElementClassification {
        classification_name: record.name.clone(),
        classification_type: Some(element_type_info(ctx.registry, &record.name)),
        status: element_status(record.status),
        origin: origin_block(
            &ctx.source_server,
            record.provenance,
            record.metadata_collection_id.as_ref(),
            record.metadata_collection_name.as_ref(),
            record.license.as_ref(),
        ),
        versions: ElementVersions {
            created_by: record.created_by.clone(),
            create_time: record.create_time,
            updated_by: record.updated_by.clone(),
            update_time: record.update_time,
            maintained_by: record.maintained_by.clone(),
            version: record.version,
        },
        classification_properties: record.properties.to_value_map(),
    }
}

/// Projects a classification list to views; an empty list yields `None`,
/// never an empty vector.
#[must_use]
pub fn classification_views(
    ctx: &ConverterContext<'_>,
    records: &[ClassificationRecord],
) -> Option<Vec<ElementClassification>> {
    if records.is_empty() {
        return None;
    }
    Some(
        records
            .iter()
            .map(|record| classification_view(ctx, record))
            .collect(),
    )
}
