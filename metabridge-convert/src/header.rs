//! Element header assembly: identity, resolved type info, status,
//! origin, and version blocks, built fresh for every conversion call.

use crate::classifications::classification_views;
use crate::converter::ConverterContext;
use crate::{ConversionError, ConversionResult};
use metabridge_beans::{
    ElementHeader, ElementOrigin, ElementOriginCategory, ElementStatus, ElementType,
    ElementVersions,
};
use metabridge_registry::TypeRegistry;
use metabridge_types::{AuditHeader, ClassificationRecord, InstanceProvenance, InstanceStatus};
use tracing::warn;

/// Maps an internal status code to the public enumeration. Fixed
/// one-to-one table; there is no unmapped input today, but any future
/// addition surfaces as `Unknown` rather than a failure.
#[must_use]
pub fn element_status(status: InstanceStatus) -> ElementStatus {
    match status {
        InstanceStatus::Unknown => ElementStatus::Unknown,
        InstanceStatus::Draft => ElementStatus::Draft,
        InstanceStatus::Prepared => ElementStatus::Prepared,
        InstanceStatus::Proposed => ElementStatus::Proposed,
        InstanceStatus::Approved => ElementStatus::Approved,
        InstanceStatus::Rejected => ElementStatus::Rejected,
        InstanceStatus::ApprovedConcept => ElementStatus::ApprovedConcept,
        InstanceStatus::UnderDevelopment => ElementStatus::UnderDevelopment,
        InstanceStatus::DevelopmentComplete => ElementStatus::DevelopmentComplete,
        InstanceStatus::ApprovedForDeployment => ElementStatus::ApprovedForDeployment,
        InstanceStatus::Standby => ElementStatus::Standby,
        InstanceStatus::Active => ElementStatus::Active,
        InstanceStatus::Failed => ElementStatus::Failed,
        InstanceStatus::Disabled => ElementStatus::Disabled,
        InstanceStatus::Complete => ElementStatus::Complete,
        InstanceStatus::Deprecated => ElementStatus::Deprecated,
        InstanceStatus::Deleted => ElementStatus::Deleted,
        InstanceStatus::Other => ElementStatus::Other,
    }
}

/// Maps an internal provenance code to the public origin category.
#[must_use]
pub fn origin_category(provenance: InstanceProvenance) -> ElementOriginCategory {
    match provenance {
        InstanceProvenance::Unknown => ElementOriginCategory::Unknown,
        InstanceProvenance::LocalCohort => ElementOriginCategory::LocalCohort,
        InstanceProvenance::ExportArchive => ElementOriginCategory::ExportArchive,
        InstanceProvenance::ContentPack => ElementOriginCategory::ContentPack,
        InstanceProvenance::DeregisteredRepository => ElementOriginCategory::DeregisteredRepository,
        InstanceProvenance::Configuration => ElementOriginCategory::Configuration,
        InstanceProvenance::ExternalSource => ElementOriginCategory::ExternalSource,
    }
}

/// Resolves a type name to its public view. An unregistered name still
/// produces a usable view carrying just the name, so a registry gap does
/// not abort the conversion.
#[must_use]
pub fn element_type_info(registry: &dyn TypeRegistry, type_name: &str) -> ElementType {
    match registry.resolve(type_name) {
        Some(descriptor) => ElementType {
            type_id: descriptor.id.clone(),
            type_name: descriptor.name.clone(),
            type_version: descriptor.version,
            type_description: descriptor.description.clone(),
            super_type_names: if descriptor.super_types.is_empty() {
                None
            } else {
                Some(descriptor.super_types.clone())
            },
        },
        None => {
            warn!(type_name, "type not registered; presenting name only");
            ElementType {
                type_id: String::new(),
                type_name: type_name.to_string(),
                type_version: 1,
                type_description: None,
                super_type_names: None,
            }
        }
    }
}

pub(crate) fn origin_block(
    source_server: &str,
    provenance: InstanceProvenance,
    collection_id: Option<&String>,
    collection_name: Option<&String>,
    license: Option<&String>,
) -> ElementOrigin {
    ElementOrigin {
        source_server: source_server.to_string(),
        origin_category: origin_category(provenance),
        home_metadata_collection_id: collection_id.cloned(),
        home_metadata_collection_name: collection_name.cloned(),
        license: license.cloned(),
    }
}

fn versions_block(audit: &AuditHeader) -> ElementVersions {
    ElementVersions {
        created_by: audit.created_by.clone(),
        create_time: audit.create_time,
        updated_by: audit.updated_by.clone(),
        update_time: audit.update_time,
        maintained_by: audit.maintained_by.clone(),
        version: audit.version,
    }
}

/// Builds the common element header from a record's audit header plus
/// its classifications.
///
/// A missing audit header means the caller handed over an incomplete
/// record; that is `MissingMetadataInstance`, carrying the record
/// category that was expected and the bean type being assembled.
pub fn build_element_header(
    ctx: &ConverterContext<'_>,
    bean_type: &str,
    operation: &'static str,
    record_category: &'static str,
    audit: Option<&AuditHeader>,
    classifications: &[ClassificationRecord],
) -> ConversionResult<ElementHeader> {
    let audit = audit.ok_or_else(|| ConversionError::MissingMetadataInstance {
        record_category,
        operation,
        bean_type: bean_type.to_string(),
    })?;

    Ok(ElementHeader {
        guid: audit.guid,
        element_type: element_type_info(ctx.registry, &audit.type_name),
        status: element_status(audit.status),
        origin: origin_block(
            &ctx.source_server,
            audit.provenance,
            audit.metadata_collection_id.as_ref(),
            audit.metadata_collection_name.as_ref(),
            audit.license.as_ref(),
        ),
        versions: versions_block(audit),
        classifications: classification_views(ctx, classifications),
    })
}
