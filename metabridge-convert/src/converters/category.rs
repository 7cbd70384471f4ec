//! Converter for glossary categories — the canonical triaged family.
//!
//! A category's related records are disambiguated into: the anchoring
//! glossary (singular), member terms, external references, and the
//! orientation-sensitive category hierarchy (children when this category
//! is the first end of the link, the singular parent otherwise).
//! Anything unrecognized lands in the catch-all bucket.

use crate::converter::{Converter, ConverterContext, InputShape, RelatedRecord};
use crate::converters::{related_by_snapshot, render_diagram};
use crate::header::build_element_header;
use crate::properties::PropertyDrain;
use crate::triage::{triage_related_records, TriageRule};
use crate::ConversionResult;
use metabridge_beans::GlossaryCategory;
use metabridge_registry::names;
use metabridge_types::{EntityRecord, RelationshipRecord};

const TERMS_BUCKET: &str = "terms";
const EXTERNAL_REFERENCES_BUCKET: &str = "externalReferences";

/// Recognized relationship kinds for a category, tested in order.
const TRIAGE_RULES: &[TriageRule] = &[
    TriageRule::anchor(names::CATEGORY_ANCHOR_TYPE_NAME),
    TriageRule::bucket(names::TERM_CATEGORIZATION_TYPE_NAME, TERMS_BUCKET),
    TriageRule::bucket(
        names::LIBRARY_CATEGORY_REFERENCE_TYPE_NAME,
        EXTERNAL_REFERENCES_BUCKET,
    ),
    TriageRule::oriented(names::CATEGORY_HIERARCHY_LINK_TYPE_NAME),
];

pub struct GlossaryCategoryConverter;

impl GlossaryCategoryConverter {
    fn assemble(
        &self,
        ctx: &ConverterContext<'_>,
        operation: &'static str,
        entity: &EntityRecord,
    ) -> ConversionResult<GlossaryCategory> {
        self.validate_entity(entity)?;
        self.check_entity_type(ctx, entity, names::GLOSSARY_CATEGORY_TYPE_NAME)?;

        let mut bean: GlossaryCategory = ctx
            .factory
            .instantiate_as(self.bean_type_name(), self.converter_name())?;
        bean.element_header = build_element_header(
            ctx,
            self.bean_type_name(),
            operation,
            "entity",
            Some(&entity.header),
            &entity.classifications,
        )?;

        let mut drain = PropertyDrain::new(Some(&entity.properties));
        let props = &mut bean.properties;
        props.qualified_name = drain.remove_string(names::QUALIFIED_NAME_PROPERTY_NAME);
        props.display_name = drain.remove_string(names::DISPLAY_NAME_PROPERTY_NAME);
        props.description = drain.remove_string(names::DESCRIPTION_PROPERTY_NAME);
        props.additional_properties =
            drain.remove_string_map(names::ADDITIONAL_PROPERTIES_PROPERTY_NAME);
        props.extended_properties = drain.residual_properties();

        Ok(bean)
    }
}

impl Converter for GlossaryCategoryConverter {
    type Bean = GlossaryCategory;

    fn converter_name(&self) -> &'static str {
        "GlossaryCategoryConverter"
    }

    fn bean_type_name(&self) -> &str {
        names::GLOSSARY_CATEGORY_TYPE_NAME
    }

    fn supported_shapes(&self) -> &'static [InputShape] {
        &[InputShape::Entity, InputShape::RelatedRecords]
    }

    fn bean_from_entity(
        &self,
        ctx: &ConverterContext<'_>,
        entity: Option<&EntityRecord>,
    ) -> ConversionResult<GlossaryCategory> {
        const OPERATION: &str = "bean_from_entity";

        let entity = self.require_entity(OPERATION, entity)?;
        let mut bean = self.assemble(ctx, OPERATION, entity)?;
        bean.diagram = render_diagram(ctx, &bean);
        Ok(bean)
    }

    fn bean_from_related_records(
        &self,
        ctx: &ConverterContext<'_>,
        primary: Option<&EntityRecord>,
        relationship: Option<&RelationshipRecord>,
        related: &[RelatedRecord],
    ) -> ConversionResult<GlossaryCategory> {
        const OPERATION: &str = "bean_from_related_records";

        let primary = self.require_entity(OPERATION, primary)?;
        let mut bean = self.assemble(ctx, OPERATION, primary)?;

        if let Some(relationship) = relationship {
            self.validate_relationship(relationship)?;
            bean.related_by = Some(related_by_snapshot(
                ctx,
                self.bean_type_name(),
                OPERATION,
                primary.header.guid,
                relationship,
            )?);
        }

        let mut outcome =
            triage_related_records(ctx, TRIAGE_RULES, primary.header.guid, related);
        bean.anchor = outcome.anchor.take();
        bean.parent_category = outcome.parent.take();
        bean.child_categories = outcome.take_children();
        bean.terms = outcome.take_bucket(TERMS_BUCKET);
        bean.external_references = outcome.take_bucket(EXTERNAL_REFERENCES_BUCKET);
        bean.other_related_elements = outcome.take_other();

        bean.diagram = render_diagram(ctx, &bean);
        Ok(bean)
    }
}
