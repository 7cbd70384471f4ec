//! Converter for glossary terms: built from the entity alone, or from
//! the entity plus the relationship it was retrieved through.

use crate::converter::{Converter, ConverterContext, InputShape};
use crate::converters::{related_by_snapshot, render_diagram};
use crate::header::build_element_header;
use crate::properties::PropertyDrain;
use crate::ConversionResult;
use metabridge_beans::GlossaryTerm;
use metabridge_registry::names;
use metabridge_types::{EntityRecord, RelationshipRecord};

pub struct GlossaryTermConverter;

impl GlossaryTermConverter {
    fn assemble(
        &self,
        ctx: &ConverterContext<'_>,
        operation: &'static str,
        entity: &EntityRecord,
    ) -> ConversionResult<GlossaryTerm> {
        self.validate_entity(entity)?;
        self.check_entity_type(ctx, entity, names::GLOSSARY_TERM_TYPE_NAME)?;

        let mut bean: GlossaryTerm = ctx
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
        props.summary = drain.remove_string(names::SUMMARY_PROPERTY_NAME);
        props.description = drain.remove_string(names::DESCRIPTION_PROPERTY_NAME);
        props.examples = drain.remove_string(names::EXAMPLES_PROPERTY_NAME);
        props.abbreviation = drain.remove_string(names::ABBREVIATION_PROPERTY_NAME);
        props.usage = drain.remove_string(names::USAGE_PROPERTY_NAME);
        props.additional_properties =
            drain.remove_string_map(names::ADDITIONAL_PROPERTIES_PROPERTY_NAME);
        props.extended_properties = drain.residual_properties();

        Ok(bean)
    }
}

impl Converter for GlossaryTermConverter {
    type Bean = GlossaryTerm;

    fn converter_name(&self) -> &'static str {
        "GlossaryTermConverter"
    }

    fn bean_type_name(&self) -> &str {
        names::GLOSSARY_TERM_TYPE_NAME
    }

    fn supported_shapes(&self) -> &'static [InputShape] {
        &[InputShape::Entity, InputShape::EntityAndRelationship]
    }

    fn bean_from_entity(
        &self,
        ctx: &ConverterContext<'_>,
        entity: Option<&EntityRecord>,
    ) -> ConversionResult<GlossaryTerm> {
        const OPERATION: &str = "bean_from_entity";

        let entity = self.require_entity(OPERATION, entity)?;
        let mut bean = self.assemble(ctx, OPERATION, entity)?;
        bean.diagram = render_diagram(ctx, &bean);
        Ok(bean)
    }

    fn bean_from_entity_and_relationship(
        &self,
        ctx: &ConverterContext<'_>,
        entity: Option<&EntityRecord>,
        relationship: Option<&RelationshipRecord>,
    ) -> ConversionResult<GlossaryTerm> {
        const OPERATION: &str = "bean_from_entity_and_relationship";

        let entity = self.require_entity(OPERATION, entity)?;
        let mut bean = self.assemble(ctx, OPERATION, entity)?;

        if let Some(relationship) = relationship {
            self.validate_relationship(relationship)?;
            bean.related_by = Some(related_by_snapshot(
                ctx,
                self.bean_type_name(),
                OPERATION,
                entity.header.guid,
                relationship,
            )?);
        }

        bean.diagram = render_diagram(ctx, &bean);
        Ok(bean)
    }
}
