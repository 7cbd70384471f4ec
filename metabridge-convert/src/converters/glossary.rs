//! Converter for the glossary bean: the simplest family, built from a
//! single entity.

use crate::converter::{Converter, ConverterContext, InputShape};
use crate::header::build_element_header;
use crate::properties::PropertyDrain;
use crate::ConversionResult;
use metabridge_beans::Glossary;
use metabridge_registry::names;
use metabridge_types::EntityRecord;

pub struct GlossaryConverter;

impl Converter for GlossaryConverter {
    type Bean = Glossary;

    fn converter_name(&self) -> &'static str {
        "GlossaryConverter"
    }

    fn bean_type_name(&self) -> &str {
        names::GLOSSARY_TYPE_NAME
    }

    fn supported_shapes(&self) -> &'static [InputShape] {
        &[InputShape::Entity]
    }

    fn bean_from_entity(
        &self,
        ctx: &ConverterContext<'_>,
        entity: Option<&EntityRecord>,
    ) -> ConversionResult<Glossary> {
        const OPERATION: &str = "bean_from_entity";

        let entity = self.require_entity(OPERATION, entity)?;
        self.validate_entity(entity)?;
        self.check_entity_type(ctx, entity, names::GLOSSARY_TYPE_NAME)?;

        let mut bean: Glossary = ctx
            .factory
            .instantiate_as(self.bean_type_name(), self.converter_name())?;
        bean.element_header = build_element_header(
            ctx,
            self.bean_type_name(),
            OPERATION,
            "entity",
            Some(&entity.header),
            &entity.classifications,
        )?;

        let mut drain = PropertyDrain::new(Some(&entity.properties));
        let props = &mut bean.properties;
        props.qualified_name = drain.remove_string(names::QUALIFIED_NAME_PROPERTY_NAME);
        props.display_name = drain.remove_string(names::DISPLAY_NAME_PROPERTY_NAME);
        props.description = drain.remove_string(names::DESCRIPTION_PROPERTY_NAME);
        props.language = drain.remove_string(names::LANGUAGE_PROPERTY_NAME);
        props.usage = drain.remove_string(names::USAGE_PROPERTY_NAME);
        props.additional_properties =
            drain.remove_string_map(names::ADDITIONAL_PROPERTIES_PROPERTY_NAME);
        props.extended_properties = drain.residual_properties();

        Ok(bean)
    }
}
