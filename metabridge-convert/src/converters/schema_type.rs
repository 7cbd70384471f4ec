//! Converter for schema types, which arrive as a constellation of
//! linked records already gathered into a [`SchemaAssembly`].

use crate::converter::{Converter, ConverterContext, InputShape, SchemaAssembly};
use crate::header::{build_element_header, element_type_info};
use crate::properties::PropertyDrain;
use crate::ConversionResult;
use metabridge_beans::SchemaType;
use metabridge_registry::names;

pub struct SchemaTypeConverter;

impl Converter for SchemaTypeConverter {
    type Bean = SchemaType;

    fn converter_name(&self) -> &'static str {
        "SchemaTypeConverter"
    }

    fn bean_type_name(&self) -> &str {
        names::SCHEMA_TYPE_TYPE_NAME
    }

    fn supported_shapes(&self) -> &'static [InputShape] {
        &[InputShape::SchemaAssembly]
    }

    fn bean_from_schema_assembly(
        &self,
        ctx: &ConverterContext<'_>,
        assembly: &SchemaAssembly,
    ) -> ConversionResult<SchemaType> {
        const OPERATION: &str = "bean_from_schema_assembly";

        let mut bean: SchemaType = ctx
            .factory
            .instantiate_as(self.bean_type_name(), self.converter_name())?;
        bean.element_header = build_element_header(
            ctx,
            self.bean_type_name(),
            OPERATION,
            "schema type",
            assembly.audit.as_ref(),
            &assembly.classifications,
        )?;

        // The assembly names the specific subtype to present, which can
        // be narrower than the root record's declared type.
        if !assembly.type_name.is_empty()
            && assembly.type_name != bean.element_header.element_type.type_name
        {
            bean.element_header.element_type = element_type_info(ctx.registry, &assembly.type_name);
        }

        let mut drain = PropertyDrain::new(Some(&assembly.properties));
        let props = &mut bean.properties;
        props.qualified_name = drain.remove_string(names::QUALIFIED_NAME_PROPERTY_NAME);
        props.display_name = drain.remove_string(names::DISPLAY_NAME_PROPERTY_NAME);
        props.description = drain.remove_string(names::DESCRIPTION_PROPERTY_NAME);
        props.version_number = drain.remove_string(names::VERSION_NUMBER_PROPERTY_NAME);
        props.author = drain.remove_string(names::AUTHOR_PROPERTY_NAME);
        props.usage = drain.remove_string(names::USAGE_PROPERTY_NAME);
        props.encoding_standard = drain.remove_string(names::ENCODING_STANDARD_PROPERTY_NAME);
        props.namespace = drain.remove_string(names::NAMESPACE_PROPERTY_NAME);
        props.is_deprecated = drain.remove_boolean(names::IS_DEPRECATED_PROPERTY_NAME);
        props.additional_properties =
            drain.remove_string_map(names::ADDITIONAL_PROPERTIES_PROPERTY_NAME);
        props.extended_properties = drain.residual_properties();

        bean.attribute_count = assembly.attribute_count;
        bean.external_schema_type = assembly.external_schema_type.clone().map(Box::new);
        bean.map_from_element = assembly.map_from_element.clone().map(Box::new);
        bean.map_to_element = assembly.map_to_element.clone().map(Box::new);
        bean.schema_options = (!assembly.schema_options.is_empty())
            .then(|| assembly.schema_options.clone());
        bean.queries = (!assembly.queries.is_empty()).then(|| assembly.queries.clone());

        Ok(bean)
    }
}
