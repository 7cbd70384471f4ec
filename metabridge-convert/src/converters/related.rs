//! Converter for pure-relationship beans: the relationship itself is
//! the result, with a stub for each end.

use crate::converter::{Converter, ConverterContext, InputShape};
use crate::header::build_element_header;
use crate::triage::stub_from_end;
use crate::ConversionResult;
use metabridge_beans::RelatedElements;
use metabridge_types::RelationshipRecord;

/// Bean type name for the relationship-only family. Relationships are
/// presented under this umbrella name rather than their individual
/// relationship types.
pub const RELATED_ELEMENTS_BEAN_TYPE_NAME: &str = "RelatedElements";

pub struct RelatedElementsConverter;

impl Converter for RelatedElementsConverter {
    type Bean = RelatedElements;

    fn converter_name(&self) -> &'static str {
        "RelatedElementsConverter"
    }

    fn bean_type_name(&self) -> &str {
        RELATED_ELEMENTS_BEAN_TYPE_NAME
    }

    fn supported_shapes(&self) -> &'static [InputShape] {
        &[InputShape::Relationship]
    }

    fn bean_from_relationship(
        &self,
        ctx: &ConverterContext<'_>,
        relationship: Option<&RelationshipRecord>,
    ) -> ConversionResult<RelatedElements> {
        const OPERATION: &str = "bean_from_relationship";

        let relationship = self.require_relationship(OPERATION, relationship)?;
        self.validate_relationship(relationship)?;

        let mut bean: RelatedElements = ctx
            .factory
            .instantiate_as(self.bean_type_name(), self.converter_name())?;
        bean.relationship_header = build_element_header(
            ctx,
            self.bean_type_name(),
            OPERATION,
            "relationship",
            Some(&relationship.header),
            &[],
        )?;
        bean.relationship_properties = relationship.properties.to_value_map();
        bean.end_one = Some(stub_from_end(&relationship.end_one));
        bean.end_two = Some(stub_from_end(&relationship.end_two));

        Ok(bean)
    }
}
