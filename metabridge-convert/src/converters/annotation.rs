//! Converter for annotations: the bean blends the primary entity with
//! several attached relationships (review links carry the review status;
//! everything else names the elements the annotation describes).

use crate::converter::{Converter, ConverterContext, InputShape};
use crate::header::build_element_header;
use crate::properties::PropertyDrain;
use crate::triage::stub_from_end;
use crate::ConversionResult;
use metabridge_beans::Annotation;
use metabridge_registry::names;
use metabridge_types::{EntityRecord, RelationshipRecord, TypedValue};

pub struct AnnotationConverter;

impl Converter for AnnotationConverter {
    type Bean = Annotation;

    fn converter_name(&self) -> &'static str {
        "AnnotationConverter"
    }

    fn bean_type_name(&self) -> &str {
        names::ANNOTATION_TYPE_NAME
    }

    fn supported_shapes(&self) -> &'static [InputShape] {
        &[InputShape::AttachedRelationships]
    }

    fn bean_from_attached_relationships(
        &self,
        ctx: &ConverterContext<'_>,
        primary: Option<&EntityRecord>,
        relationships: &[RelationshipRecord],
    ) -> ConversionResult<Annotation> {
        const OPERATION: &str = "bean_from_attached_relationships";

        let primary = self.require_entity(OPERATION, primary)?;
        self.validate_entity(primary)?;
        self.check_entity_type(ctx, primary, names::ANNOTATION_TYPE_NAME)?;

        let mut bean: Annotation = ctx
            .factory
            .instantiate_as(self.bean_type_name(), self.converter_name())?;
        bean.element_header = build_element_header(
            ctx,
            self.bean_type_name(),
            OPERATION,
            "entity",
            Some(&primary.header),
            &primary.classifications,
        )?;

        let mut drain = PropertyDrain::new(Some(&primary.properties));
        let props = &mut bean.properties;
        props.annotation_type = drain.remove_string(names::ANNOTATION_TYPE_PROPERTY_NAME);
        props.summary = drain.remove_string(names::SUMMARY_PROPERTY_NAME);
        props.confidence_level = drain.remove_int(names::CONFIDENCE_LEVEL_PROPERTY_NAME);
        props.expression = drain.remove_string(names::EXPRESSION_PROPERTY_NAME);
        props.explanation = drain.remove_string(names::EXPLANATION_PROPERTY_NAME);
        props.analysis_step = drain.remove_string(names::ANALYSIS_STEP_PROPERTY_NAME);
        props.json_properties = drain.remove_string(names::JSON_PROPERTIES_PROPERTY_NAME);
        props.additional_properties =
            drain.remove_string_map(names::ADDITIONAL_PROPERTIES_PROPERTY_NAME);
        props.extended_properties = drain.residual_properties();

        let mut reviews = Vec::new();
        let mut annotated = Vec::new();
        for relationship in relationships {
            self.validate_relationship(relationship)?;
            let far_end = relationship.other_end(primary.header.guid);
            let is_review = ctx.registry.is_subtype_of(
                &ctx.service_name,
                &relationship.header.type_name,
                names::ANNOTATION_REVIEW_LINK_TYPE_NAME,
            );
            if is_review {
                // The review link carries the status; last link wins.
                match relationship
                    .properties
                    .get(names::ANNOTATION_STATUS_PROPERTY_NAME)
                {
                    Some(TypedValue::String(status)) => {
                        bean.review_status = Some(status.clone());
                    }
                    Some(TypedValue::Enum { symbol, .. }) => {
                        bean.review_status = Some(symbol.clone());
                    }
                    _ => {}
                }
                reviews.push(stub_from_end(far_end));
            } else {
                annotated.push(stub_from_end(far_end));
            }
        }
        bean.reviews = (!reviews.is_empty()).then_some(reviews);
        bean.annotated_elements = (!annotated.is_empty()).then_some(annotated);

        Ok(bean)
    }
}
