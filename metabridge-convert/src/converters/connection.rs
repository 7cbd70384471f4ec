//! Converter for connections: a composite bean assembled from the
//! primary connection entity plus the connector-type and endpoint
//! entities its relationships link to.

use crate::converter::{Converter, ConverterContext, InputShape};
use crate::header::build_element_header;
use crate::properties::PropertyDrain;
use crate::ConversionResult;
use metabridge_beans::{Connection, ConnectorType, Endpoint};
use metabridge_registry::names;
use metabridge_types::{EntityRecord, Guid, RelationshipRecord};
use tracing::debug;

pub struct ConnectionConverter;

impl ConnectionConverter {
    fn connector_type_bean(
        &self,
        ctx: &ConverterContext<'_>,
        operation: &'static str,
        entity: &EntityRecord,
    ) -> ConversionResult<ConnectorType> {
        let mut bean = ConnectorType::default();
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
        props.connector_provider_class_name =
            drain.remove_string(names::CONNECTOR_PROVIDER_PROPERTY_NAME);
        props.recognized_additional_properties =
            drain.remove_string_list(names::RECOGNIZED_ADDITIONAL_PROPERTIES_PROPERTY_NAME);
        props.recognized_secured_properties =
            drain.remove_string_list(names::RECOGNIZED_SECURED_PROPERTIES_PROPERTY_NAME);
        props.recognized_configuration_properties =
            drain.remove_string_list(names::RECOGNIZED_CONFIGURATION_PROPERTIES_PROPERTY_NAME);
        props.additional_properties =
            drain.remove_string_map(names::ADDITIONAL_PROPERTIES_PROPERTY_NAME);
        props.extended_properties = drain.residual_properties();

        Ok(bean)
    }

    fn endpoint_bean(
        &self,
        ctx: &ConverterContext<'_>,
        operation: &'static str,
        entity: &EntityRecord,
    ) -> ConversionResult<Endpoint> {
        let mut bean = Endpoint::default();
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
        props.network_address = drain.remove_string(names::NETWORK_ADDRESS_PROPERTY_NAME);
        props.protocol = drain.remove_string(names::PROTOCOL_PROPERTY_NAME);
        props.encryption_method = drain.remove_string(names::ENCRYPTION_METHOD_PROPERTY_NAME);
        props.additional_properties =
            drain.remove_string_map(names::ADDITIONAL_PROPERTIES_PROPERTY_NAME);
        props.extended_properties = drain.residual_properties();

        Ok(bean)
    }
}

fn find_supplementary(supplementary: &[EntityRecord], guid: Guid) -> Option<&EntityRecord> {
    supplementary.iter().find(|e| e.header.guid == guid)
}

impl Converter for ConnectionConverter {
    type Bean = Connection;

    fn converter_name(&self) -> &'static str {
        "ConnectionConverter"
    }

    fn bean_type_name(&self) -> &str {
        names::CONNECTION_TYPE_NAME
    }

    fn supported_shapes(&self) -> &'static [InputShape] {
        &[InputShape::LinkedEntities]
    }

    fn bean_from_linked_entities(
        &self,
        ctx: &ConverterContext<'_>,
        primary: Option<&EntityRecord>,
        supplementary: &[EntityRecord],
        relationships: &[RelationshipRecord],
    ) -> ConversionResult<Connection> {
        const OPERATION: &str = "bean_from_linked_entities";

        let primary = self.require_entity(OPERATION, primary)?;
        self.validate_entity(primary)?;
        self.check_entity_type(ctx, primary, names::CONNECTION_TYPE_NAME)?;

        let mut bean: Connection = ctx
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
        props.qualified_name = drain.remove_string(names::QUALIFIED_NAME_PROPERTY_NAME);
        props.display_name = drain.remove_string(names::DISPLAY_NAME_PROPERTY_NAME);
        props.description = drain.remove_string(names::DESCRIPTION_PROPERTY_NAME);
        props.user_id = drain.remove_string(names::USER_ID_PROPERTY_NAME);
        props.clear_password = drain.remove_string(names::CLEAR_PASSWORD_PROPERTY_NAME);
        props.encrypted_password = drain.remove_string(names::ENCRYPTED_PASSWORD_PROPERTY_NAME);
        props.secured_properties =
            drain.remove_string_map(names::SECURED_PROPERTIES_PROPERTY_NAME);
        props.configuration_properties =
            drain.remove_value_map(names::CONFIGURATION_PROPERTIES_PROPERTY_NAME);
        props.additional_properties =
            drain.remove_string_map(names::ADDITIONAL_PROPERTIES_PROPERTY_NAME);
        props.extended_properties = drain.residual_properties();

        for relationship in relationships {
            self.validate_relationship(relationship)?;
            let far_guid = relationship.other_end(primary.header.guid).guid();
            let Some(linked) = find_supplementary(supplementary, far_guid) else {
                debug!(
                    relationship = %relationship.header.guid,
                    far_end = %far_guid,
                    "linked entity not supplied; skipping"
                );
                continue;
            };

            if ctx.registry.is_subtype_of(
                &ctx.service_name,
                &relationship.header.type_name,
                names::CONNECTION_CONNECTOR_TYPE_TYPE_NAME,
            ) {
                bean.connector_type = Some(self.connector_type_bean(ctx, OPERATION, linked)?);
            } else if ctx.registry.is_subtype_of(
                &ctx.service_name,
                &relationship.header.type_name,
                names::CONNECTION_ENDPOINT_TYPE_NAME,
            ) {
                bean.endpoint = Some(self.endpoint_bean(ctx, OPERATION, linked)?);
            } else {
                debug!(
                    relationship_type = %relationship.header.type_name,
                    "unrecognized connection link ignored"
                );
            }
        }

        Ok(bean)
    }
}
