//! Schema type bean: schema types are stored as a constellation of
//! linked records, so the bean nests optional sub-beans rather than
//! pointing at a single entity.

use crate::{ElementHeader, ValueMap};
use metabridge_types::Guid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A schema type with its optional linked sub-beans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaType {
    pub element_header: ElementHeader,
    pub properties: SchemaTypeProperties,
    /// Number of attributes nested under this type.
    pub attribute_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_schema_type: Option<Box<SchemaType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_from_element: Option<Box<SchemaType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_to_element: Option<Box<SchemaType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_options: Option<Vec<SchemaType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<DerivedSchemaTypeQueryTarget>>,
}

/// Known properties of a schema type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaTypeProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding_standard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub is_deprecated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_properties: Option<ValueMap>,
}

/// One query target feeding a derived schema type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedSchemaTypeQueryTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_target_guid: Option<Guid>,
}
