//! Annotation bean: properties blend the entity with several attached
//! relationships (review status, associated elements).

use crate::{ElementHeader, ElementStub, ValueMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A survey/discovery annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub element_header: ElementHeader,
    pub properties: AnnotationProperties,
    /// Status taken from the most recent review link, when one is
    /// attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_status: Option<String>,
    /// Reviews attached to this annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<ElementStub>>,
    /// Elements this annotation describes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated_elements: Option<Vec<ElementStub>>,
}

/// Known properties of an annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub confidence_level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_step: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_properties: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_properties: Option<ValueMap>,
}
