//! Glossary family beans: glossary, category, term.
//!
//! The category bean is the canonical triaged bean: a flat relationship
//! list is disambiguated into anchor / parent / children / terms /
//! external references, with a catch-all for everything else.

use crate::{ElementHeader, ElementStub, ValueMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A glossary entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Glossary {
    pub element_header: ElementHeader,
    pub properties: GlossaryProperties,
}

/// Known properties of a glossary, drained from the working bag in
/// declaration order; anything left over lands in `extended_properties`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlossaryProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_properties: Option<ValueMap>,
}

/// Snapshot of the relationship through which a bean was retrieved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedBy {
    pub relationship_header: ElementHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_properties: Option<ValueMap>,
    /// The element at the far end of the retrieval relationship.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_end: Option<ElementStub>,
}

/// A glossary category with its triaged relationship buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlossaryCategory {
    pub element_header: ElementHeader,
    pub properties: GlossaryCategoryProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_by: Option<RelatedBy>,
    /// The glossary anchoring this category. Last anchor relationship
    /// wins when several are present (documented policy).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<ElementStub>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<ElementStub>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_categories: Option<Vec<ElementStub>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<ElementStub>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_references: Option<Vec<ElementStub>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_related_elements: Option<Vec<ElementStub>>,
    /// Opaque diagram text from the external renderer, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<String>,
}

/// Known properties of a glossary category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlossaryCategoryProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_properties: Option<ValueMap>,
}

/// A glossary term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub element_header: ElementHeader,
    pub properties: GlossaryTermProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_by: Option<RelatedBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<String>,
}

/// Known properties of a glossary term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlossaryTermProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_properties: Option<ValueMap>,
}
