//! Pure-relationship bean: a relationship surfaced on its own, with a
//! stub for each end.

use crate::{ElementHeader, ElementStub, ValueMap};
use serde::{Deserialize, Serialize};

/// A relationship presented as a first-class result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedElements {
    pub relationship_header: ElementHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_properties: Option<ValueMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_one: Option<ElementStub>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_two: Option<ElementStub>,
}
