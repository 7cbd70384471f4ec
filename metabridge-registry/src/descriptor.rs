//! Immutable descriptors for registered metadata types.

use serde::{Deserialize, Serialize};

/// Describes one registered type: stable identifier, name, version, and
/// the full super-type chain, nearest ancestor first.
///
/// Owned by the registry; the conversion engine looks descriptors up and
/// never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Stable identifier, constant across registry versions.
    pub id: String,
    pub name: String,
    pub version: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Full chain of super-type names, nearest ancestor first.
    /// Empty for root types.
    #[serde(default)]
    pub super_types: Vec<String>,
}

impl TypeDescriptor {
    /// A version-1 descriptor with no ancestors.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: 1,
            description: None,
            super_types: Vec::new(),
        }
    }

    /// Builder-style description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder-style super-type chain, nearest ancestor first.
    #[must_use]
    pub fn with_super_types(mut self, super_types: Vec<String>) -> Self {
        self.super_types = super_types;
        self
    }
}
