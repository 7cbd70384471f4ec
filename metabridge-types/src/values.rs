//! Typed property values and the ordered property bag.
//!
//! Every raw record carries a [`PropertyBag`]: a dynamic, semi-structured
//! name→value store. The bag preserves insertion order and keeps names
//! unique — inserting an existing name replaces the value in place.
//!
//! The conversion engine never mutates a record's bag directly; it clones
//! a working copy per call (see the extraction subsystem in
//! `metabridge-convert`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single typed property value.
///
/// `Date` values are milliseconds since the Unix epoch. `Enum` values carry
/// both the ordinal and the symbolic name so callers can use either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypedValue {
    String(String),
    Int(i32),
    Long(i64),
    Boolean(bool),
    /// Milliseconds since the Unix epoch.
    Date(i64),
    StringList(Vec<String>),
    StringMap(BTreeMap<String, String>),
    BooleanMap(BTreeMap<String, bool>),
    DateMap(BTreeMap<String, i64>),
    LongMap(BTreeMap<String, i64>),
    /// Nested map of arbitrary typed values.
    ValueMap(BTreeMap<String, TypedValue>),
    Enum { ordinal: i32, symbol: String },
}

impl TypedValue {
    /// Projects this value to generic JSON for read-only views
    /// (classification properties, extended properties).
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            TypedValue::String(s) => serde_json::Value::from(s.clone()),
            TypedValue::Int(i) => serde_json::Value::from(*i),
            TypedValue::Long(l) => serde_json::Value::from(*l),
            TypedValue::Boolean(b) => serde_json::Value::from(*b),
            TypedValue::Date(millis) => serde_json::Value::from(*millis),
            TypedValue::StringList(items) => {
                serde_json::Value::from(items.clone())
            }
            TypedValue::StringMap(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::from(v.clone())))
                .collect::<serde_json::Map<_, _>>()
                .into(),
            TypedValue::BooleanMap(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::from(*v)))
                .collect::<serde_json::Map<_, _>>()
                .into(),
            TypedValue::DateMap(map) | TypedValue::LongMap(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::from(*v)))
                .collect::<serde_json::Map<_, _>>()
                .into(),
            TypedValue::ValueMap(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect::<serde_json::Map<_, _>>()
                .into(),
            TypedValue::Enum { symbol, .. } => serde_json::Value::from(symbol.clone()),
        }
    }
}

/// An ordered name→[`TypedValue`] store with unique names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
    entries: Vec<(String, TypedValue)>,
}

impl PropertyBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of properties in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the bag holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypedValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns true when the bag holds a property called `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Inserts a property, replacing any existing value in place so the
    /// original position in the ordering is kept.
    pub fn insert(&mut self, name: impl Into<String>, value: TypedValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Removes and returns the property called `name`, if present.
    pub fn remove(&mut self, name: &str) -> Option<TypedValue> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Iterates properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Property names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Builder-style insert, used heavily by fixtures.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: TypedValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Projects the whole bag to a generic JSON object, or `None` when the
    /// bag is empty. Read-only; used for classification views and
    /// relationship property snapshots.
    #[must_use]
    pub fn to_value_map(&self) -> Option<serde_json::Map<String, serde_json::Value>> {
        if self.entries.is_empty() {
            return None;
        }
        Some(
            self.entries
                .iter()
                .map(|(n, v)| (n.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl FromIterator<(String, TypedValue)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (String, TypedValue)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (name, value) in iter {
            bag.insert(name, value);
        }
        bag
    }
}
