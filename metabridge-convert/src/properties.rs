//! Property extraction over a call-scoped working bag.
//!
//! A [`PropertyDrain`] wraps a private copy of a record's property bag
//! plus a consumed-keys set. `get_*` accessors read without consuming;
//! `remove_*` accessors read and mark the entry consumed. After a
//! converter has removed all the known properties of its bean family,
//! [`PropertyDrain::residual_properties`] surfaces whatever remains as a
//! generic name→value map — the forward-compatibility channel for
//! subtype-specific properties the engine knows nothing about.
//!
//! No accessor ever fails: a missing bag, a missing property, or a value
//! of the wrong stored kind all yield the documented default. Residual
//! capture is a set difference over the untouched copy, not a
//! destructive scan, so consumed entries keep their original order when
//! inspecting what is left.

use metabridge_beans::ValueMap;
use metabridge_types::{PropertyBag, TypedValue};
use std::collections::{BTreeMap, HashSet};

/// Typed get/remove accessors over one conversion call's working bag.
#[derive(Debug, Clone, Default)]
pub struct PropertyDrain {
    bag: PropertyBag,
    consumed: HashSet<String>,
}

impl PropertyDrain {
    /// Creates a drain over a private copy of `bag`. The original record
    /// is never touched; `None` behaves as an empty bag.
    #[must_use]
    pub fn new(bag: Option<&PropertyBag>) -> Self {
        Self {
            bag: bag.cloned().unwrap_or_default(),
            consumed: HashSet::new(),
        }
    }

    fn lookup(&self, name: &str) -> Option<&TypedValue> {
        if self.consumed.contains(name) {
            return None;
        }
        self.bag.get(name)
    }

    fn consume(&mut self, name: &str) -> Option<&TypedValue> {
        if self.consumed.contains(name) {
            return None;
        }
        if self.bag.contains(name) {
            self.consumed.insert(name.to_string());
            return self.bag.get(name);
        }
        None
    }

    // ── Strings ──────────────────────────────────────────────────

    /// Reads a string property; `None` when absent or not a string.
    #[must_use]
    pub fn get_string(&self, name: &str) -> Option<String> {
        match self.lookup(name) {
            Some(TypedValue::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    /// Removes a string property from the working bag.
    pub fn remove_string(&mut self, name: &str) -> Option<String> {
        match self.consume(name) {
            Some(TypedValue::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    // ── Numbers ──────────────────────────────────────────────────

    /// Reads an integer property; `0` when absent.
    #[must_use]
    pub fn get_int(&self, name: &str) -> i32 {
        match self.lookup(name) {
            Some(TypedValue::Int(i)) => *i,
            _ => 0,
        }
    }

    /// Removes an integer property; `0` when absent.
    pub fn remove_int(&mut self, name: &str) -> i32 {
        match self.consume(name) {
            Some(TypedValue::Int(i)) => *i,
            _ => 0,
        }
    }

    /// Reads a long property; `0` when absent. Accepts a stored `Int`.
    #[must_use]
    pub fn get_long(&self, name: &str) -> i64 {
        match self.lookup(name) {
            Some(TypedValue::Long(l)) => *l,
            Some(TypedValue::Int(i)) => i64::from(*i),
            _ => 0,
        }
    }

    /// Removes a long property; `0` when absent. Accepts a stored `Int`.
    pub fn remove_long(&mut self, name: &str) -> i64 {
        match self.consume(name) {
            Some(TypedValue::Long(l)) => *l,
            Some(TypedValue::Int(i)) => i64::from(*i),
            _ => 0,
        }
    }

    /// Removes a maximum-cardinality property; `-1` (unlimited) when
    /// absent.
    pub fn remove_cardinality(&mut self, name: &str) -> i32 {
        match self.consume(name) {
            Some(TypedValue::Int(i)) => *i,
            _ => -1,
        }
    }

    // ── Booleans ─────────────────────────────────────────────────

    /// Reads a boolean flag; `false` when absent.
    #[must_use]
    pub fn get_boolean(&self, name: &str) -> bool {
        matches!(self.lookup(name), Some(TypedValue::Boolean(true)))
    }

    /// Removes a boolean flag; `false` when absent.
    pub fn remove_boolean(&mut self, name: &str) -> bool {
        matches!(self.consume(name), Some(TypedValue::Boolean(true)))
    }

    /// Removes a boolean flag that defaults to `true` when absent
    /// ("allows duplicate values" and friends).
    pub fn remove_boolean_default_true(&mut self, name: &str) -> bool {
        match self.consume(name) {
            Some(TypedValue::Boolean(b)) => *b,
            _ => true,
        }
    }

    // ── Dates ────────────────────────────────────────────────────

    /// Reads a date property (epoch millis); `None` when absent.
    #[must_use]
    pub fn get_date(&self, name: &str) -> Option<i64> {
        match self.lookup(name) {
            Some(TypedValue::Date(millis)) => Some(*millis),
            _ => None,
        }
    }

    /// Removes a date property (epoch millis); `None` when absent.
    pub fn remove_date(&mut self, name: &str) -> Option<i64> {
        match self.consume(name) {
            Some(TypedValue::Date(millis)) => Some(*millis),
            _ => None,
        }
    }

    // ── Enums ────────────────────────────────────────────────────

    /// Reads an enum ordinal; `0` when absent.
    #[must_use]
    pub fn get_enum_ordinal(&self, name: &str) -> i32 {
        match self.lookup(name) {
            Some(TypedValue::Enum { ordinal, .. }) => *ordinal,
            _ => 0,
        }
    }

    /// Removes an enum ordinal, with a caller-supplied default for fields
    /// whose documented default is not zero.
    pub fn remove_enum_ordinal(&mut self, name: &str, default: i32) -> i32 {
        match self.consume(name) {
            Some(TypedValue::Enum { ordinal, .. }) => *ordinal,
            _ => default,
        }
    }

    /// Removes an enum property and returns its symbolic name.
    pub fn remove_enum_symbol(&mut self, name: &str) -> Option<String> {
        match self.consume(name) {
            Some(TypedValue::Enum { symbol, .. }) => Some(symbol.clone()),
            _ => None,
        }
    }

    // ── Collections ──────────────────────────────────────────────

    /// Removes a string-list property; `None` when absent or empty.
    pub fn remove_string_list(&mut self, name: &str) -> Option<Vec<String>> {
        match self.consume(name) {
            Some(TypedValue::StringList(items)) if !items.is_empty() => Some(items.clone()),
            _ => None,
        }
    }

    /// Removes a string-map property; `None` when absent or empty.
    pub fn remove_string_map(&mut self, name: &str) -> Option<BTreeMap<String, String>> {
        match self.consume(name) {
            Some(TypedValue::StringMap(map)) if !map.is_empty() => Some(map.clone()),
            _ => None,
        }
    }

    /// Removes a string→boolean map; `None` when absent or empty.
    pub fn remove_boolean_map(&mut self, name: &str) -> Option<BTreeMap<String, bool>> {
        match self.consume(name) {
            Some(TypedValue::BooleanMap(map)) if !map.is_empty() => Some(map.clone()),
            _ => None,
        }
    }

    /// Removes a string→date map (epoch millis); `None` when absent or
    /// empty.
    pub fn remove_date_map(&mut self, name: &str) -> Option<BTreeMap<String, i64>> {
        match self.consume(name) {
            Some(TypedValue::DateMap(map)) if !map.is_empty() => Some(map.clone()),
            _ => None,
        }
    }

    /// Removes a string→long map; `None` when absent or empty.
    pub fn remove_long_map(&mut self, name: &str) -> Option<BTreeMap<String, i64>> {
        match self.consume(name) {
            Some(TypedValue::LongMap(map)) if !map.is_empty() => Some(map.clone()),
            _ => None,
        }
    }

    /// Removes a nested-value map as generic JSON; `None` when absent or
    /// empty.
    pub fn remove_value_map(&mut self, name: &str) -> Option<ValueMap> {
        match self.consume(name) {
            Some(TypedValue::ValueMap(map)) if !map.is_empty() => {
                Some(map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
            }
            _ => None,
        }
    }

    // ── Residual capture ─────────────────────────────────────────

    /// Everything not yet consumed, as a generic name→value map, or
    /// `None` when the known properties covered the whole bag. This is
    /// the "extended properties" forward-compatibility mechanism.
    #[must_use]
    pub fn residual_properties(&self) -> Option<ValueMap> {
        let residual: ValueMap = self
            .bag
            .iter()
            .filter(|(name, _)| !self.consumed.contains(*name))
            .map(|(name, value)| (name.to_string(), value.to_json()))
            .collect();
        if residual.is_empty() {
            None
        } else {
            Some(residual)
        }
    }

    /// Number of properties not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bag.len() - self.consumed.len()
    }
}
