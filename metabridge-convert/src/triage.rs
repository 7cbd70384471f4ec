//! Relationship triage: classify a flat list of (relationship,
//! counterpart) pairs into named semantic buckets.
//!
//! Matching walks an ordered rule list and uses the registry's
//! "is subtype of" query, so a specialized relationship subtype is still
//! recognized as its semantic kind. The per-family variation is only the
//! rule list itself: which relationship kinds are recognized, which one
//! is the singular anchor, and which one is orientation-sensitive.

use crate::converter::{ConverterContext, RelatedRecord};
use metabridge_beans::ElementStub;
use metabridge_registry::names;
use metabridge_types::{EntityRecord, Guid, RecordEnd, RelationshipRecord, TypedValue};
use std::collections::BTreeMap;
use tracing::debug;

/// What to do with a pair whose relationship matched a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Singular slot; the last matching pair wins (documented policy).
    Anchor,
    /// Append the counterpart to the named bucket.
    Bucket(&'static str),
    /// Orientation-sensitive hierarchy link: when the relationship's
    /// first end is the primary entity, the counterpart is a child;
    /// otherwise it is the singular parent (last match wins).
    Oriented,
}

/// One recognized relationship kind and its disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriageRule {
    pub relationship_type: &'static str,
    pub disposition: Disposition,
}

impl TriageRule {
    #[must_use]
    pub const fn anchor(relationship_type: &'static str) -> Self {
        Self {
            relationship_type,
            disposition: Disposition::Anchor,
        }
    }

    #[must_use]
    pub const fn bucket(relationship_type: &'static str, bucket: &'static str) -> Self {
        Self {
            relationship_type,
            disposition: Disposition::Bucket(bucket),
        }
    }

    #[must_use]
    pub const fn oriented(relationship_type: &'static str) -> Self {
        Self {
            relationship_type,
            disposition: Disposition::Oriented,
        }
    }
}

/// The triaged buckets. Converters move these onto the bean with the
/// `take_*` accessors, which return `None` for an empty bucket so unset
/// and empty are the same observable state.
#[derive(Debug, Default)]
pub struct TriageOutcome {
    pub anchor: Option<ElementStub>,
    pub parent: Option<ElementStub>,
    children: Vec<ElementStub>,
    buckets: BTreeMap<&'static str, Vec<ElementStub>>,
    other: Vec<ElementStub>,
}

impl TriageOutcome {
    /// Children collected by the orientation-sensitive rule, or `None`
    /// when no pair matched that way.
    pub fn take_children(&mut self) -> Option<Vec<ElementStub>> {
        non_empty(std::mem::take(&mut self.children))
    }

    /// A named bucket, or `None` when nothing landed in it.
    pub fn take_bucket(&mut self, bucket: &str) -> Option<Vec<ElementStub>> {
        self.buckets.remove(bucket).and_then(non_empty)
    }

    /// The catch-all bucket of unrecognized related elements.
    pub fn take_other(&mut self) -> Option<Vec<ElementStub>> {
        non_empty(std::mem::take(&mut self.other))
    }
}

fn non_empty(items: Vec<ElementStub>) -> Option<Vec<ElementStub>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// A stub for a full counterpart record.
#[must_use]
pub fn stub_from_entity(entity: &EntityRecord) -> ElementStub {
    let mut stub = ElementStub::new(entity.header.guid, entity.header.type_name.clone());
    if let Some(TypedValue::String(name)) = entity
        .properties
        .get(names::QUALIFIED_NAME_PROPERTY_NAME)
    {
        stub.unique_name = Some(name.clone());
    }
    stub
}

/// A stub for a relationship end (full record or proxy).
#[must_use]
pub fn stub_from_end(end: &RecordEnd) -> ElementStub {
    let mut stub = ElementStub::new(end.guid(), end.type_name().to_string());
    stub.unique_name = end.unique_name().map(str::to_string);
    stub
}

/// The counterpart of the primary entity in one pair. Prefers the full
/// counterpart record; falls back to the relationship's far-end proxy
/// when the record was not hydrated. `None` when the pair cannot be
/// oriented at all (self-loop with no counterpart record).
fn counterpart_stub(
    primary: Guid,
    relationship: &RelationshipRecord,
    entity: Option<&EntityRecord>,
) -> Option<ElementStub> {
    if let Some(entity) = entity {
        return Some(stub_from_entity(entity));
    }
    let far_end = relationship.other_end(primary);
    if far_end.guid() == primary {
        return None;
    }
    Some(stub_from_end(far_end))
}

/// Runs the triage algorithm over the primary entity's related records.
///
/// Pairs missing their relationship are skipped. Rules are tested in
/// order; the first whose kind matches (by registry subtype query) wins.
/// Unmatched pairs land in the catch-all bucket.
#[must_use]
pub fn triage_related_records(
    ctx: &ConverterContext<'_>,
    rules: &[TriageRule],
    primary_guid: Guid,
    records: &[RelatedRecord],
) -> TriageOutcome {
    let mut outcome = TriageOutcome::default();

    for record in records {
        let Some(relationship) = &record.relationship else {
            continue;
        };
        let Some(stub) = counterpart_stub(primary_guid, relationship, record.entity.as_ref())
        else {
            debug!(
                relationship = %relationship.header.guid,
                "skipping pair with no usable counterpart"
            );
            continue;
        };

        let matched = rules.iter().find(|rule| {
            ctx.registry.is_subtype_of(
                &ctx.service_name,
                &relationship.header.type_name,
                rule.relationship_type,
            )
        });

        match matched.map(|rule| rule.disposition) {
            Some(Disposition::Anchor) => {
                // Last anchor wins.
                outcome.anchor = Some(stub);
            }
            Some(Disposition::Bucket(bucket)) => {
                outcome.buckets.entry(bucket).or_default().push(stub);
            }
            Some(Disposition::Oriented) => {
                if relationship.end_one.guid() == primary_guid {
                    outcome.children.push(stub);
                } else {
                    outcome.parent = Some(stub);
                }
            }
            None => {
                debug!(
                    relationship_type = %relationship.header.type_name,
                    "unrecognized relationship kind routed to catch-all"
                );
                outcome.other.push(stub);
            }
        }
    }

    outcome
}
