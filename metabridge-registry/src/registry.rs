//! The injected type-resolution capability.

use crate::TypeDescriptor;
use std::collections::HashMap;
use tracing::trace;

/// Resolves type names and answers subtype queries.
///
/// Implementations must be cheap to query: the engine calls into the
/// registry repeatedly during a single conversion. They are shared
/// read-only across threads, hence the `Send + Sync` bound.
pub trait TypeRegistry: Send + Sync {
    /// Resolves a type name to its descriptor, or `None` when the name is
    /// not registered.
    fn resolve(&self, type_name: &str) -> Option<&TypeDescriptor>;

    /// The full super-type chain for a type, nearest ancestor first.
    /// Empty for root or unknown types.
    fn super_types(&self, type_name: &str) -> &[String] {
        self.resolve(type_name)
            .map(|d| d.super_types.as_slice())
            .unwrap_or(&[])
    }

    /// True when `candidate` is `expected` itself or carries `expected`
    /// anywhere in its super-type chain. `service_scope` names the calling
    /// service for diagnostics only.
    fn is_subtype_of(&self, service_scope: &str, candidate: &str, expected: &str) -> bool {
        if candidate == expected {
            return true;
        }
        let matched = self.super_types(candidate).iter().any(|s| s == expected);
        trace!(
            service = service_scope,
            candidate,
            expected,
            matched,
            "subtype query"
        );
        matched
    }
}

/// A registry backed by a name→descriptor map, loaded up front.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTypeRegistry {
    types: HashMap<String, TypeDescriptor>,
}

impl InMemoryTypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor under its own name, replacing any previous
    /// registration.
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name.clone(), descriptor);
    }

    /// Builder-style registration.
    #[must_use]
    pub fn with_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True when no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeRegistry for InMemoryTypeRegistry {
    fn resolve(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name)
    }
}
