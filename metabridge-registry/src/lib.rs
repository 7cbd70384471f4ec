//! Type registry capability for the Metabridge conversion engine.
//!
//! The engine never hard-codes the type system: every component takes a
//! [`TypeRegistry`] reference and asks it to resolve type names, list
//! super-type chains, and answer "is subtype of" queries. The registry is
//! read-only and thread-safe; the engine never mutates it.
//!
//! [`InMemoryTypeRegistry`] is the bundled implementation, loaded up front
//! by the embedder (or a test fixture). The [`names`] module carries the
//! stable type-name and property-name constants the shipped converters
//! use — the local stand-in for the platform's name catalog.

mod descriptor;
pub mod names;
mod registry;

pub use descriptor::TypeDescriptor;
pub use registry::{InMemoryTypeRegistry, TypeRegistry};
