//! Foundation types for the twinrepo digital-twin repository.
//!
//! This crate provides the entity and value types shared by every other
//! twinrepo crate. The repository stores three independently catalogued
//! entity kinds — asset administration shells, submodels, and concept
//! descriptions — and resolves hierarchical paths down to scalar leaf
//! values inside them.
//!
//! # Key Types
//!
//! - [`Identifier`] — Globally unique, non-empty string key for an entity
//! - [`Entity`] / [`EntityKind`] — Closed union over the three entity kinds
//! - [`Submodel`], [`Shell`], [`ConceptDescription`] — The entity kinds
//! - [`SubmodelElement`] — Recursive element tree inside a submodel
//! - [`ScalarValue`] — Tagged union of the supported leaf value kinds,
//!   carrying its declared [`DataType`] and a canonical textual form

pub mod element;
pub mod entity;
pub mod error;
pub mod identifier;
pub mod value;

pub use element::{ElementCollection, Property, SubmodelElement};
pub use entity::{ConceptDescription, Entity, EntityKind, Shell, Submodel};
pub use error::TypeError;
pub use identifier::Identifier;
pub use value::{canonical_float, DataType, ScalarValue};
