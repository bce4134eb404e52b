//! The [`CatalogEntity`] trait binding entity types to catalog storage.

use twin_types::{ConceptDescription, Identifier, Shell, Submodel};

/// An entity type storable in a [`Catalog`](crate::Catalog).
///
/// The identifier is the catalog key and must not change while the entity
/// is stored. The short name is a secondary, catalog-internal lookup handle
/// used by path resolution; it carries no uniqueness guarantee.
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    /// The globally unique identifier this entity is keyed on.
    fn identifier(&self) -> &Identifier;

    /// The short name used for second-segment path lookups.
    fn short_id(&self) -> &str;
}

impl CatalogEntity for Submodel {
    fn identifier(&self) -> &Identifier {
        &self.id
    }

    fn short_id(&self) -> &str {
        &self.id_short
    }
}

impl CatalogEntity for Shell {
    fn identifier(&self) -> &Identifier {
        &self.id
    }

    fn short_id(&self) -> &str {
        &self.id_short
    }
}

impl CatalogEntity for ConceptDescription {
    fn identifier(&self) -> &Identifier {
        &self.id
    }

    fn short_id(&self) -> &str {
        &self.id_short
    }
}
