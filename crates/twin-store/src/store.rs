//! The aggregate [`Store`] owning the three entity catalogs.

use tracing::debug;
use twin_types::{ConceptDescription, Entity, EntityKind, Identifier, Shell, Submodel};

use crate::catalog::Catalog;

/// The repository's single aggregate over all three entity catalogs.
///
/// There is no ambient singleton: a `Store` is constructed explicitly and
/// shared by the request-handling layer, typically as an `Arc<Store>`. The
/// catalogs are independently lockable, so a put into the submodel catalog
/// never blocks a shell lookup.
#[derive(Debug, Default)]
pub struct Store {
    shells: Catalog<Shell>,
    submodels: Catalog<Submodel>,
    concept_descriptions: Catalog<ConceptDescription>,
}

impl Store {
    /// Create a store with three empty catalogs.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Typed per-kind access ----

    /// Put the submodel in the storage.
    ///
    /// Submodels are keyed on their identifiers. If a submodel with the
    /// same identifier exists, it is replaced whole.
    pub fn put_submodel(&self, submodel: Submodel) {
        debug!(id = %submodel.id, "put submodel");
        self.submodels.put(submodel);
    }

    /// Try to get the submodel keyed on `identifier`.
    pub fn get_submodel(&self, identifier: &Identifier) -> Option<Submodel> {
        self.submodels.get(identifier)
    }

    /// List the identifiers of all stored submodels, sorted.
    pub fn list_submodels(&self) -> Vec<Identifier> {
        self.submodels.list()
    }

    /// Put the shell in the storage, replacing any entry with the same
    /// identifier.
    pub fn put_shell(&self, shell: Shell) {
        debug!(id = %shell.id, "put shell");
        self.shells.put(shell);
    }

    /// Try to get the shell keyed on `identifier`.
    pub fn get_shell(&self, identifier: &Identifier) -> Option<Shell> {
        self.shells.get(identifier)
    }

    /// List the identifiers of all stored shells, sorted.
    pub fn list_shells(&self) -> Vec<Identifier> {
        self.shells.list()
    }

    /// Put the concept description in the storage, replacing any entry
    /// with the same identifier.
    pub fn put_concept_description(&self, cd: ConceptDescription) {
        debug!(id = %cd.id, "put concept description");
        self.concept_descriptions.put(cd);
    }

    /// Try to get the concept description keyed on `identifier`.
    pub fn get_concept_description(&self, identifier: &Identifier) -> Option<ConceptDescription> {
        self.concept_descriptions.get(identifier)
    }

    /// List the identifiers of all stored concept descriptions, sorted.
    pub fn list_concept_descriptions(&self) -> Vec<Identifier> {
        self.concept_descriptions.list()
    }

    // ---- Kind-generic access for the transport layer ----

    /// Put an entity into the catalog for its kind.
    pub fn put(&self, entity: Entity) {
        match entity {
            Entity::Shell(shell) => self.put_shell(shell),
            Entity::Submodel(submodel) => self.put_submodel(submodel),
            Entity::ConceptDescription(cd) => self.put_concept_description(cd),
        }
    }

    /// Get an entity of the given kind by identifier.
    pub fn get(&self, kind: EntityKind, identifier: &Identifier) -> Option<Entity> {
        match kind {
            EntityKind::Shell => self.get_shell(identifier).map(Entity::Shell),
            EntityKind::Submodel => self.get_submodel(identifier).map(Entity::Submodel),
            EntityKind::ConceptDescription => self
                .get_concept_description(identifier)
                .map(Entity::ConceptDescription),
        }
    }

    /// List all identifiers of the given kind, sorted.
    pub fn list(&self, kind: EntityKind) -> Vec<Identifier> {
        match kind {
            EntityKind::Shell => self.list_shells(),
            EntityKind::Submodel => self.list_submodels(),
            EntityKind::ConceptDescription => self.list_concept_descriptions(),
        }
    }

    // ---- Catalog handles for the resolver ----

    /// The submodel catalog.
    pub fn submodels(&self) -> &Catalog<Submodel> {
        &self.submodels
    }

    /// The shell catalog.
    pub fn shells(&self) -> &Catalog<Shell> {
        &self.shells
    }

    /// The concept description catalog.
    pub fn concept_descriptions(&self) -> &Catalog<ConceptDescription> {
        &self.concept_descriptions
    }
}
