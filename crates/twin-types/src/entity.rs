//! The three catalogued entity kinds and their closed union.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::SubmodelElement;
use crate::identifier::Identifier;

/// A submodel: the only entity kind carrying a resolvable element tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submodel {
    pub id: Identifier,
    pub id_short: String,
    pub elements: Vec<SubmodelElement>,
}

impl Submodel {
    pub fn new(id: Identifier, id_short: impl Into<String>) -> Self {
        Self {
            id,
            id_short: id_short.into(),
            elements: Vec::new(),
        }
    }

    pub fn with_elements(mut self, elements: Vec<SubmodelElement>) -> Self {
        self.elements = elements;
        self
    }
}

/// An asset administration shell.
///
/// Submodel references are opaque identifier strings; the store does not
/// enforce that they point at stored submodels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shell {
    pub id: Identifier,
    pub id_short: String,
    pub submodel_refs: Vec<String>,
}

impl Shell {
    pub fn new(id: Identifier, id_short: impl Into<String>) -> Self {
        Self {
            id,
            id_short: id_short.into(),
            submodel_refs: Vec::new(),
        }
    }
}

/// A concept description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConceptDescription {
    pub id: Identifier,
    pub id_short: String,
    pub definition: Option<String>,
}

impl ConceptDescription {
    pub fn new(id: Identifier, id_short: impl Into<String>) -> Self {
        Self {
            id,
            id_short: id_short.into(),
            definition: None,
        }
    }
}

/// Tag naming one of the three entity kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Shell,
    Submodel,
    ConceptDescription,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Shell => "shells",
            EntityKind::Submodel => "submodels",
            EntityKind::ConceptDescription => "concept_descriptions",
        };
        f.write_str(name)
    }
}

/// Closed union over the three entity kinds, for kind-generic store access.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Entity {
    Shell(Shell),
    Submodel(Submodel),
    ConceptDescription(ConceptDescription),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Shell(_) => EntityKind::Shell,
            Entity::Submodel(_) => EntityKind::Submodel,
            Entity::ConceptDescription(_) => EntityKind::ConceptDescription,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        match self {
            Entity::Shell(s) => &s.id,
            Entity::Submodel(s) => &s.id,
            Entity::ConceptDescription(c) => &c.id,
        }
    }

    pub fn id_short(&self) -> &str {
        match self {
            Entity::Shell(s) => &s.id_short,
            Entity::Submodel(s) => &s.id_short,
            Entity::ConceptDescription(c) => &c.id_short,
        }
    }
}

impl From<Shell> for Entity {
    fn from(shell: Shell) -> Self {
        Entity::Shell(shell)
    }
}

impl From<Submodel> for Entity {
    fn from(submodel: Submodel) -> Self {
        Entity::Submodel(submodel)
    }
}

impl From<ConceptDescription> for Entity {
    fn from(cd: ConceptDescription) -> Self {
        Entity::ConceptDescription(cd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Property, SubmodelElement};
    use crate::value::ScalarValue;

    fn id(raw: &str) -> Identifier {
        Identifier::new(raw).unwrap()
    }

    #[test]
    fn entity_union_reports_kind_and_identity() {
        let submodel = Submodel::new(id("urn:zhaw:chiller_static"), "chiller_static");
        let entity = Entity::from(submodel);
        assert_eq!(entity.kind(), EntityKind::Submodel);
        assert_eq!(entity.identifier().as_str(), "urn:zhaw:chiller_static");
        assert_eq!(entity.id_short(), "chiller_static");
    }

    #[test]
    fn kind_display_matches_catalog_vocabulary() {
        assert_eq!(EntityKind::Shell.to_string(), "shells");
        assert_eq!(EntityKind::Submodel.to_string(), "submodels");
        assert_eq!(
            EntityKind::ConceptDescription.to_string(),
            "concept_descriptions"
        );
    }

    #[test]
    fn submodel_builder_attaches_elements() {
        let submodel = Submodel::new(id("urn:x"), "x").with_elements(vec![
            SubmodelElement::Property(Property::new("temperature", ScalarValue::Float(1.0))),
        ]);
        assert_eq!(submodel.elements.len(), 1);
    }
}
