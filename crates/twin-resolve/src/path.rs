//! Path segments and the catalog-root vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};
use twin_types::EntityKind;

/// One segment of a value path: a named child or a positional index.
///
/// The untagged serde representation matches the wire shape of a path — a
/// JSON array mixing strings and non-negative integers, e.g.
/// `["submodels", "chiller_static", "operating_conditions", 0]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Name(String),
}

impl PathSegment {
    pub fn name(name: impl Into<String>) -> Self {
        PathSegment::Name(name.into())
    }

    pub fn index(index: usize) -> Self {
        PathSegment::Index(index)
    }

    /// The segment as a name, if it is one.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            PathSegment::Name(n) => Some(n),
            PathSegment::Index(_) => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Name(n) => f.write_str(n),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

/// The fixed vocabulary of first-segment catalog roots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogRoot {
    Submodels,
    Shells,
    ConceptDescriptions,
}

impl CatalogRoot {
    /// Parse a first segment; anything outside the vocabulary is `None`.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "submodels" => Some(CatalogRoot::Submodels),
            "shells" => Some(CatalogRoot::Shells),
            "concept_descriptions" => Some(CatalogRoot::ConceptDescriptions),
            _ => None,
        }
    }

    /// The entity kind catalogued under this root.
    pub fn kind(&self) -> EntityKind {
        match self {
            CatalogRoot::Submodels => EntityKind::Submodel,
            CatalogRoot::Shells => EntityKind::Shell,
            CatalogRoot::ConceptDescriptions => EntityKind::ConceptDescription,
        }
    }
}

impl fmt::Display for CatalogRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind(), f)
    }
}
