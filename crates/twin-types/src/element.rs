//! The recursive element tree inside a submodel.
//!
//! A submodel owns an ordered sequence of elements. Each element is either a
//! [`Property`] — a scalar leaf with a declared value type — or an
//! [`ElementCollection`] holding further elements. Path resolution walks
//! this tree by short name or by position.

use serde::{Deserialize, Serialize};

use crate::value::ScalarValue;

/// A scalar leaf element: a short name and a typed value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id_short: String,
    pub value: ScalarValue,
}

impl Property {
    pub fn new(id_short: impl Into<String>, value: ScalarValue) -> Self {
        Self {
            id_short: id_short.into(),
            value,
        }
    }
}

/// An ordered collection of nested elements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementCollection {
    pub id_short: String,
    pub elements: Vec<SubmodelElement>,
}

impl ElementCollection {
    pub fn new(id_short: impl Into<String>, elements: Vec<SubmodelElement>) -> Self {
        Self {
            id_short: id_short.into(),
            elements,
        }
    }
}

/// One node of a submodel's element tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SubmodelElement {
    Property(Property),
    Collection(ElementCollection),
}

impl SubmodelElement {
    /// The element's short name, used for name-segment lookups.
    pub fn id_short(&self) -> &str {
        match self {
            SubmodelElement::Property(p) => &p.id_short,
            SubmodelElement::Collection(c) => &c.id_short,
        }
    }

    /// `true` for scalar leaves, `false` for collections.
    pub fn is_leaf(&self) -> bool {
        matches!(self, SubmodelElement::Property(_))
    }

    /// Child elements, or `None` for leaves.
    pub fn children(&self) -> Option<&[SubmodelElement]> {
        match self {
            SubmodelElement::Property(_) => None,
            SubmodelElement::Collection(c) => Some(&c.elements),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ScalarValue;

    fn sample_tree() -> SubmodelElement {
        SubmodelElement::Collection(ElementCollection::new(
            "operating_conditions",
            vec![
                SubmodelElement::Property(Property::new(
                    "temperature",
                    ScalarValue::Float(198.4),
                )),
                SubmodelElement::Property(Property::new("unit", ScalarValue::Str("K".into()))),
            ],
        ))
    }

    #[test]
    fn leaf_and_collection_discrimination() {
        let tree = sample_tree();
        assert!(!tree.is_leaf());
        let children = tree.children().unwrap();
        assert_eq!(children.len(), 2);
        assert!(children[0].is_leaf());
        assert!(children[0].children().is_none());
    }

    #[test]
    fn id_short_covers_both_variants() {
        let tree = sample_tree();
        assert_eq!(tree.id_short(), "operating_conditions");
        assert_eq!(tree.children().unwrap()[1].id_short(), "unit");
    }
}
