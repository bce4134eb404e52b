use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Globally unique string key for an entity within its catalog.
///
/// Identifiers are non-empty and immutable once an entity is stored. The
/// repository puts no further structure on them — IRIs like
/// `urn:zhaw:chiller_static` are common but not required. Uniqueness is
/// per catalog, not across catalogs.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier, rejecting the empty string.
    pub fn new(raw: impl Into<String>) -> Result<Self, TypeError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(TypeError::EmptyIdentifier);
        }
        Ok(Self(raw))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = TypeError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl FromStr for Identifier {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_identifier_is_accepted() {
        let id = Identifier::new("urn:zhaw:chiller_static").unwrap();
        assert_eq!(id.as_str(), "urn:zhaw:chiller_static");
    }

    #[test]
    fn empty_identifier_is_rejected() {
        assert_eq!(Identifier::new("").unwrap_err(), TypeError::EmptyIdentifier);
    }

    #[test]
    fn identifiers_order_lexicographically() {
        let a = Identifier::new("urn:a").unwrap();
        let b = Identifier::new("urn:b").unwrap();
        assert!(a < b);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = Identifier::new("urn:x").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"urn:x\"");
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn empty_identifier_fails_deserialization() {
        let result: Result<Identifier, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
