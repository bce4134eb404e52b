//! The generic [`Catalog`]: one concurrency-safe keyed collection per
//! entity kind.

use std::collections::HashMap;
use std::sync::RwLock;

use twin_types::Identifier;

use crate::traits::CatalogEntity;

/// Concurrency-safe keyed collection for one entity kind.
///
/// All entries live in a `HashMap` behind a `RwLock`. Entities are cloned
/// on read, so no caller ever holds a borrow into the map. A poisoned lock
/// means another thread panicked mid-operation; that is a programming
/// error, not a recoverable condition, so every access propagates it.
#[derive(Debug)]
pub struct Catalog<T> {
    entries: RwLock<HashMap<Identifier, T>>,
}

impl<T: CatalogEntity> Catalog<T> {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or replace the entry keyed by the entity's identifier.
    ///
    /// The swap is atomic: the new entity is visible to all subsequent
    /// `get`/`list` calls, from any thread, as soon as `put` returns, and
    /// no call ever observes a partially applied entry.
    pub fn put(&self, entity: T) {
        let key = entity.identifier().clone();
        let mut entries = self.entries.write().expect("lock poisoned");
        entries.insert(key, entity);
    }

    /// The current entity for `identifier`, or `None`.
    pub fn get(&self, identifier: &Identifier) -> Option<T> {
        let entries = self.entries.read().expect("lock poisoned");
        entries.get(identifier).cloned()
    }

    /// Catalog-internal lookup by short name.
    ///
    /// Short names carry no uniqueness guarantee; when several entities
    /// share one, the entity with the lexicographically smallest
    /// identifier wins, so repeated lookups are deterministic.
    pub fn get_by_short_id(&self, short_id: &str) -> Option<T> {
        let entries = self.entries.read().expect("lock poisoned");
        entries
            .values()
            .filter(|entity| entity.short_id() == short_id)
            .min_by(|a, b| a.identifier().cmp(b.identifier()))
            .cloned()
    }

    /// All identifiers currently stored, sorted lexicographically.
    ///
    /// The snapshot is taken under the read lock: no identifier appears
    /// twice or goes missing because of a concurrent put. Puts that start
    /// after `list` begins may or may not be reflected.
    pub fn list(&self) -> Vec<Identifier> {
        let entries = self.entries.read().expect("lock poisoned");
        let mut ids: Vec<Identifier> = entries.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of entities currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the catalog holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Returns `true` if an entity is stored under `identifier`.
    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.entries
            .read()
            .expect("lock poisoned")
            .contains_key(identifier)
    }
}

impl<T: CatalogEntity> Default for Catalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;
    use std::thread;

    use proptest::prelude::*;
    use twin_types::{Identifier, ScalarValue, Submodel};
    use twin_types::{Property, SubmodelElement};

    use super::*;

    fn submodel(id: &str, short: &str) -> Submodel {
        Submodel::new(Identifier::new(id).unwrap(), short)
    }

    fn id(raw: &str) -> Identifier {
        Identifier::new(raw).unwrap()
    }

    // -----------------------------------------------------------------------
    // Core put/get/list
    // -----------------------------------------------------------------------

    #[test]
    fn put_then_get_returns_stored_entity() {
        let catalog = Catalog::new();
        let stored = submodel("urn:zhaw:chiller_static", "chiller_static")
            .with_elements(vec![SubmodelElement::Property(Property::new(
                "max_power",
                ScalarValue::Float(5000.0),
            ))]);
        catalog.put(stored.clone());

        let read_back = catalog.get(&id("urn:zhaw:chiller_static")).unwrap();
        assert_eq!(read_back, stored);
    }

    #[test]
    fn get_missing_returns_none() {
        let catalog: Catalog<Submodel> = Catalog::new();
        assert!(catalog.get(&id("urn:absent")).is_none());
    }

    #[test]
    fn put_same_key_replaces_whole_entry() {
        let catalog = Catalog::new();
        catalog.put(submodel("urn:x", "first"));
        catalog.put(submodel("urn:x", "second"));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&id("urn:x")).unwrap().id_short, "second");
        // No stale entry under the old short name.
        assert!(catalog.get_by_short_id("first").is_none());
    }

    #[test]
    fn list_is_sorted_regardless_of_insertion_order() {
        let catalog = Catalog::new();
        for raw in ["urn:c", "urn:a", "urn:b"] {
            catalog.put(submodel(raw, raw));
        }
        let listed = catalog.list();
        let ids: Vec<&str> = listed.iter().map(|i| i.as_str()).collect();
        assert_eq!(ids, vec!["urn:a", "urn:b", "urn:c"]);
    }

    #[test]
    fn list_then_get_round_trip() {
        let catalog = Catalog::new();
        for raw in ["urn:a", "urn:b", "urn:c"] {
            catalog.put(submodel(raw, raw));
        }
        for listed in catalog.list() {
            assert!(catalog.get(&listed).is_some(), "listed {listed} is gettable");
        }
    }

    #[test]
    fn len_contains_and_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.put(submodel("urn:a", "a"));
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
        assert!(catalog.contains(&id("urn:a")));
        assert!(!catalog.contains(&id("urn:b")));
    }

    // -----------------------------------------------------------------------
    // Short-name lookup
    // -----------------------------------------------------------------------

    #[test]
    fn short_id_lookup_finds_entity() {
        let catalog = Catalog::new();
        catalog.put(submodel("urn:zhaw:chiller_static", "chiller_static"));
        let found = catalog.get_by_short_id("chiller_static").unwrap();
        assert_eq!(found.id.as_str(), "urn:zhaw:chiller_static");
    }

    #[test]
    fn short_id_lookup_is_deterministic_on_collision() {
        let catalog = Catalog::new();
        catalog.put(submodel("urn:b", "shared"));
        catalog.put(submodel("urn:a", "shared"));
        // Smallest identifier wins, independent of insertion order.
        assert_eq!(catalog.get_by_short_id("shared").unwrap().id, id("urn:a"));
    }

    #[test]
    fn short_id_lookup_misses_cleanly() {
        let catalog: Catalog<Submodel> = Catalog::new();
        assert!(catalog.get_by_short_id("nope").is_none());
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_puts_to_distinct_keys_lose_nothing() {
        let catalog = Arc::new(Catalog::new());
        let n = 32;

        let handles: Vec<_> = (0..n)
            .map(|i| {
                let catalog = Arc::clone(&catalog);
                thread::spawn(move || {
                    catalog.put(submodel(&format!("urn:{i:03}"), &format!("sm{i}")));
                })
            })
            .collect();
        for h in handles {
            h.join().expect("thread should not panic");
        }

        let ids = catalog.list();
        assert_eq!(ids.len(), n);
        let unique: BTreeSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), n);
    }

    #[test]
    fn concurrent_put_and_get_never_observe_a_torn_entity() {
        let catalog = Arc::new(Catalog::new());
        let old = submodel("urn:x", "old").with_elements(vec![SubmodelElement::Property(
            Property::new("temperature", ScalarValue::Float(1.0)),
        )]);
        let new = submodel("urn:x", "new").with_elements(vec![SubmodelElement::Property(
            Property::new("temperature", ScalarValue::Float(2.0)),
        )]);
        catalog.put(old.clone());

        let writer = {
            let catalog = Arc::clone(&catalog);
            let new = new.clone();
            thread::spawn(move || {
                for _ in 0..1000 {
                    catalog.put(new.clone());
                }
            })
        };
        let reader = {
            let catalog = Arc::clone(&catalog);
            let (old, new) = (old.clone(), new.clone());
            thread::spawn(move || {
                for _ in 0..1000 {
                    let got = catalog.get(&id("urn:x")).unwrap();
                    assert!(got == old || got == new, "mixed entity observed: {got:?}");
                }
            })
        };
        writer.join().expect("writer should not panic");
        reader.join().expect("reader should not panic");
    }

    #[test]
    fn list_during_concurrent_puts_is_never_torn() {
        let catalog = Arc::new(Catalog::new());
        let writer = {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                for i in 0..200 {
                    catalog.put(submodel(&format!("urn:{i:03}"), "sm"));
                }
            })
        };
        for _ in 0..50 {
            let ids = catalog.list();
            // Sorted and duplicate-free within a single snapshot.
            let unique: BTreeSet<_> = ids.iter().collect();
            assert_eq!(unique.len(), ids.len());
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
        writer.join().expect("writer should not panic");
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    proptest! {
        /// After any sequence of puts, `list()` is exactly the sorted set
        /// of live keys: last write wins, no duplicates, no stale entries.
        #[test]
        fn list_is_sorted_set_of_live_keys(raw_keys in proptest::collection::vec("[a-z]{1,8}", 0..32)) {
            let catalog = Catalog::new();
            let mut expected = BTreeSet::new();
            for raw in &raw_keys {
                let urn = format!("urn:{raw}");
                catalog.put(submodel(&urn, raw));
                expected.insert(urn);
            }

            let snapshot = catalog.list();
            let listed: Vec<String> =
                snapshot.iter().map(|i| i.as_str().to_string()).collect();
            let expected: Vec<String> = expected.into_iter().collect();
            prop_assert_eq!(listed, expected);
        }
    }
}
