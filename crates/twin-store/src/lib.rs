//! Concurrent keyed entity storage for the twinrepo digital-twin repository.
//!
//! The store is a set of three independent [`Catalog`]s, one per entity
//! kind. Each catalog is a `HashMap` keyed on the entity's [`Identifier`],
//! guarded by its own `RwLock`; a lock held on one catalog never blocks
//! operations on another.
//!
//! # Design Rules
//!
//! 1. Put is an atomic upsert: a put with an existing key replaces the
//!    entry whole (last-write-wins, no merge).
//! 2. Per-catalog put/get/list are linearizable against each other; no
//!    ordering is promised across catalogs.
//! 3. `list` returns identifiers sorted lexicographically, from a single
//!    consistent snapshot taken under the read lock.
//! 4. Locks are held only for the duration of one call — never across a
//!    multi-step path resolution or any I/O.
//! 5. Entities are cloned out on read; callers never borrow into the map.
//!
//! [`Identifier`]: twin_types::Identifier

pub mod catalog;
pub mod store;
pub mod traits;

pub use catalog::Catalog;
pub use store::Store;
pub use traits::CatalogEntity;
