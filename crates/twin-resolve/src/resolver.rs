//! The [`ValueResolver`]: the single value-path entry point over a store.

use std::sync::Arc;

use tracing::debug;
use twin_gateway::DeviceGateway;
use twin_store::{Catalog, CatalogEntity, Store};
use twin_types::{Identifier, ScalarValue, Submodel, SubmodelElement};

use crate::cancel::CancelToken;
use crate::error::ResolveError;
use crate::path::{CatalogRoot, PathSegment};

/// A live data source a path can be wired to instead of storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiveSource {
    /// The chiller's current temperature from the device gateway.
    ChillerTemperature,
}

/// One entry of the live-path allow-list.
///
/// An override matches a full path exactly. Matching happens before normal
/// resolution and takes precedence even when a stored entity would satisfy
/// the same path.
#[derive(Clone, Debug)]
pub struct LiveOverride {
    pub path: Vec<PathSegment>,
    pub source: LiveSource,
}

impl LiveOverride {
    /// The bench setup's one live path:
    /// `submodels → chiller_runtime → temperature`.
    pub fn chiller_temperature() -> Self {
        Self {
            path: vec![
                PathSegment::name("submodels"),
                PathSegment::name("chiller_runtime"),
                PathSegment::name("temperature"),
            ],
            source: LiveSource::ChillerTemperature,
        }
    }
}

/// Resolves value paths against a [`Store`] and a device gateway.
///
/// This is the `resolve_value_path` entry point the transport layer calls;
/// it owns shared handles to both collaborators and is itself cheap to
/// share across worker threads.
pub struct ValueResolver {
    store: Arc<Store>,
    gateway: Arc<dyn DeviceGateway>,
    overrides: Vec<LiveOverride>,
}

impl ValueResolver {
    /// A resolver with the default live-path allow-list.
    pub fn new(store: Arc<Store>, gateway: Arc<dyn DeviceGateway>) -> Self {
        Self::with_overrides(store, gateway, vec![LiveOverride::chiller_temperature()])
    }

    /// A resolver with an explicit allow-list.
    pub fn with_overrides(
        store: Arc<Store>,
        gateway: Arc<dyn DeviceGateway>,
        overrides: Vec<LiveOverride>,
    ) -> Self {
        Self {
            store,
            gateway,
            overrides,
        }
    }

    /// Resolve a path to a scalar leaf value.
    pub fn resolve(&self, path: &[PathSegment]) -> Result<ScalarValue, ResolveError> {
        self.resolve_with_cancel(path, &CancelToken::new())
    }

    /// Resolve a path, honoring an abandonment token.
    ///
    /// The token is checked before any gateway I/O; catalog operations are
    /// short and run to completion regardless.
    pub fn resolve_with_cancel(
        &self,
        path: &[PathSegment],
        cancel: &CancelToken,
    ) -> Result<ScalarValue, ResolveError> {
        // Live overrides win over anything in storage.
        if let Some(live) = self.overrides.iter().find(|o| o.path == path) {
            return self.read_live(live.source, cancel);
        }

        let Some((first, rest)) = path.split_first() else {
            return Err(ResolveError::UnknownCatalog {
                segment: String::new(),
            });
        };
        let root = first
            .as_name()
            .and_then(CatalogRoot::from_segment)
            .ok_or_else(|| ResolveError::UnknownCatalog {
                segment: first.to_string(),
            })?;

        let Some((entity_segment, remaining)) = rest.split_first() else {
            // The catalog root itself is a collection, never a leaf.
            return Err(ResolveError::NotALeaf {
                at: root.to_string(),
            });
        };
        let Some(short_id) = entity_segment.as_name() else {
            return Err(ResolveError::NotImplemented {
                what: format!("index-based entity selection in {root}"),
            });
        };

        match root {
            CatalogRoot::Submodels => {
                let submodel = lookup(self.store.submodels(), short_id).ok_or_else(|| {
                    ResolveError::EntityNotFound {
                        catalog: root.to_string(),
                        short_id: short_id.to_string(),
                    }
                })?;
                debug!(path = %display_path(path), submodel = %submodel.id, "resolving stored path");
                walk(&submodel, remaining)
            }
            // Shells and concept descriptions carry no element tree; a path
            // into them is structurally valid but not supported yet.
            CatalogRoot::Shells => match lookup(self.store.shells(), short_id) {
                Some(_) => Err(ResolveError::NotImplemented {
                    what: format!("value resolution inside {root}"),
                }),
                None => Err(ResolveError::EntityNotFound {
                    catalog: root.to_string(),
                    short_id: short_id.to_string(),
                }),
            },
            CatalogRoot::ConceptDescriptions => {
                match lookup(self.store.concept_descriptions(), short_id) {
                    Some(_) => Err(ResolveError::NotImplemented {
                        what: format!("value resolution inside {root}"),
                    }),
                    None => Err(ResolveError::EntityNotFound {
                        catalog: root.to_string(),
                        short_id: short_id.to_string(),
                    }),
                }
            }
        }
    }

    fn read_live(
        &self,
        source: LiveSource,
        cancel: &CancelToken,
    ) -> Result<ScalarValue, ResolveError> {
        if cancel.is_cancelled() {
            return Err(ResolveError::Cancelled);
        }
        match source {
            LiveSource::ChillerTemperature => {
                let reading = self.gateway.read_temperature()?;
                debug!(reading, "spliced live chiller temperature");
                Ok(ScalarValue::Float(reading))
            }
        }
    }
}

/// Entity lookup for the second path segment: short name first, full
/// identifier as a fallback. Clones the entity out under the read lock.
fn lookup<T: CatalogEntity>(catalog: &Catalog<T>, short_id: &str) -> Option<T> {
    catalog.get_by_short_id(short_id).or_else(|| {
        let id = Identifier::new(short_id).ok()?;
        catalog.get(&id)
    })
}

/// Walk the remaining segments down the submodel's element tree.
///
/// Runs entirely on a clone of the submodel; no lock is held here.
fn walk(submodel: &Submodel, segments: &[PathSegment]) -> Result<ScalarValue, ResolveError> {
    let mut parent = submodel.id_short.clone();
    let mut current: &[SubmodelElement] = &submodel.elements;
    let mut segments = segments.iter();

    loop {
        let Some(segment) = segments.next() else {
            return Err(ResolveError::NotALeaf { at: parent });
        };
        let element = match segment {
            PathSegment::Name(name) => current
                .iter()
                .find(|e| e.id_short() == name)
                .ok_or_else(|| ResolveError::ElementNotFound {
                    name: name.clone(),
                    parent: parent.clone(),
                })?,
            PathSegment::Index(index) => {
                current
                    .get(*index)
                    .ok_or_else(|| ResolveError::IndexOutOfRange {
                        index: *index,
                        len: current.len(),
                        parent: parent.clone(),
                    })?
            }
        };
        match element {
            SubmodelElement::Property(property) => {
                let remaining = segments.count();
                if remaining > 0 {
                    return Err(ResolveError::PathExhausted {
                        leaf: property.id_short.clone(),
                        remaining,
                    });
                }
                return Ok(property.value.clone());
            }
            SubmodelElement::Collection(collection) => {
                parent = collection.id_short.clone();
                current = &collection.elements;
            }
        }
    }
}

fn display_path(path: &[PathSegment]) -> String {
    path.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("/")
}
