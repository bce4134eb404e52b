//! The typed failure modes of path resolution.

use thiserror::Error;
use twin_gateway::GatewayError;

/// Errors produced while resolving a value path.
///
/// The transport layer maps each variant to a boundary-level failure
/// signal; none of them crash a worker. Gateway faults pass through
/// transparently.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The first segment is not one of the known catalog roots (this
    /// includes the empty path).
    #[error("unknown catalog root: {segment:?}")]
    UnknownCatalog { segment: String },

    /// No entity with that short identifier in the selected catalog.
    #[error("no entity {short_id:?} in catalog {catalog}")]
    EntityNotFound { catalog: String, short_id: String },

    /// A name segment matched no child element.
    #[error("no element named {name:?} under {parent:?}")]
    ElementNotFound { name: String, parent: String },

    /// An index segment pointed past the end of a collection.
    #[error("index {index} out of range for collection {parent:?} of length {len}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        parent: String,
    },

    /// The path stopped at a collection node instead of a scalar leaf.
    #[error("path stops at {at:?}, which is not a scalar leaf")]
    NotALeaf { at: String },

    /// Segments remained after the walk reached a scalar leaf.
    #[error("path continues {remaining} segment(s) past the leaf {leaf:?}")]
    PathExhausted { leaf: String, remaining: usize },

    /// The path is structurally recognized but this traversal is not
    /// supported yet (maps to a "not supported" response at the boundary).
    #[error("value resolution is not implemented for {what}")]
    NotImplemented { what: String },

    /// The request was abandoned before the device read.
    #[error("resolution cancelled before device read")]
    Cancelled,

    /// A device gateway fault during a live read.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
