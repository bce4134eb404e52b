//! Path-based value resolution for the twinrepo digital-twin repository.
//!
//! A value path is an ordered sequence of name and index segments, resolved
//! relative to one catalog's root:
//!
//! ```text
//! ["submodels", "chiller_static", "operating_conditions", 0]
//!   │            │                 │                       └ index segment
//!   │            │                 └ element by short name
//!   │            └ entity by short identifier
//!   └ catalog root
//! ```
//!
//! The [`ValueResolver`] walks such a path down to a scalar leaf value
//! inside a stored entity, or — for a fixed allow-list of live paths like
//! the chiller temperature — splices in the current reading from the device
//! gateway instead. Every failure mode is a typed [`ResolveError`].
//!
//! # Locking
//!
//! The resolver clones the selected entity out of its catalog under the
//! read lock and walks the clone. No catalog lock is ever held across the
//! element walk or a gateway call.

pub mod cancel;
pub mod error;
pub mod path;
pub mod resolver;

pub use cancel::CancelToken;
pub use error::ResolveError;
pub use path::{CatalogRoot, PathSegment};
pub use resolver::{LiveOverride, LiveSource, ValueResolver};
