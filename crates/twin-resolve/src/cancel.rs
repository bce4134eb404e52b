//! Cooperative cancellation for in-flight resolutions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared flag marking a request as abandoned.
///
/// Catalog operations are short and bounded and are never interrupted
/// mid-operation; the resolver checks the token before any gateway I/O,
/// the only place a resolution can block for device-scale time. Clones
/// share the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// A fresh, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the request as abandoned.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether the request has been abandoned.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
