//! Mock helpers for asserting evaluation behavior.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how often an operation was invoked.
///
/// Cloning shares the underlying counter, so a clone can be moved into a
/// step closure while the test keeps the original for assertions.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    hits: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Creates a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one invocation.
    pub fn record(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns the number of recorded invocations.
    #[must_use]
    pub fn count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}
