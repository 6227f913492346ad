//! Call-counting stub predicates.
//!
//! # Example
//!
//! ```
//! use filtermaker_test::CallCounter;
//!
//! let counter = CallCounter::new();
//! let stub = counter.returning(false);
//!
//! assert!(!stub("anything"));
//! assert!(!stub("again"));
//! assert_eq!(counter.calls(), 2);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how many times the stubs it hands out are called.
#[derive(Clone, Debug, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a stub predicate that always answers `result` and bumps this
    /// counter on every call.
    pub fn returning(&self, result: bool) -> impl Fn(&str) -> bool + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |_: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            result
        }
    }

    /// Returns a stub predicate that delegates to `f` and bumps this counter.
    pub fn wrapping<F>(&self, f: F) -> impl Fn(&str) -> bool + Send + Sync + 'static
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let calls = Arc::clone(&self.calls);
        move |text: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            f(text)
        }
    }

    /// Returns the number of calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
