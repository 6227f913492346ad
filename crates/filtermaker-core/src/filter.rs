//! Predicates over normalized text.
//!
//! A property is backed by a [`TextPredicate`]: a pure, total test on an
//! already-normalized string. Closures of type `Fn(&str) -> bool` implement
//! the trait directly, so ad-hoc properties need no wrapper type.

use std::sync::Arc;

/// A pure test over normalized text.
pub trait TextPredicate: Send + Sync {
    /// Returns true if the text has the property.
    fn test(&self, text: &str) -> bool;
}

impl<F> TextPredicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    #[inline]
    fn test(&self, text: &str) -> bool {
        self(text)
    }
}

/// Shared handle to a registered predicate.
pub type Predicate = Arc<dyn TextPredicate>;

/// Wraps any predicate into a shared [`Predicate`] handle.
///
/// # Example
///
/// ```
/// use filtermaker_core::filter::{predicate, TextPredicate};
///
/// let has_q = predicate(|text: &str| text.contains('q'));
/// assert!(has_q.test("quiet"));
/// assert!(!has_q.test("silent"));
/// ```
pub fn predicate<P>(p: P) -> Predicate
where
    P: TextPredicate + 'static,
{
    Arc::new(p)
}
