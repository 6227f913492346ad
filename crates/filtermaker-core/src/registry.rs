//! Property registry.
//!
//! A [`PropertyRegistry`] maps property names to predicates. Each ruleset
//! gets its own registry; build it once, then share it by reference (or
//! through [`PropertyRegistry::into_shared`]) with every evaluation site.

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{FilterMakerError, Result};
use crate::filter::{Predicate, TextPredicate};

/// Maps property names to the predicates backing them.
///
/// Registering a name that is already present replaces the previous
/// predicate.
///
/// # Example
///
/// ```
/// use filtermaker_core::{haschars, PropertyRegistry, TextPredicate};
///
/// let mut registry = PropertyRegistry::new();
/// let has_x = registry.register("has_x", haschars(['x']));
///
/// assert!(has_x.test("box"));
/// assert!(registry.evaluate("has_x", "fox").unwrap());
/// assert!(registry.get("has_y").is_err());
/// ```
#[derive(Clone, Default)]
pub struct PropertyRegistry {
    properties: HashMap<String, Predicate>,
}

impl Debug for PropertyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRegistry")
            .field("count", &self.properties.len())
            .field("names", &self.names())
            .finish()
    }
}

impl PropertyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
        }
    }

    /// Creates a registry from an iterator of (name, predicate) pairs.
    ///
    /// Later pairs replace earlier pairs with the same name.
    pub fn from_pairs<I, N>(iter: I) -> Self
    where
        I: IntoIterator<Item = (N, Predicate)>,
        N: Into<String>,
    {
        let mut registry = Self::new();
        for (name, predicate) in iter {
            registry.register(name, predicate);
        }
        registry
    }

    /// Stores `predicate` under `name` and hands it back.
    pub fn register<N: Into<String>>(&mut self, name: N, predicate: Predicate) -> Predicate {
        let name = name.into();
        let replaced = self
            .properties
            .insert(name.clone(), Arc::clone(&predicate))
            .is_some();
        debug!(event = "property_registered", property = %name, replaced);
        predicate
    }

    /// Runs `builder` on `config` and registers the result under `name`.
    ///
    /// # Errors
    ///
    /// Propagates the builder's configuration error; nothing is registered
    /// in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use filtermaker_core::{hascluster, haschars, PropertyRegistry};
    ///
    /// let mut registry = PropertyRegistry::new();
    /// registry.register_with("has_ch", hascluster, ["ch"]).unwrap();
    /// registry.register_with("has_q", haschars, ['q']).unwrap();
    /// assert!(registry.register_with("bad", hascluster, [""]).is_err());
    /// assert_eq!(registry.names(), vec!["has_ch", "has_q"]);
    /// ```
    pub fn register_with<N, C, B, R>(&mut self, name: N, builder: B, config: C) -> Result<Predicate>
    where
        N: Into<String>,
        B: FnOnce(C) -> R,
        R: BuilderOutput,
    {
        let predicate = builder(config).into_result()?;
        Ok(self.register(name, predicate))
    }

    /// Looks up the predicate registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterMakerError::NameNotFound`] if `name` was never
    /// registered.
    pub fn get(&self, name: &str) -> Result<&Predicate> {
        self.properties
            .get(name)
            .ok_or_else(|| FilterMakerError::name_not_found(name))
    }

    /// Looks up `name` and runs its predicate on `text`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterMakerError::NameNotFound`] if `name` was never
    /// registered.
    pub fn evaluate(&self, name: &str, text: &str) -> Result<bool> {
        let result = self.get(name)?.test(text);
        trace!(event = "property_evaluated", property = name, result);
        Ok(result)
    }

    /// Removes the predicate registered under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Predicate> {
        self.properties.remove(name)
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.properties.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over (name, predicate) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Predicate)> {
        self.properties.iter().map(|(n, p)| (n.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Creates an Arc-wrapped version for sharing across threads.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Return types accepted from builders passed to
/// [`PropertyRegistry::register_with`].
///
/// Infallible builders return a [`Predicate`]; builders that validate their
/// configuration return `Result<Predicate>`.
pub trait BuilderOutput {
    fn into_result(self) -> Result<Predicate>;
}

impl BuilderOutput for Predicate {
    fn into_result(self) -> Result<Predicate> {
        Ok(self)
    }
}

impl BuilderOutput for Result<Predicate> {
    fn into_result(self) -> Result<Predicate> {
        self
    }
}

#[cfg(test)]
mod tests {
    use filtermaker_test::CallCounter;

    use super::*;
    use crate::builders::{haschars, hasregex};
    use crate::filter::predicate;

    #[test]
    fn test_new_is_empty() {
        let registry = PropertyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = PropertyRegistry::new();
        registry.register("has_a", haschars(['a']));

        assert!(registry.contains("has_a"));
        assert!(registry.get("has_a").unwrap().test("cat"));
    }

    #[test]
    fn test_register_returns_same_predicate() {
        let mut registry = PropertyRegistry::new();
        let p = haschars(['a']);
        let returned = registry.register("has_a", Arc::clone(&p));
        assert!(Arc::ptr_eq(&p, &returned));
        assert!(Arc::ptr_eq(&p, registry.get("has_a").unwrap()));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = PropertyRegistry::new();
        registry.register("p", predicate(|_: &str| false));
        registry.register("p", predicate(|_: &str| true));

        assert_eq!(registry.len(), 1);
        assert!(registry.evaluate("p", "").unwrap());
    }

    #[test]
    fn test_get_missing_name() {
        let registry = PropertyRegistry::new();
        let err = registry.get("nonexistent_property").err().unwrap();
        assert_eq!(
            err,
            FilterMakerError::NameNotFound {
                name: "nonexistent_property".to_string()
            }
        );
        assert_eq!(err.to_string(), "Property not found: nonexistent_property");
    }

    #[test]
    fn test_evaluate_missing_name_is_error_not_false() {
        let registry = PropertyRegistry::new();
        assert!(registry.evaluate("missing", "text").is_err());
    }

    #[test]
    fn test_evaluate_runs_predicate_once() {
        let counter = CallCounter::new();
        let mut registry = PropertyRegistry::new();
        registry.register("counted", predicate(counter.returning(true)));

        assert!(registry.evaluate("counted", "x").unwrap());
        assert_eq!(counter.calls(), 1);
    }

    #[test]
    fn test_register_with_propagates_builder_error() {
        let mut registry = PropertyRegistry::new();
        let result = registry.register_with("broken", hasregex, "[");
        assert!(matches!(result, Err(FilterMakerError::Configuration(_))));
        assert!(!registry.contains("broken"));
    }

    #[test]
    fn test_register_with_infallible_builder() {
        let mut registry = PropertyRegistry::new();
        let p = registry.register_with("digits", haschars, '0'..='9').unwrap();
        assert!(p.test("route 66"));
        assert!(registry.evaluate("digits", "route 66").unwrap());
    }

    #[test]
    fn test_remove() {
        let mut registry = PropertyRegistry::new();
        registry.register("p", haschars(['p']));
        assert!(registry.remove("p").is_some());
        assert!(!registry.contains("p"));
        assert!(registry.remove("p").is_none());
    }

    #[test]
    fn test_from_pairs_and_names() {
        let registry = PropertyRegistry::from_pairs([
            ("zeta", haschars(['z'])),
            ("alpha", haschars(['a'])),
            ("zeta", haschars(['y'])),
        ]);
        assert_eq!(registry.names(), vec!["alpha", "zeta"]);
        assert!(registry.evaluate("zeta", "y").unwrap());
        assert!(!registry.evaluate("zeta", "z").unwrap());
    }

    #[test]
    fn test_independent_registries() {
        let mut first = PropertyRegistry::new();
        let second = PropertyRegistry::new();
        first.register("only_here", haschars(['o']));
        assert!(first.contains("only_here"));
        assert!(!second.contains("only_here"));
    }

    #[test]
    fn test_shared_registry_across_threads() {
        let mut registry = PropertyRegistry::new();
        registry.register("has_e", haschars(['e']));
        let shared = registry.into_shared();

        let handles: Vec<_> = ["tree", "oak", "elm"]
            .into_iter()
            .map(|word| {
                let registry = Arc::clone(&shared);
                std::thread::spawn(move || registry.evaluate("has_e", word).unwrap())
            })
            .collect();
        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![true, false, true]);
    }

    #[test]
    fn test_debug_lists_names() {
        let mut registry = PropertyRegistry::new();
        registry.register("b", haschars(['b']));
        registry.register("a", haschars(['a']));
        let debug = format!("{:?}", registry);
        assert!(debug.contains("count: 2"));
        assert!(debug.contains(r#"names: ["a", "b"]"#));
    }
}
