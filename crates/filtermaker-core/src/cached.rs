//! Memoizing property filter.
//!
//! [`PropertyFilter`] evaluates a battery of properties up front and keeps
//! the names of those that held. Later queries consult that set first and
//! evaluate anything else on demand, remembering new successes.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, trace};

use crate::error::Result;
use crate::filter::TextPredicate;
use crate::registry::PropertyRegistry;
use crate::text::NormalizedText;

/// Properties to evaluate when a [`PropertyFilter`] is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Evaluate nothing up front.
    #[default]
    None,
    /// Evaluate every registered property.
    All,
    /// Evaluate only the named properties.
    Names(Vec<String>),
}

impl Selection {
    /// Selects the given property names.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Names(names.into_iter().map(Into::into).collect())
    }
}

/// Normalized text plus the set of properties confirmed to hold for it.
///
/// # Example
///
/// ```
/// use filtermaker_core::{haschars, onlycharset, PropertyFilter, PropertyRegistry, Selection};
///
/// let mut registry = PropertyRegistry::new();
/// registry.register("has_l", haschars(['l']));
/// registry.register("latin", onlycharset('a'..='z'));
///
/// let mut filter = PropertyFilter::new(&registry, "Hello", Selection::All)?;
/// assert!(filter.is_confirmed("has_l"));
/// assert!(filter.has(["has_l", "latin"])?);
/// # Ok::<(), filtermaker_core::FilterMakerError>(())
/// ```
pub struct PropertyFilter<'r> {
    registry: &'r PropertyRegistry,
    text: NormalizedText,
    confirmed: BTreeSet<String>,
}

impl<'r> PropertyFilter<'r> {
    /// Normalizes `raw` and evaluates the selected properties.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FilterMakerError::NameNotFound`] if a selected name
    /// is not registered.
    pub fn new(registry: &'r PropertyRegistry, raw: &str, selection: Selection) -> Result<Self> {
        Self::from_normalized(registry, NormalizedText::new(raw), selection)
    }

    /// Evaluates the selected properties against already-normalized text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FilterMakerError::NameNotFound`] if a selected name
    /// is not registered.
    pub fn from_normalized(
        registry: &'r PropertyRegistry,
        text: NormalizedText,
        selection: Selection,
    ) -> Result<Self> {
        let mut confirmed = BTreeSet::new();
        let requested = match selection {
            Selection::None => 0,
            Selection::All => {
                for (name, predicate) in registry.iter() {
                    let result = predicate.test(&text);
                    trace!(event = "property_evaluated", property = name, result);
                    if result {
                        confirmed.insert(name.to_string());
                    }
                }
                registry.len()
            }
            Selection::Names(names) => {
                for name in &names {
                    if registry.evaluate(name, &text)? {
                        confirmed.insert(name.clone());
                    }
                }
                names.len()
            }
        };

        debug!(
            event = "battery_evaluated",
            requested,
            confirmed = confirmed.len()
        );

        Ok(Self {
            registry,
            text,
            confirmed,
        })
    }

    /// Returns true iff every property in `names` holds.
    ///
    /// Confirmed properties are not evaluated again. Any other property is
    /// evaluated now and, if it holds, added to the confirmed set. Evaluation
    /// stops at the first property that fails.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FilterMakerError::NameNotFound`] for an unconfirmed
    /// name that is not registered.
    pub fn has<I, S>(&mut self, names: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if self.confirmed.contains(name) {
                continue;
            }
            if !self.registry.evaluate(name, &self.text)? {
                return Ok(false);
            }
            self.confirmed.insert(name.to_string());
        }
        Ok(true)
    }

    /// Returns true if `name` is already known to hold.
    pub fn is_confirmed(&self, name: &str) -> bool {
        self.confirmed.contains(name)
    }

    /// Iterates over the confirmed property names in sorted order.
    pub fn confirmed(&self) -> impl Iterator<Item = &str> {
        self.confirmed.iter().map(String::as_str)
    }

    #[inline]
    pub fn text(&self) -> &NormalizedText {
        &self.text
    }
}

impl fmt::Debug for PropertyFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyFilter")
            .field("text", &self.text)
            .field("confirmed", &self.confirmed)
            .finish()
    }
}
