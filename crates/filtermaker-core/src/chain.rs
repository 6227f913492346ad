//! Lazy, short-circuiting property chains.
//!
//! A [`PropertyText`] pairs normalized text with a status. Evaluating a
//! property on an active wrapper runs the predicate and yields a new wrapper
//! carrying the result. Once a property fails the wrapper is terminal:
//! further evaluations return it unchanged without running any predicate.
//!
//! ```
//! use filtermaker_core::{haschars, hasregex, PropertyRegistry, PropertyText};
//!
//! let mut registry = PropertyRegistry::new();
//! registry.register("has_digit", haschars('0'..='9'));
//! registry.register("has_word", hasregex(r"\bword\b").unwrap());
//!
//! let text = PropertyText::new(&registry, "One WORD and 1 digit");
//! let checked = text.evaluate("has_digit")?.evaluate("has_word")?;
//! assert!(checked.status());
//! assert!(text.has(["has_digit", "has_word"])?);
//! # Ok::<(), filtermaker_core::FilterMakerError>(())
//! ```

use std::fmt;

use tracing::trace;

use crate::error::Result;
use crate::filter::TextPredicate;
use crate::registry::PropertyRegistry;
use crate::text::NormalizedText;

/// Normalized text plus the outcome of the properties evaluated so far.
#[derive(Clone)]
pub struct PropertyText<'r> {
    registry: &'r PropertyRegistry,
    text: NormalizedText,
    status: bool,
}

impl<'r> PropertyText<'r> {
    /// Normalizes `raw` and creates an active wrapper.
    pub fn new(registry: &'r PropertyRegistry, raw: &str) -> Self {
        Self::from_normalized(registry, NormalizedText::new(raw))
    }

    /// Creates an active wrapper around already-normalized text.
    pub fn from_normalized(registry: &'r PropertyRegistry, text: NormalizedText) -> Self {
        Self {
            registry,
            text,
            status: true,
        }
    }

    /// Evaluates the property `name`.
    ///
    /// On an active wrapper the predicate runs exactly once and the returned
    /// wrapper carries its result. On a failed wrapper the predicate is not
    /// run and the failed wrapper is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FilterMakerError::NameNotFound`] if `name` is not
    /// registered, whatever the current status.
    pub fn evaluate(&self, name: &str) -> Result<Self> {
        let predicate = self.registry.get(name)?;
        if !self.status {
            trace!(event = "property_skipped", property = name);
            return Ok(self.clone());
        }

        let status = predicate.test(&self.text);
        trace!(event = "property_evaluated", property = name, result = status);
        Ok(Self {
            registry: self.registry,
            text: self.text.clone(),
            status,
        })
    }

    /// Returns true iff every property in `names` holds.
    ///
    /// Properties are evaluated left to right; evaluation stops at the first
    /// one that fails, and names after it are neither looked up nor run.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FilterMakerError::NameNotFound`] for an unknown name
    /// reached before the first failure.
    pub fn has<I, S>(&self, names: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = self.clone();
        for name in names {
            current = current.evaluate(name.as_ref())?;
            if !current.status {
                return Ok(false);
            }
        }
        Ok(current.status)
    }

    /// Returns true while every property evaluated on this chain has held.
    #[inline]
    pub fn status(&self) -> bool {
        self.status
    }

    /// Returns true once a property on this chain has failed.
    #[inline]
    pub fn is_failed(&self) -> bool {
        !self.status
    }

    #[inline]
    pub fn text(&self) -> &NormalizedText {
        &self.text
    }

    pub fn registry(&self) -> &'r PropertyRegistry {
        self.registry
    }
}

impl From<PropertyText<'_>> for bool {
    fn from(text: PropertyText<'_>) -> bool {
        text.status
    }
}

impl From<&PropertyText<'_>> for bool {
    fn from(text: &PropertyText<'_>) -> bool {
        text.status
    }
}

impl fmt::Debug for PropertyText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyText")
            .field("text", &self.text)
            .field("status", &self.status)
            .finish()
    }
}
