//! filtermaker - named text properties with lazy evaluation
//!
//! Register named yes/no properties of text, then ask which of them hold for
//! a given string. Text is normalized (NFC, lowercase) once; chains of
//! properties stop at the first one that fails.
//!
//! # Example
//!
//! ```rust
//! use filtermaker::prelude::*;
//!
//! let mut registry = PropertyRegistry::new();
//! registry.register("hasheb", haschars("אבגדהוזחטיכךלמםנןסעפףצץקרשת".chars()));
//! registry.register("onlylatin", onlycharset('a'..='z'));
//!
//! assert!(PropertyText::new(&registry, "שלום world").has(["hasheb"])?);
//! assert!(PropertyText::new(&registry, "Hello123").has(["onlylatin"])?);
//! # Ok::<(), FilterMakerError>(())
//! ```

pub use filtermaker_core::{
    builders, cached, chain, error, filter, registry, text,
};
pub use filtermaker_core::{
    haschars, hascluster, hasregex, normalize, onlycharset, predicate, BuilderOutput,
    FilterMakerError, IntoPattern, NormalizedText, Predicate, PropertyFilter, PropertyRegistry,
    PropertyText, Result, Selection, TextPredicate,
};

// Declarative rulesets
pub use filtermaker_config::{ConfigError, PropertyConfig, RulesetConfig};

// Console output
#[cfg(feature = "console")]
pub use filtermaker_console as console;

pub mod prelude {
    pub use super::{
        haschars, hascluster, hasregex, onlycharset, predicate, FilterMakerError, PropertyFilter,
        PropertyRegistry, PropertyText, RulesetConfig, Selection, TextPredicate,
    };
}
