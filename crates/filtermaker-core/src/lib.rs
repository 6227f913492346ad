//! filtermaker core - named text properties with lazy evaluation
//!
//! This crate provides the building blocks for filtermaker:
//! - Normalized text (NFC, lowercased) shared by every evaluation
//! - Predicates over that text and the four built-in builders
//! - An explicit property registry mapping names to predicates
//! - A short-circuiting chain wrapper and a memoizing filter wrapper

pub mod builders;
pub mod cached;
pub mod chain;
pub mod error;
pub mod filter;
pub mod registry;
pub mod text;


pub use builders::{haschars, hascluster, hasregex, onlycharset, IntoPattern};
pub use cached::{PropertyFilter, Selection};
pub use chain::PropertyText;
pub use error::{FilterMakerError, Result};
pub use filter::{predicate, Predicate, TextPredicate};
pub use registry::{BuilderOutput, PropertyRegistry};
pub use text::{normalize, NormalizedText};
