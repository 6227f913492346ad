//! Shared test fixtures for filtermaker crates.
//!
//! This crate provides plain data and closures for testing.
//! It does NOT depend on `filtermaker-core` so that the core crate can use
//! it as a dev-dependency without a cycle.
//!
//! - [`alphabets`] - letter sets used by the sample rulesets
//! - [`counter`] - call-counting stub predicates
//! - [`ruleset`] - a sample ruleset as plain data and as TOML
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! filtermaker-test = { workspace = true }
//! ```

pub mod alphabets;
pub mod counter;
pub mod ruleset;

pub use alphabets::{HEBREW_LETTERS, LATIN_LETTERS};
pub use counter::CallCounter;
pub use ruleset::{sample_ruleset, sample_ruleset_toml, RuleKind, SampleRule};
