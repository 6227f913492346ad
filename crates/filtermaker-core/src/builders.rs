//! The four built-in predicate builders.
//!
//! Each builder turns a small configuration value into a [`Predicate`]:
//!
//! | Builder | True when |
//! |---------|-----------|
//! | [`haschars`] | the text contains at least one character of the set |
//! | [`hascluster`] | the text contains at least one of the clusters as a substring |
//! | [`onlycharset`] | every letter (general category L) of the text is in the set |
//! | [`hasregex`] | the pattern matches somewhere in the text |
//!
//! Predicates run on normalized (lowercased) text, so configured characters
//! and clusters must be given in lowercase to match.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::error::{FilterMakerError, Result};
use crate::filter::{Predicate, TextPredicate};

// A single character of general category L (Lu, Ll, Lt, Lm, Lo).
static LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}").expect("\\p{L} is a valid character class"));

// ============================================================================
// HasChars
// ============================================================================

/// True iff the text contains at least one character from the set.
#[derive(Debug, Clone)]
pub struct HasChars {
    charset: HashSet<char>,
}

impl HasChars {
    pub fn new<I>(charset: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            charset: charset.into_iter().collect(),
        }
    }
}

impl TextPredicate for HasChars {
    #[inline]
    fn test(&self, text: &str) -> bool {
        text.chars().any(|c| self.charset.contains(&c))
    }
}

// ============================================================================
// HasCluster
// ============================================================================

/// True iff the text contains at least one cluster as a contiguous substring.
#[derive(Debug, Clone)]
pub struct HasCluster {
    clusters: Vec<String>,
}

impl HasCluster {
    /// Creates the predicate.
    ///
    /// # Errors
    ///
    /// Returns [`FilterMakerError::Configuration`] if any cluster is empty,
    /// since an empty cluster would match every text.
    pub fn new<I, S>(clusters: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let clusters: Vec<String> = clusters.into_iter().map(Into::into).collect();
        if clusters.iter().any(String::is_empty) {
            return Err(FilterMakerError::Configuration(
                "cluster set contains an empty string".to_string(),
            ));
        }
        Ok(Self { clusters })
    }
}

impl TextPredicate for HasCluster {
    #[inline]
    fn test(&self, text: &str) -> bool {
        self.clusters.iter().any(|cluster| text.contains(cluster.as_str()))
    }
}

// ============================================================================
// OnlyCharset
// ============================================================================

/// True iff every letter in the text belongs to the set.
///
/// Digits, punctuation, marks and whitespace are ignored, so a text without
/// letters always passes.
#[derive(Debug, Clone)]
pub struct OnlyCharset {
    charset: HashSet<char>,
}

impl OnlyCharset {
    pub fn new<I>(charset: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            charset: charset.into_iter().collect(),
        }
    }
}

impl TextPredicate for OnlyCharset {
    fn test(&self, text: &str) -> bool {
        LETTER
            .find_iter(text)
            .all(|letter| letter.as_str().chars().all(|c| self.charset.contains(&c)))
    }
}

// ============================================================================
// HasRegex
// ============================================================================

/// True iff the pattern finds a match anywhere in the text.
#[derive(Debug, Clone)]
pub struct HasRegex {
    regex: Regex,
}

impl HasRegex {
    /// Creates the predicate from a compiled pattern or a pattern source.
    ///
    /// # Errors
    ///
    /// Returns [`FilterMakerError::Configuration`] if a source string does
    /// not compile.
    pub fn new<P: IntoPattern>(pattern: P) -> Result<Self> {
        Ok(Self {
            regex: pattern.into_pattern()?,
        })
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl TextPredicate for HasRegex {
    #[inline]
    fn test(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Values accepted by [`hasregex`]: compiled patterns or pattern sources.
///
/// Sources are compiled once, when the predicate is built.
pub trait IntoPattern {
    /// Produces the compiled pattern.
    fn into_pattern(self) -> Result<Regex>;
}

impl IntoPattern for Regex {
    fn into_pattern(self) -> Result<Regex> {
        Ok(self)
    }
}

impl IntoPattern for &Regex {
    fn into_pattern(self) -> Result<Regex> {
        Ok(self.clone())
    }
}

impl IntoPattern for &str {
    fn into_pattern(self) -> Result<Regex> {
        Regex::new(self).map_err(|e| {
            FilterMakerError::Configuration(format!("invalid regex {:?}: {}", self, e))
        })
    }
}

impl IntoPattern for String {
    fn into_pattern(self) -> Result<Regex> {
        self.as_str().into_pattern()
    }
}

impl IntoPattern for &String {
    fn into_pattern(self) -> Result<Regex> {
        self.as_str().into_pattern()
    }
}

// ============================================================================
// Builder functions
// ============================================================================

/// Builds a predicate that is true iff the text contains any of `charset`.
///
/// An empty set yields a predicate that is always false.
///
/// # Example
///
/// ```
/// use filtermaker_core::builders::haschars;
/// use filtermaker_core::TextPredicate;
///
/// let has_vowel = haschars("aeiou".chars());
/// assert!(has_vowel.test("rhythm and blues"));
/// assert!(!has_vowel.test("rhythm"));
/// ```
pub fn haschars<I>(charset: I) -> Predicate
where
    I: IntoIterator<Item = char>,
{
    Arc::new(HasChars::new(charset))
}

/// Builds a predicate that is true iff the text contains any of `clusters`.
///
/// # Errors
///
/// Returns [`FilterMakerError::Configuration`] for an empty cluster.
pub fn hascluster<I, S>(clusters: I) -> Result<Predicate>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Ok(Arc::new(HasCluster::new(clusters)?))
}

/// Builds a predicate that is true iff every letter of the text is in
/// `charset`.
pub fn onlycharset<I>(charset: I) -> Predicate
where
    I: IntoIterator<Item = char>,
{
    Arc::new(OnlyCharset::new(charset))
}

/// Builds a predicate that is true iff `pattern` matches within the text.
///
/// # Errors
///
/// Returns [`FilterMakerError::Configuration`] if a source string does not
/// compile.
///
/// # Example
///
/// ```
/// use filtermaker_core::builders::hasregex;
/// use filtermaker_core::TextPredicate;
///
/// let abc = hasregex("ab+c").unwrap();
/// assert!(abc.test("xxabbbcxx"));
/// assert!(!abc.test("ac"));
/// ```
pub fn hasregex<P: IntoPattern>(pattern: P) -> Result<Predicate> {
    Ok(Arc::new(HasRegex::new(pattern)?))
}
