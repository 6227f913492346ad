//! Normalized text.
//!
//! Every property is evaluated against the canonical form of its input:
//! Unicode NFC followed by lowercasing. The canonical form is computed once,
//! when a [`NormalizedText`] is created, and shared by every wrapper derived
//! from it.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;

/// Returns the canonical form of `raw`: NFC, then lowercase.
///
/// # Example
///
/// ```
/// use filtermaker_core::text::normalize;
///
/// // "e" + COMBINING ACUTE ACCENT composes to a single code point.
/// assert_eq!(normalize("E\u{301}COLE"), "\u{e9}cole");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.nfc().collect::<String>().to_lowercase()
}

/// Text in canonical form.
///
/// There is no way to build one from an arbitrary string without normalizing
/// it, so holding a `NormalizedText` means normalization already happened.
/// Clones share the underlying buffer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NormalizedText {
    data: Arc<str>,
}

impl NormalizedText {
    /// Normalizes `raw` and wraps the result.
    pub fn new(raw: &str) -> Self {
        Self {
            data: Arc::from(normalize(raw)),
        }
    }

    /// Returns the normalized text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Deref for NormalizedText {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.data
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.data
    }
}

impl From<&str> for NormalizedText {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for NormalizedText {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl fmt::Debug for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.data, f)
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}
