//! Letter sets.
//!
//! All sets are lowercase, matching the normalized form predicates see.

/// The 22 Hebrew letters plus the five final forms.
pub const HEBREW_LETTERS: &str = "אבגדהוזחטיכךלמםנןסעפףצץקרשת";

/// The basic Latin lowercase letters.
pub const LATIN_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Iterates over [`HEBREW_LETTERS`].
pub fn hebrew_letters() -> impl Iterator<Item = char> + Clone {
    HEBREW_LETTERS.chars()
}

/// Iterates over [`LATIN_LETTERS`].
pub fn latin_letters() -> impl Iterator<Item = char> + Clone {
    LATIN_LETTERS.chars()
}
