//! Sample ruleset shared by the core, config and facade tests.
//!
//! The rules are plain data so that each crate can build them with its own
//! API: the core tests call the builders directly, the config tests parse
//! [`sample_ruleset_toml`].
//!
//! # Example
//!
//! ```
//! use filtermaker_test::ruleset::{sample_ruleset, RuleKind};
//!
//! let rules = sample_ruleset();
//! assert!(rules.iter().any(|r| r.name == "hasheb" && r.kind == RuleKind::HasChars));
//! ```

use std::fmt::Write;

use crate::alphabets::{HEBREW_LETTERS, LATIN_LETTERS};

/// Which builder a sample rule uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    HasChars,
    HasCluster,
    OnlyCharset,
    HasRegex,
}

impl RuleKind {
    /// The `type` tag used by ruleset documents.
    pub fn type_tag(self) -> &'static str {
        match self {
            RuleKind::HasChars => "has_chars",
            RuleKind::HasCluster => "has_cluster",
            RuleKind::OnlyCharset => "only_charset",
            RuleKind::HasRegex => "has_regex",
        }
    }
}

/// One named rule. `value` is the character set, the single cluster or the
/// regex source depending on `kind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleRule {
    pub name: &'static str,
    pub kind: RuleKind,
    pub value: &'static str,
}

/// Returns the sample rules in declaration order.
pub fn sample_ruleset() -> Vec<SampleRule> {
    vec![
        SampleRule {
            name: "hasheb",
            kind: RuleKind::HasChars,
            value: HEBREW_LETTERS,
        },
        SampleRule {
            name: "onlylatin",
            kind: RuleKind::OnlyCharset,
            value: LATIN_LETTERS,
        },
        SampleRule {
            name: "onlyheb",
            kind: RuleKind::OnlyCharset,
            value: HEBREW_LETTERS,
        },
        SampleRule {
            name: "has_sh",
            kind: RuleKind::HasCluster,
            value: "sh",
        },
        SampleRule {
            name: "has_abc",
            kind: RuleKind::HasRegex,
            value: "ab+c",
        },
    ]
}

/// Renders [`sample_ruleset`] as a TOML ruleset document.
pub fn sample_ruleset_toml() -> String {
    let mut doc = String::new();
    for rule in sample_ruleset() {
        let field = match rule.kind {
            RuleKind::HasChars | RuleKind::OnlyCharset => format!("chars = '{}'", rule.value),
            RuleKind::HasCluster => format!("clusters = ['{}']", rule.value),
            RuleKind::HasRegex => format!("pattern = '{}'", rule.value),
        };
        // Writing to a String cannot fail.
        let _ = write!(
            doc,
            "[[properties]]\ntype = \"{}\"\nname = \"{}\"\n{}\n\n",
            rule.kind.type_tag(),
            rule.name,
            field
        );
    }
    doc
}
