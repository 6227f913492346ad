//! Configuration system for filtermaker.
//!
//! Declare a ruleset of named properties in TOML or YAML and build a
//! [`PropertyRegistry`] from it without code changes.
//!
//! # Examples
//!
//! Load a ruleset from a TOML string:
//!
//! ```
//! use filtermaker_config::RulesetConfig;
//! use filtermaker_core::PropertyText;
//!
//! let config = RulesetConfig::from_toml_str(r#"
//!     [[properties]]
//!     type = "has_chars"
//!     name = "hasheb"
//!     chars = "אבגדהוזחטיכךלמםנןסעפףצץקרשת"
//!
//!     [[properties]]
//!     type = "has_regex"
//!     name = "has_digits"
//!     pattern = "[0-9]+"
//! "#).unwrap();
//!
//! let registry = config.build_registry().unwrap();
//! let text = PropertyText::new(&registry, "שלום 2024");
//! assert!(text.has(["hasheb", "has_digits"]).unwrap());
//! ```
//!
//! Use an empty ruleset when the file is missing:
//!
//! ```
//! use filtermaker_config::RulesetConfig;
//!
//! let config = RulesetConfig::load("ruleset.toml").unwrap_or_default();
//! // Proceeds with no properties if the file doesn't exist
//! ```

use std::path::Path;

use filtermaker_core::{
    haschars, hascluster, hasregex, normalize, onlycharset, FilterMakerError, Predicate,
    PropertyRegistry,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Property {name}: {source}")]
    Build {
        name: String,
        #[source]
        source: FilterMakerError,
    },
}

/// A ruleset: the properties to register, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RulesetConfig {
    /// Normalize configured characters and clusters (NFC, lowercase) before
    /// building, so mixed-case or decomposed declarations still match
    /// normalized text.
    #[serde(default)]
    pub lowercase: bool,

    /// Property declarations.
    #[serde(default)]
    pub properties: Vec<PropertyConfig>,
}

impl RulesetConfig {
    /// Creates an empty ruleset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a ruleset from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads a ruleset from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a ruleset from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a ruleset from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a ruleset from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Adds a property declaration.
    pub fn with_property(mut self, property: PropertyConfig) -> Self {
        self.properties.push(property);
        self
    }

    /// Sets whether configured characters are normalized before building.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Builds a fresh registry holding every declared property.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a property with an empty name and
    /// [`ConfigError::Build`] when a builder rejects its configuration.
    pub fn build_registry(&self) -> Result<PropertyRegistry, ConfigError> {
        let mut registry = PropertyRegistry::new();
        self.register_into(&mut registry)?;
        Ok(registry)
    }

    /// Registers every declared property into `registry`, in declaration
    /// order. A later declaration replaces an earlier one with the same name.
    ///
    /// Properties declared before a failing one stay registered.
    pub fn register_into(&self, registry: &mut PropertyRegistry) -> Result<(), ConfigError> {
        for property in &self.properties {
            let name = property.name();
            if name.is_empty() {
                return Err(ConfigError::Invalid(
                    "property declared without a name".to_string(),
                ));
            }
            let predicate = property
                .build(self.lowercase)
                .map_err(|source| ConfigError::Build {
                    name: name.to_string(),
                    source,
                })?;
            registry.register(name, predicate);
        }
        Ok(())
    }
}

/// A single property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyConfig {
    /// True when the text contains any of `chars`.
    HasChars { name: String, chars: String },

    /// True when the text contains any of `clusters` as a substring.
    HasCluster { name: String, clusters: Vec<String> },

    /// True when every letter of the text is one of `chars`.
    OnlyCharset { name: String, chars: String },

    /// True when `pattern` matches somewhere in the text.
    HasRegex { name: String, pattern: String },
}

impl PropertyConfig {
    /// Declares a `has_chars` property.
    pub fn has_chars(name: impl Into<String>, chars: impl Into<String>) -> Self {
        Self::HasChars {
            name: name.into(),
            chars: chars.into(),
        }
    }

    /// Declares a `has_cluster` property.
    pub fn has_cluster<I, S>(name: impl Into<String>, clusters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::HasCluster {
            name: name.into(),
            clusters: clusters.into_iter().map(Into::into).collect(),
        }
    }

    /// Declares an `only_charset` property.
    pub fn only_charset(name: impl Into<String>, chars: impl Into<String>) -> Self {
        Self::OnlyCharset {
            name: name.into(),
            chars: chars.into(),
        }
    }

    /// Declares a `has_regex` property.
    pub fn has_regex(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::HasRegex {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// Returns the declared property name.
    pub fn name(&self) -> &str {
        match self {
            Self::HasChars { name, .. }
            | Self::HasCluster { name, .. }
            | Self::OnlyCharset { name, .. }
            | Self::HasRegex { name, .. } => name,
        }
    }

    /// Builds the predicate for this declaration.
    ///
    /// Regex patterns are never lowercased; use `(?i)` for case-insensitive
    /// matching.
    ///
    /// # Errors
    ///
    /// Returns [`FilterMakerError::Configuration`] for an empty cluster or a
    /// pattern that does not compile.
    pub fn build(&self, lowercase: bool) -> Result<Predicate, FilterMakerError> {
        let fold = |s: &str| {
            if lowercase {
                normalize(s)
            } else {
                s.to_string()
            }
        };

        match self {
            Self::HasChars { chars, .. } => Ok(haschars(fold(chars).chars())),
            Self::HasCluster { clusters, .. } => {
                hascluster(clusters.iter().map(|c| fold(c)))
            }
            Self::OnlyCharset { chars, .. } => Ok(onlycharset(fold(chars).chars())),
            Self::HasRegex { pattern, .. } => hasregex(pattern.as_str()),
        }
    }
}

#[cfg(test)]
mod tests;
