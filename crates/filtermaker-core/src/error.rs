//! Error types for filtermaker

use thiserror::Error;

/// Main error type for filtermaker operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterMakerError {
    /// A query referenced a property that was never registered
    #[error("Property not found: {name}")]
    NameNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A predicate builder was given an unusable configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FilterMakerError {
    pub(crate) fn name_not_found(name: impl Into<String>) -> Self {
        Self::NameNotFound { name: name.into() }
    }
}

/// Result type alias for filtermaker operations
pub type Result<T> = std::result::Result<T, FilterMakerError>;
