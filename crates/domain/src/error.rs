//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// An environment label is empty or contains forbidden characters.
    #[error("invalid environment label: {0:?}")]
    InvalidEnvironmentLabel(String),

    /// A required configuration property is absent or empty.
    #[error("missing property '{key}' in environment '{environment}'")]
    MissingProperty {
        /// Environment the property was looked up in.
        environment: String,
        /// The property key.
        key: String,
    },

    /// An endpoint path is not a valid relative path.
    #[error("invalid endpoint path: {0}")]
    InvalidPath(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
