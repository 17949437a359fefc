//! Environment label type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Name of a deployment target whose configuration should be loaded.
///
/// Labels map one-to-one onto resource files (`prod` -> `prod.properties`),
/// so only ASCII letters, digits, `-` and `_` are accepted. This keeps a
/// label from ever escaping the resources directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnvironmentLabel(String);

impl EnvironmentLabel {
    /// Label used when no environment is selected explicitly.
    pub const DEFAULT: &'static str = "prod";

    /// File extension of environment resources.
    pub const RESOURCE_EXTENSION: &'static str = "properties";

    /// Creates a validated label.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEnvironmentLabel` if the label is empty
    /// or contains characters other than ASCII alphanumerics, `-` and `_`.
    pub fn new(label: impl Into<String>) -> DomainResult<Self> {
        let label = label.into();
        let trimmed = label.trim();
        let valid = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(DomainError::InvalidEnvironmentLabel(label))
        }
    }

    /// Resolves an externally supplied selection, falling back to
    /// [`EnvironmentLabel::DEFAULT`] when it is unset or blank.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-blank value is not a valid label.
    pub fn from_selection(selection: Option<&str>) -> DomainResult<Self> {
        match selection.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(value) => Self::new(value),
        }
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the resource file name for this label, e.g. `prod.properties`.
    #[must_use]
    pub fn resource_file_name(&self) -> String {
        format!("{}.{}", self.0, Self::RESOURCE_EXTENSION)
    }
}

impl Default for EnvironmentLabel {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for EnvironmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EnvironmentLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for EnvironmentLabel {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<EnvironmentLabel> for String {
    fn from(label: EnvironmentLabel) -> Self {
        label.0
    }
}

impl AsRef<str> for EnvironmentLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
