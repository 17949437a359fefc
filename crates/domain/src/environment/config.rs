//! Environment configuration loaded from a properties resource

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use super::EnvironmentLabel;
use crate::error::{DomainError, DomainResult};

/// Property key holding the root address of the API under test.
pub const BASE_URI_KEY: &str = "baseURI";

/// Key-value configuration for a single environment.
///
/// Created once at suite setup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    label: EnvironmentLabel,
    properties: BTreeMap<String, String>,
}

impl EnvironmentConfig {
    /// Creates a configuration for `label` from raw properties.
    pub fn new(
        label: EnvironmentLabel,
        properties: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            label,
            properties: properties.into_iter().collect(),
        }
    }

    /// Returns the environment label this configuration was loaded for.
    #[must_use]
    pub const fn label(&self) -> &EnvironmentLabel {
        &self.label
    }

    /// Gets a property value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Returns all properties, sorted by key.
    #[must_use]
    pub const fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Extracts and parses the [`BASE_URI_KEY`] property.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingProperty` when the key is absent or blank,
    /// and `DomainError::InvalidUrl` when the value is not an absolute
    /// `http`/`https` URL with a host.
    pub fn base_uri(&self) -> DomainResult<Url> {
        let raw = self
            .get(BASE_URI_KEY)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| DomainError::MissingProperty {
                environment: self.label.to_string(),
                key: BASE_URI_KEY.to_string(),
            })?;

        let url = Url::parse(raw).map_err(|e| DomainError::InvalidUrl(format!("{e}: {raw}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "unsupported scheme '{}': {raw}",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(DomainError::InvalidUrl(format!("missing host: {raw}")));
        }

        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(pairs: &[(&str, &str)]) -> EnvironmentConfig {
        EnvironmentConfig::new(
            EnvironmentLabel::default(),
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        )
    }

    #[test]
    fn test_base_uri_parsed() {
        let config = config(&[("baseURI", "https://reqres.in")]);
        assert_eq!(config.base_uri().unwrap().as_str(), "https://reqres.in/");
    }

    #[test]
    fn test_base_uri_missing() {
        let config = config(&[("other", "value")]);
        assert_eq!(
            config.base_uri(),
            Err(DomainError::MissingProperty {
                environment: "prod".to_string(),
                key: "baseURI".to_string(),
            })
        );
    }

    #[test]
    fn test_base_uri_blank_is_missing() {
        let config = config(&[("baseURI", "   ")]);
        assert!(matches!(
            config.base_uri(),
            Err(DomainError::MissingProperty { .. })
        ));
    }

    #[test]
    fn test_base_uri_key_is_case_sensitive() {
        let config = config(&[("baseuri", "https://reqres.in")]);
        assert!(config.base_uri().is_err());
    }

    #[test]
    fn test_base_uri_rejects_relative_and_foreign_schemes() {
        assert!(matches!(
            config(&[("baseURI", "reqres.in")]).base_uri(),
            Err(DomainError::InvalidUrl(_))
        ));
        assert!(matches!(
            config(&[("baseURI", "ftp://reqres.in")]).base_uri(),
            Err(DomainError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_properties_accessors() {
        let config = config(&[("baseURI", "https://reqres.in"), ("timeout", "5")]);
        assert_eq!(config.len(), 2);
        assert!(!config.is_empty());
        assert_eq!(config.get("timeout"), Some("5"));
        assert_eq!(config.label().as_str(), "prod");
    }
}
