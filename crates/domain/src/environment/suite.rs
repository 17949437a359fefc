//! Immutable configuration shared by every check in a run

use url::Url;

use super::{EnvironmentConfig, EnvironmentLabel};
use crate::error::DomainResult;
use crate::request::RequestSpec;

/// The active environment together with its parsed base URI.
///
/// Built once at suite setup and passed by reference to every
/// request-building call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    environment: EnvironmentConfig,
    base_uri: Url,
}

impl SuiteConfig {
    /// Validates `environment` and captures its base URI.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URI property is missing or invalid.
    pub fn from_environment(environment: EnvironmentConfig) -> DomainResult<Self> {
        let base_uri = environment.base_uri()?;
        Ok(Self {
            environment,
            base_uri,
        })
    }

    /// Returns the active environment label.
    #[must_use]
    pub const fn label(&self) -> &EnvironmentLabel {
        self.environment.label()
    }

    /// Returns the base URI all endpoints are resolved against.
    #[must_use]
    pub const fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    /// Returns the full environment configuration.
    #[must_use]
    pub const fn environment(&self) -> &EnvironmentConfig {
        &self.environment
    }

    /// Resolves `request` against this configuration's base URI.
    ///
    /// # Errors
    ///
    /// Returns an error if the request path is not a valid relative path.
    pub fn url_for(&self, request: &RequestSpec) -> DomainResult<Url> {
        request.resolve_url(&self.base_uri)
    }
}
