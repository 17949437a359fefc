//! Configure environment use case
//!
//! Resolves an environment label to the immutable [`SuiteConfig`] every
//! check runs against. Any failure here must stop the run before the first
//! request is sent.

use std::path::PathBuf;

use reqcheck_domain::{DomainError, EnvironmentLabel, SuiteConfig};
use tracing::{info, warn};

use crate::ports::{EnvironmentError, EnvironmentRepository};

/// Errors that abort suite setup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// The selected label is not a valid environment name.
    #[error("invalid environment label: {0:?}")]
    InvalidLabel(String),

    /// No resource exists for the label.
    #[error(
        "no configuration for environment '{label}' at {} (available: {})",
        .path.display(),
        display_labels(.available)
    )]
    NotFound {
        /// Requested label.
        label: String,
        /// Path that was looked up.
        path: PathBuf,
        /// Labels that do have a resource.
        available: Vec<String>,
    },

    /// The resource could not be read.
    #[error("failed to read configuration for environment '{label}': {message}")]
    Io {
        /// Requested label.
        label: String,
        /// Underlying error message.
        message: String,
    },

    /// The resource could not be parsed.
    #[error("failed to parse configuration for environment '{label}': {message}")]
    Parse {
        /// Requested label.
        label: String,
        /// Parser message.
        message: String,
    },

    /// The `baseURI` property is absent or blank.
    #[error("environment '{label}' does not define '{key}'")]
    MissingBaseUri {
        /// Requested label.
        label: String,
        /// The missing key.
        key: String,
    },

    /// The `baseURI` property is not a usable absolute URL.
    #[error("environment '{label}' has an invalid base URI: {message}")]
    InvalidBaseUri {
        /// Requested label.
        label: String,
        /// Validation message.
        message: String,
    },
}

fn display_labels(labels: &[String]) -> String {
    if labels.is_empty() {
        "none".to_string()
    } else {
        labels.join(", ")
    }
}

/// Loads the selected environment and validates its base URI.
pub struct ConfigureEnvironment<R> {
    repository: R,
}

impl<R: EnvironmentRepository> ConfigureEnvironment<R> {
    /// Creates a new `ConfigureEnvironment` use case.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Resolves an externally supplied selection (unset or blank means
    /// `prod`) and configures it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidLabel` for a malformed selection,
    /// otherwise the errors of [`ConfigureEnvironment::execute`].
    pub async fn execute_selection(
        &self,
        selection: Option<&str>,
    ) -> Result<SuiteConfig, ConfigurationError> {
        let label = EnvironmentLabel::from_selection(selection).map_err(|_| {
            ConfigurationError::InvalidLabel(selection.unwrap_or_default().to_string())
        })?;
        self.execute(&label).await
    }

    /// Loads `label` and builds the suite configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource is missing, unreadable or
    /// unparseable, or if it lacks a valid `baseURI`.
    pub async fn execute(
        &self,
        label: &EnvironmentLabel,
    ) -> Result<SuiteConfig, ConfigurationError> {
        let environment = match self.repository.load(label).await {
            Ok(environment) => environment,
            Err(EnvironmentError::NotFound { label, path }) => {
                let available = self.available_labels().await;
                return Err(ConfigurationError::NotFound {
                    label,
                    path,
                    available,
                });
            }
            Err(EnvironmentError::Io(e)) => {
                return Err(ConfigurationError::Io {
                    label: label.to_string(),
                    message: e.to_string(),
                });
            }
            Err(EnvironmentError::Parse { message, .. }) => {
                return Err(ConfigurationError::Parse {
                    label: label.to_string(),
                    message,
                });
            }
        };

        let config = SuiteConfig::from_environment(environment).map_err(|e| match e {
            DomainError::MissingProperty { environment, key } => {
                ConfigurationError::MissingBaseUri {
                    label: environment,
                    key,
                }
            }
            other => ConfigurationError::InvalidBaseUri {
                label: label.to_string(),
                message: other.to_string(),
            },
        })?;

        info!(
            environment = %config.label(),
            base_uri = %config.base_uri(),
            properties = config.environment().len(),
            "environment configured"
        );

        Ok(config)
    }

    async fn available_labels(&self) -> Vec<String> {
        match self.repository.list().await {
            Ok(labels) => labels.into_iter().map(String::from).collect(),
            Err(e) => {
                warn!(error = %e, "could not list available environments");
                Vec::new()
            }
        }
    }
}
