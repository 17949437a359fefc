//! Environment repository port
//!
//! Defines the interface for loading environment configurations.

use std::path::PathBuf;

use async_trait::async_trait;
use reqcheck_domain::{EnvironmentConfig, EnvironmentLabel};

/// Errors that can occur while loading an environment.
#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    /// No resource exists for the label.
    #[error("Environment '{label}' not found at {}", .path.display())]
    NotFound {
        /// Requested label.
        label: String,
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The resource exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The resource could not be parsed.
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse {
        /// Resource path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// Repository trait for environment configurations.
#[async_trait]
pub trait EnvironmentRepository: Send + Sync {
    /// Loads the configuration for `label`.
    ///
    /// # Errors
    ///
    /// Returns `EnvironmentError::NotFound` if no resource exists for the
    /// label.
    async fn load(&self, label: &EnvironmentLabel)
    -> Result<EnvironmentConfig, EnvironmentError>;

    /// Lists the labels that have a resource, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource location cannot be listed.
    async fn list(&self) -> Result<Vec<EnvironmentLabel>, EnvironmentError>;
}
