//! `.properties`-file environment repository.
//!
//! Each environment is one Java-style properties file in a resources
//! directory:
//!
//! ```text
//! resources/
//!   prod.properties      # baseURI=https://reqres.in
//!   staging.properties
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqcheck_application::ports::{
    EnvironmentError, EnvironmentRepository, FileSystem, FileSystemError,
};
use reqcheck_domain::{EnvironmentConfig, EnvironmentLabel};
use tracing::debug;

/// Loads environments from `<resources_dir>/<label>.properties`.
#[derive(Debug, Clone)]
pub struct PropertiesEnvironmentRepository<F> {
    fs: F,
    resources_dir: PathBuf,
}

impl<F: FileSystem> PropertiesEnvironmentRepository<F> {
    /// Creates a repository reading from `resources_dir`.
    pub fn new(fs: F, resources_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            resources_dir: resources_dir.into(),
        }
    }

    /// Returns the resource path for `label`.
    #[must_use]
    pub fn environment_path(&self, label: &EnvironmentLabel) -> PathBuf {
        self.resources_dir.join(label.resource_file_name())
    }

    fn label_from_path(path: &Path) -> Option<EnvironmentLabel> {
        if path.extension()? != EnvironmentLabel::RESOURCE_EXTENSION {
            return None;
        }
        EnvironmentLabel::new(path.file_stem()?.to_str()?).ok()
    }
}

fn to_io_error(e: FileSystemError) -> std::io::Error {
    match e {
        FileSystemError::Io(io_err) => io_err,
        FileSystemError::NotFound(path) => {
            std::io::Error::new(std::io::ErrorKind::NotFound, path.display().to_string())
        }
        FileSystemError::PermissionDenied(path) => std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            path.display().to_string(),
        ),
    }
}

#[async_trait]
impl<F: FileSystem> EnvironmentRepository for PropertiesEnvironmentRepository<F> {
    async fn load(
        &self,
        label: &EnvironmentLabel,
    ) -> Result<EnvironmentConfig, EnvironmentError> {
        let path = self.environment_path(label);

        let content = match self.fs.read_file(&path).await {
            Ok(content) => content,
            Err(FileSystemError::NotFound(path)) => {
                return Err(EnvironmentError::NotFound {
                    label: label.to_string(),
                    path,
                });
            }
            Err(e) => return Err(EnvironmentError::Io(to_io_error(e))),
        };

        let properties =
            java_properties::read(content.as_slice()).map_err(|e| EnvironmentError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        debug!(
            environment = %label,
            path = %path.display(),
            properties = properties.len(),
            "environment resource loaded"
        );

        Ok(EnvironmentConfig::new(label.clone(), properties))
    }

    async fn list(&self) -> Result<Vec<EnvironmentLabel>, EnvironmentError> {
        if !self.fs.exists(&self.resources_dir).await {
            return Ok(Vec::new());
        }

        let entries = self
            .fs
            .read_dir(&self.resources_dir)
            .await
            .map_err(|e| EnvironmentError::Io(to_io_error(e)))?;

        let mut labels: Vec<_> = entries
            .iter()
            .filter_map(|path| Self::label_from_path(path))
            .collect();
        labels.sort();
        Ok(labels)
    }
}
