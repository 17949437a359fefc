//! Real file system implementation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use reqcheck_application::ports::{FileSystem, FileSystemError};
use tokio::fs;

/// Real file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn map_io(path: &Path, e: std::io::Error) -> FileSystemError {
        match e.kind() {
            ErrorKind::NotFound => FileSystemError::NotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => FileSystemError::PermissionDenied(path.to_path_buf()),
            _ => FileSystemError::Io(e),
        }
    }
}

impl FileSystem for TokioFileSystem {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
        fs::read(path).await.map_err(|e| Self::map_io(path, e))
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok()
    }

    async fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
        let mut entries = Vec::new();
        let mut dir = fs::read_dir(path)
            .await
            .map_err(|e| Self::map_io(path, e))?;

        while let Some(entry) = dir.next_entry().await? {
            entries.push(entry.path());
        }

        entries.sort(); // Deterministic ordering
        Ok(entries)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_file_and_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prod.properties");
        std::fs::write(&path, "baseURI=https://reqres.in\n").unwrap();

        let fs = TokioFileSystem::new();
        assert!(fs.exists(&path).await);
        assert_eq!(fs.read_file(&path).await.unwrap(), b"baseURI=https://reqres.in\n");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.properties");

        let fs = TokioFileSystem::new();
        assert!(!fs.exists(&path).await);
        assert!(matches!(
            fs.read_file(&path).await,
            Err(FileSystemError::NotFound(p)) if p == path
        ));
    }

    #[tokio::test]
    async fn test_read_dir_is_sorted() {
        let dir = tempdir().unwrap();
        for name in ["staging.properties", "prod.properties", "dev.properties"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }

        let entries = TokioFileSystem::new().read_dir(dir.path()).await.unwrap();
        let names: Vec<_> = entries
            .iter()
            .filter_map(|p| p.file_name()?.to_str())
            .collect();
        assert_eq!(
            names,
            vec!["dev.properties", "prod.properties", "staging.properties"]
        );
    }
}
