//! Filesystem storage backend

use crate::storage::Storage;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem storage backend
///
/// Stores each slot as `<dir>/<key>.json`.
/// Persistent across restarts, suitable for a single local user.
#[derive(Debug, Clone)]
pub struct FilesystemStorage {
    dir: PathBuf,
}

impl FilesystemStorage {
    /// Create a new filesystem storage backend rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();

        // Create storage directory if it doesn't exist
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create storage directory: {:?}", dir))?;

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the file path for a slot key
    fn key_to_path(&self, key: &str) -> PathBuf {
        // Sanitize key to make it filesystem-safe
        let safe_key = key.replace(['/', '\\', ':'], "_");

        self.dir.join(format!("{}.json", safe_key))
    }
}

impl Storage for FilesystemStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_to_path(key);

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read storage file: {:?}", path)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_to_path(key);

        fs::write(&path, value)
            .with_context(|| format!("Failed to write storage file: {:?}", path))
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.key_to_path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to delete storage file: {:?}", path)),
        }
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_filesystem_storage_basic() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FilesystemStorage::new(temp_dir.path()).unwrap();

        assert_eq!(storage.get("users").unwrap(), None);

        storage.set("users", "[]").unwrap();
        assert_eq!(storage.get("users").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("users.json").exists());

        storage.delete("users").unwrap();
        assert_eq!(storage.get("users").unwrap(), None);
        storage.delete("users").unwrap();
    }

    #[test]
    fn test_filesystem_storage_persistence() {
        let temp_dir = TempDir::new().unwrap();

        // Create storage and set a value
        {
            let storage = FilesystemStorage::new(temp_dir.path()).unwrap();
            storage.set("persistent", "[{\"id\":1}]").unwrap();
        }

        // Create new storage instance (simulating restart)
        {
            let storage = FilesystemStorage::new(temp_dir.path()).unwrap();
            assert_eq!(
                storage.get("persistent").unwrap().as_deref(),
                Some("[{\"id\":1}]")
            );
        }
    }

    #[test]
    fn test_filesystem_storage_creates_directory_and_sanitizes_keys() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let storage = FilesystemStorage::new(&nested).unwrap();

        storage.set("app:users/v1", "x").unwrap();
        assert!(nested.join("app_users_v1.json").exists());
        assert_eq!(storage.dir(), nested.as_path());
    }
}
