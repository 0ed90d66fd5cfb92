// File: signup-form/src/config.rs
// Purpose: Configuration parsing from signup.toml

use crate::record::DEFAULT_STORAGE_KEY;
use crate::storage::{FilesystemStorage, MemoryStorage, Storage};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use signup_validation_core::PasswordRules;
use std::fs;
use std::path::{Path, PathBuf};

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub password: PasswordRules,

    #[serde(default)]
    pub success_banner: BannerConfig,
}

/// Where submissions are persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Name of the slot holding the record sequence
    #[serde(default = "default_storage_key")]
    pub key: String,

    #[serde(default)]
    pub backend: StorageBackend,
}

/// Storage backend configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-memory storage (non-persistent)
    #[default]
    Memory,

    /// One JSON file per slot under `path`
    Filesystem {
        #[serde(default = "default_storage_path")]
        path: PathBuf,
    },
}

/// Success message behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerConfig {
    /// Delay before the success message hides itself
    #[serde(default = "default_hide_after_ms")]
    pub hide_after_ms: u64,
}

// Default values
fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".signup/storage")
}

fn default_hide_after_ms() -> u64 {
    2500
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
            backend: StorageBackend::default(),
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            hide_after_ms: default_hide_after_ms(),
        }
    }
}

impl BannerConfig {
    pub fn hide_after(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(i64::try_from(self.hide_after_ms).unwrap_or(i64::MAX))
    }
}

impl StorageConfig {
    /// Build the configured backend
    pub fn open(&self) -> Result<Box<dyn Storage>> {
        match &self.backend {
            StorageBackend::Memory => Ok(Box::new(MemoryStorage::new())),
            StorageBackend::Filesystem { path } => {
                let storage = FilesystemStorage::new(path)
                    .context("Failed to open filesystem storage")?;
                Ok(Box::new(storage))
            }
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.storage.key, "ifv_users_v1");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.password.min_length, 8);
        assert_eq!(config.password.special_chars, "!@#$%^&*(),.?\":{}|<>");
        assert_eq!(config.success_banner.hide_after_ms, 2500);
        assert_eq!(
            config.success_banner.hide_after(),
            chrono::Duration::milliseconds(2500)
        );
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(FormConfig::from_toml_str("").unwrap(), FormConfig::default());
        assert_eq!(FormConfig::from_toml_str("  \n").unwrap(), FormConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [storage]
            key = "users"

            [storage.backend]
            type = "filesystem"
            path = "/tmp/signup"

            [password]
            min_length = 10
        "#;
        let config = FormConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.storage.key, "users");
        assert_eq!(
            config.storage.backend,
            StorageBackend::Filesystem {
                path: PathBuf::from("/tmp/signup")
            }
        );
        assert_eq!(config.password.min_length, 10);
        assert_eq!(config.password.special_chars, "!@#$%^&*(),.?\":{}|<>");
        assert_eq!(config.success_banner.hide_after_ms, 2500);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(FormConfig::from_toml_str("[password]\nmin_length = \"eight\"").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = FormConfig::load(temp_dir.path().join("signup.toml")).unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_load_file_and_open_backend() {
        let temp_dir = TempDir::new().unwrap();
        let storage_dir = temp_dir.path().join("store");
        let config_path = temp_dir.path().join("signup.toml");
        fs::write(
            &config_path,
            format!(
                "[storage.backend]\ntype = \"filesystem\"\npath = {:?}\n\n[success_banner]\nhide_after_ms = 100\n",
                storage_dir.to_string_lossy()
            ),
        )
        .unwrap();

        let config = FormConfig::load(&config_path).unwrap();
        assert_eq!(config.success_banner.hide_after_ms, 100);

        let storage = config.storage.open().unwrap();
        assert_eq!(storage.name(), "filesystem");
        assert!(storage_dir.is_dir());
    }
}
