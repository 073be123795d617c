//! Configuration loading and management
//!
//! Handles parsing of the optional `config.toml` next to the task file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::storage;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Override for the task file location
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl StorageConfig {
    fn validate(&self) -> crate::error::Result<()> {
        if let Some(file) = &self.file {
            if file.as_os_str().is_empty() {
                return Err(crate::error::Error::InvalidConfig(
                    "storage.file cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a `config.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config");
                Self::default()
            }
        }
    }

    /// Load configuration from the default location
    pub fn load_default() -> Self {
        Self::load_or_default(&storage::default_config_path())
    }

    /// Resolve the task file: explicit override, then config, then default
    pub fn tasks_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.storage.file.clone())
            .unwrap_or_else(storage::default_tasks_path)
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.storage.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.storage.file.is_none());
        assert_eq!(config.tasks_path(None), storage::default_tasks_path());
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
[storage]
file = "/tmp/my-tasks.json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.storage.file.as_deref(),
            Some(Path::new("/tmp/my-tasks.json"))
        );
    }

    #[test]
    fn test_override_beats_config() {
        let config = Config {
            storage: StorageConfig {
                file: Some(PathBuf::from("from-config.json")),
            },
        };
        assert_eq!(
            config.tasks_path(Some(Path::new("from-flag.json"))),
            PathBuf::from("from-flag.json")
        );
        assert_eq!(config.tasks_path(None), PathBuf::from("from-config.json"));
    }

    #[test]
    fn test_empty_file_is_invalid() {
        let config: Config = toml::from_str("[storage]\nfile = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }
}
