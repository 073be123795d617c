//! Storage layer for task-cli
//!
//! Tasks live in a single JSON file under the per-user config directory:
//!
//! ```text
//! <config dir>/TaskTracker-CLI/   # created on first use
//!   tasks.json                    # JSON array of tasks, 2-space indent
//!   config.toml                   # optional settings
//! ```
//!
//! If the platform config directory cannot be determined the current
//! directory is used as the base instead.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

/// Name of the application folder inside the config directory
pub const APP_DIR: &str = "TaskTracker-CLI";

/// Name of the task data file
pub const TASKS_FILE: &str = "tasks.json";

/// Name of the optional settings file
pub const CONFIG_FILE: &str = "config.toml";

/// Base used when the platform config directory is unknown
const FALLBACK_BASE_DIR: &str = ".";

/// The `TaskTracker-CLI` folder under the user config directory
pub fn app_dir() -> PathBuf {
    let base = BaseDirs::new()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_BASE_DIR));
    base.join(APP_DIR)
}

/// Default location of `tasks.json`
pub fn default_tasks_path() -> PathBuf {
    app_dir().join(TASKS_FILE)
}

/// Default location of `config.toml`
pub fn default_config_path() -> PathBuf {
    app_dir().join(CONFIG_FILE)
}

/// A JSON document on disk
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the default `tasks.json` location
    pub fn at_default_path() -> Self {
        Self::new(default_tasks_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Ok(fs::create_dir_all(parent)?),
            _ => Ok(()),
        }
    }

    /// Open the file, creating it and its parent directories if missing.
    pub fn open_or_create(&self) -> Result<File> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        Ok(file)
    }

    /// Decode the file contents.
    ///
    /// An empty file (or one holding `null`) decodes to `T::default()`.
    pub fn read_json<T: DeserializeOwned + Default>(&self) -> Result<T> {
        let mut content = String::new();
        self.open_or_create()?.read_to_string(&mut content)?;

        if content.trim().is_empty() {
            return Ok(T::default());
        }

        let data: Option<T> = serde_json::from_str(&content)?;
        Ok(data.unwrap_or_default())
    }

    /// Encode `data` as indented JSON with a trailing newline, replacing the
    /// previous contents.
    pub fn write_json<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, data)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Serialize, serde::Deserialize, PartialEq, Debug, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_default_paths_share_app_dir() {
        assert!(default_tasks_path().ends_with("TaskTracker-CLI/tasks.json"));
        assert!(default_config_path().ends_with("TaskTracker-CLI/config.toml"));
    }

    #[test]
    fn test_read_creates_missing_file_and_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("tasks.json");
        let storage = Storage::new(&path);

        let data: Vec<TestData> = storage.read_json().unwrap();

        assert!(data.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn test_null_document_reads_as_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, "null\n").unwrap();

        let data: Vec<TestData> = Storage::new(&path).read_json().unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_write_is_indented_with_trailing_newline() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("data.json"));

        let data = vec![TestData {
            name: "test".to_string(),
            value: 42,
        }];
        storage.write_json(&data).unwrap();

        let raw = fs::read_to_string(storage.path()).unwrap();
        assert_eq!(
            raw,
            "[\n  {\n    \"name\": \"test\",\n    \"value\": 42\n  }\n]\n"
        );

        let read_back: Vec<TestData> = storage.read_json().unwrap();
        assert_eq!(data, read_back);
    }

    #[test]
    fn test_write_replaces_longer_contents() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("data.json"));
        fs::write(storage.path(), "x".repeat(4096)).unwrap();

        storage.write_json(&Vec::<TestData>::new()).unwrap();

        assert_eq!(fs::read_to_string(storage.path()).unwrap(), "[]\n");
    }

    #[test]
    fn test_corrupt_json_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, "{ not json").unwrap();

        let result: Result<Vec<TestData>> = Storage::new(&path).read_json();
        assert!(matches!(result, Err(crate::error::Error::Json(_))));
    }
}
