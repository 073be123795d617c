#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use task_tracker::task::Task;
use tempfile::TempDir;

/// Isolated task file and config directory for one test
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        fs::create_dir_all(dir.path().join("config"))?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn app_dir(&self) -> PathBuf {
        self.config_home().join("TaskTracker-CLI")
    }

    /// Command pointed at this env's task file via `--file`
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--file").arg(self.tasks_path());
        cmd
    }

    /// Command with no file override; only the config home is redirected
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("task-cli").expect("binary");
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env_remove("TASK_CLI_FILE")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        let dir = self.app_dir();
        fs::create_dir_all(&dir)?;
        let path = dir.join("config.toml");
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read_tasks(&self) -> Result<Vec<Task>, Box<dyn std::error::Error>> {
        read_tasks_at(&self.tasks_path())
    }
}

pub fn read_tasks_at(path: &Path) -> Result<Vec<Task>, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
