//! Load/save seam between task operations and the filesystem.
//!
//! [`FileTaskStore`] is the production implementation. [`MemoryTaskStore`]
//! keeps the collection in memory and counts calls, so operation tests can
//! check what was persisted without touching disk.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::storage::Storage;
use crate::task::Task;

/// Whole-collection access to persisted tasks
pub trait TaskStore {
    fn load(&self) -> Result<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// Tasks in a JSON file
#[derive(Debug, Clone)]
pub struct FileTaskStore {
    storage: Storage,
}

impl FileTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            storage: Storage::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }
}

impl TaskStore for FileTaskStore {
    fn load(&self) -> Result<Vec<Task>> {
        let tasks: Vec<Task> = self.storage.read_json()?;
        tracing::debug!(path = %self.path().display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        self.storage.write_json(tasks)?;
        tracing::debug!(path = %self.path().display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    tasks: RefCell<Vec<Task>>,
    loads: Cell<usize>,
    saves: Cell<usize>,
    fail_load: Cell<bool>,
    fail_save: Cell<bool>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RefCell::new(tasks),
            ..Self::default()
        }
    }

    /// Current persisted collection
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    pub fn load_count(&self) -> usize {
        self.loads.get()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn fail_loads(&self, fail: bool) {
        self.fail_load.set(fail);
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_save.set(fail);
    }
}

impl TaskStore for MemoryTaskStore {
    fn load(&self) -> Result<Vec<Task>> {
        self.loads.set(self.loads.get() + 1);
        if self.fail_load.get() {
            return Err(Error::Io(std::io::Error::other("load failed")));
        }
        Ok(self.tasks())
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        self.saves.set(self.saves.get() + 1);
        if self.fail_save.get() {
            return Err(Error::Io(std::io::Error::other("save failed")));
        }
        *self.tasks.borrow_mut() = tasks.to_vec();
        Ok(())
    }
}
