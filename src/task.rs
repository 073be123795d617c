//! Task management for task-cli.
//!
//! Every operation follows the same shape: load the whole collection from a
//! [`TaskStore`], locate or filter in memory, then save the whole collection
//! back (mutations) or render it (reads). Nothing is cached between calls.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render;
use crate::store::TaskStore;

const TODO_TOKEN: &str = "todo";
const IN_PROGRESS_TOKEN: &str = "in-progress";
const DONE_TOKEN: &str = "done";
const UNKNOWN_TOKEN: &str = "unknown";

/// Task status. Persisted as its integer code (0, 1, 2).
///
/// Any other code read from disk is kept as `Unknown` so it survives a
/// load/save cycle; it displays as `unknown` and cannot be parsed or set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
    Unknown(u8),
}

impl Status {
    /// Statuses a user can filter by or assign
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => TODO_TOKEN,
            Status::InProgress => IN_PROGRESS_TOKEN,
            Status::Done => DONE_TOKEN,
            Status::Unknown(_) => UNKNOWN_TOKEN,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Status::Todo => 0,
            Status::InProgress => 1,
            Status::Done => 2,
            Status::Unknown(code) => code,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| Error::InvalidStatus(s.to_string()))
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl From<u8> for Status {
    fn from(code: u8) -> Self {
        Status::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .unwrap_or(Status::Unknown(code))
    }
}

/// A single to-do item as stored in `tasks.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    pub id: u32,
    pub description: String,
    #[serde(rename = "CurrentStatus")]
    pub status: Status,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

impl Task {
    pub fn new(id: u32, description: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            id,
            description: description.into(),
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Source of "now" for timestamps
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Local>,
{
    fn now(&self) -> DateTime<Local> {
        self()
    }
}

/// Parse a status token (`todo`, `in-progress`, `done`), ignoring case
pub fn parse_status(text: &str) -> Result<Status> {
    text.parse()
}

/// Next free id: one past the highest id, or 1 for an empty collection.
///
/// The collection is not reordered. Fails once the highest id is `u32::MAX`.
pub fn next_id(tasks: &[Task]) -> Result<u32> {
    match tasks.iter().map(|task| task.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(Error::IdSpaceExhausted(max)),
    }
}

pub fn add_task(store: &impl TaskStore, clock: &impl Clock, description: &str) -> Result<Task> {
    let mut tasks = store.load()?;

    let task = Task::new(next_id(&tasks)?, description, clock.now());
    tasks.push(task.clone());
    store.save(&tasks)?;

    tracing::debug!(id = task.id, "task added");
    Ok(task)
}

pub fn update_task(
    store: &impl TaskStore,
    clock: &impl Clock,
    id: u32,
    description: &str,
) -> Result<()> {
    mutate_task(store, id, |task| {
        task.description = description.to_string();
        task.updated_at = clock.now();
    })?;

    tracing::debug!(id, "task description updated");
    Ok(())
}

pub fn update_task_status(
    store: &impl TaskStore,
    clock: &impl Clock,
    id: u32,
    status: Status,
) -> Result<()> {
    mutate_task(store, id, |task| {
        task.status = status;
        task.updated_at = clock.now();
    })?;

    tracing::debug!(id, %status, "task status updated");
    Ok(())
}

pub fn delete_task(store: &impl TaskStore, id: u32) -> Result<()> {
    let mut tasks = store.load()?;

    let index = tasks
        .iter()
        .position(|task| task.id == id)
        .ok_or(Error::TaskNotFound(id))?;
    tasks.remove(index);
    store.save(&tasks)?;

    tracing::debug!(id, "task deleted");
    Ok(())
}

/// Tasks in stored order, optionally restricted to one status
pub fn list_tasks(store: &impl TaskStore, status: Option<Status>) -> Result<Vec<Task>> {
    let mut tasks = store.load()?;
    if let Some(status) = status {
        tasks.retain(|task| task.status == status);
    }
    Ok(tasks)
}

/// Rendered table of every task
pub fn get_all_tasks(store: &impl TaskStore) -> Result<String> {
    let tasks = list_tasks(store, None)?;
    Ok(render::render_table(&tasks))
}

/// Rendered table of tasks with the given status; the header is always present
pub fn get_tasks(store: &impl TaskStore, status: Status) -> Result<String> {
    let tasks = list_tasks(store, Some(status))?;
    Ok(render::render_table(&tasks))
}

// Save is skipped when the id is missing.
fn mutate_task(store: &impl TaskStore, id: u32, apply: impl FnOnce(&mut Task)) -> Result<()> {
    let mut tasks = store.load()?;

    let task = tasks
        .iter_mut()
        .find(|task| task.id == id)
        .ok_or(Error::TaskNotFound(id))?;
    apply(task);

    store.save(&tasks)
}
