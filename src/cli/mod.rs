//! Command-line interface for task-cli
//!
//! This module defines the CLI structure using clap derive macros.
//! Command bodies live in [`task`].

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::output::OutputOptions;
use crate::store::FileTaskStore;
use crate::task::SystemClock;

pub mod task;

/// A simple command-line task manager that stores tasks in a JSON file.
///
/// Add, update, delete and list tasks, and move them between
/// todo, in-progress and done.
#[derive(Parser, Debug)]
#[command(name = "task-cli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the task file (defaults to <config dir>/TaskTracker-CLI/tasks.json)
    #[arg(long, global = true, env = "TASK_CLI_FILE")]
    pub file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task description
        description: String,
    },

    /// Update the description of an existing task
    Update {
        /// Task ID
        id: String,

        /// New description
        description: String,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },

    /// Mark a task as in progress
    MarkInProgress {
        /// Task ID
        id: String,
    },

    /// Mark a task as done
    MarkDone {
        /// Task ID
        id: String,
    },

    /// List tasks, optionally filtered by status
    List {
        /// Status filter: todo, in-progress, done
        status: Option<String>,
    },
}

impl Commands {
    /// Name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Add { .. } => "add",
            Commands::Update { .. } => "update",
            Commands::Delete { .. } => "delete",
            Commands::MarkInProgress { .. } => "mark-in-progress",
            Commands::MarkDone { .. } => "mark-done",
            Commands::List { .. } => "list",
        }
    }
}

impl Cli {
    /// Run the CLI command
    pub fn run(self) -> Result<()> {
        let config = Config::load_default();
        let store = FileTaskStore::new(config.tasks_path(self.file.as_deref()));
        let ctx = task::Context {
            store,
            clock: SystemClock,
            output: OutputOptions { json: self.json },
        };

        match self.command {
            Commands::Add { description } => task::run_add(&ctx, &description),
            Commands::Update { id, description } => task::run_update(&ctx, &id, &description),
            Commands::Delete { id } => task::run_delete(&ctx, &id),
            Commands::MarkInProgress { id } => task::run_mark_in_progress(&ctx, &id),
            Commands::MarkDone { id } => task::run_mark_done(&ctx, &id),
            Commands::List { status } => task::run_list(&ctx, status.as_deref()),
        }
    }
}
