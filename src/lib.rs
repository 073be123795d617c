//! task-tracker - personal task tracking library
//!
//! This library provides the core functionality for the `task-cli` tool:
//! short text tasks with a status, kept in one JSON file per user.
//!
//! # Core Concepts
//!
//! - **Task**: id, description, status and two timestamps
//! - **Status**: todo, in-progress or done, freely interchangeable
//! - **Task Store**: whole-collection load/save seam over the JSON file
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `config.toml`
//! - `error`: Error types and result aliases
//! - `output`: Human and JSON output for commands
//! - `render`: Fixed-width task tables
//! - `storage`: JSON file access and default paths
//! - `store`: The `TaskStore` trait with file and in-memory implementations
//! - `task`: Task model and operations

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod storage;
pub mod store;
pub mod task;

pub use error::{Error, Result};
