//! task-cli command implementations.
//!
//! Ids and status filters are validated here, before the store is touched.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::output::{emit_success, OutputOptions};
use crate::store::TaskStore;
use crate::task::{self as tasks, Clock, Status};

/// Everything a command needs: where tasks live, what time it is, how to print
pub struct Context<S, C> {
    pub store: S,
    pub clock: C,
    pub output: OutputOptions,
}

#[derive(Serialize)]
struct TaskIdOutput {
    id: u32,
}

pub fn run_add<S: TaskStore, C: Clock>(ctx: &Context<S, C>, description: &str) -> Result<()> {
    let task = tasks::add_task(&ctx.store, &ctx.clock, description)?;
    let human = format!("Task added successfully (ID: {})", task.id);
    emit_success(ctx.output, "add", &task, &human)
}

pub fn run_update<S: TaskStore, C: Clock>(
    ctx: &Context<S, C>,
    id: &str,
    description: &str,
) -> Result<()> {
    let id = parse_task_id(id)?;
    tasks::update_task(&ctx.store, &ctx.clock, id, description)?;
    emit_success(
        ctx.output,
        "update",
        &TaskIdOutput { id },
        "Task updated successfully.",
    )
}

pub fn run_delete<S: TaskStore, C: Clock>(ctx: &Context<S, C>, id: &str) -> Result<()> {
    let id = parse_task_id(id)?;
    tasks::delete_task(&ctx.store, id)?;
    emit_success(
        ctx.output,
        "delete",
        &TaskIdOutput { id },
        "Task deleted successfully.",
    )
}

pub fn run_mark_in_progress<S: TaskStore, C: Clock>(ctx: &Context<S, C>, id: &str) -> Result<()> {
    let id = parse_task_id(id)?;
    tasks::update_task_status(&ctx.store, &ctx.clock, id, Status::InProgress)?;
    emit_success(
        ctx.output,
        "mark-in-progress",
        &TaskIdOutput { id },
        "Task marked as in progress successfully.",
    )
}

pub fn run_mark_done<S: TaskStore, C: Clock>(ctx: &Context<S, C>, id: &str) -> Result<()> {
    let id = parse_task_id(id)?;
    tasks::update_task_status(&ctx.store, &ctx.clock, id, Status::Done)?;
    emit_success(
        ctx.output,
        "mark-done",
        &TaskIdOutput { id },
        "Task marked as done successfully.",
    )
}

pub fn run_list<S: TaskStore, C>(ctx: &Context<S, C>, status: Option<&str>) -> Result<()> {
    let status = status.map(tasks::parse_status).transpose()?;

    if ctx.output.json {
        let listed = tasks::list_tasks(&ctx.store, status)?;
        return emit_success(ctx.output, "list", &listed, "");
    }

    let table = match status {
        Some(status) => tasks::get_tasks(&ctx.store, status)?,
        None => tasks::get_all_tasks(&ctx.store)?,
    };
    emit_success(ctx.output, "list", &(), &table)
}

/// Parse a positive task id
pub fn parse_task_id(text: &str) -> Result<u32> {
    match text.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::InvalidTaskId(text.to_string())),
    }
}
