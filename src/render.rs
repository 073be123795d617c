//! Fixed-width table rendering for `task-cli list`.

use chrono::{DateTime, Local};

use crate::task::Task;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn header_row() -> String {
    format!(
        "{:<3} {:<20} {:<12} {:<16} {:<16}\n",
        "ID", "Description", "Status", "Created At", "Updated At"
    )
}

pub fn task_row(task: &Task) -> String {
    format!(
        "{:<3} {:<20} {:<12} {:<16} {:<16}\n",
        task.id,
        task.description,
        task.status.as_str(),
        format_timestamp(&task.created_at),
        format_timestamp(&task.updated_at),
    )
}

pub fn render_table<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let mut out = header_row();
    for task in tasks {
        out.push_str(&task_row(task));
    }
    out
}

fn format_timestamp(value: &DateTime<Local>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}
