//! Shared output formatting for task-cli commands.
//!
//! Human output goes to stdout as plain text. With `--json` every command
//! prints a single envelope instead.

use serde::Serialize;

use crate::error::{Error, JsonError, Result};

pub const SCHEMA_VERSION: &str = "task-cli.v1";

#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: &str,
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print!("{}", format_human(human));
    Ok(())
}

pub fn emit_error(command: &str, err: &Error, json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: JsonError,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: JsonError::from(err),
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print!("{}", format_error(err));
    Ok(())
}

/// Text exactly as printed, newline-terminated
pub fn format_human(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

pub fn format_error(err: &Error) -> String {
    format!("Error: {err}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_text_gets_one_trailing_newline() {
        assert_eq!(format_human("Task deleted successfully."), "Task deleted successfully.\n");
        assert_eq!(format_human("table\n"), "table\n");
    }

    #[test]
    fn errors_are_prefixed() {
        let err = Error::TaskNotFound(7);
        assert_eq!(format_error(&err), "Error: task with id [7] not found\n");
    }
}
