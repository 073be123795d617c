//! Error types for task-cli
//!
//! Errors fall into three kinds:
//! - Storage: the task file or config could not be read, written or decoded,
//!   or the stored ids leave no room for another task
//! - NotFound: no task carries the requested id
//! - InvalidInput: a bad id or status token on the command line
//!
//! Every kind is reported as `Error: <message>` on stdout. None of them
//! changes the process exit code.

use thiserror::Error;

/// Main error type for task-cli operations
#[derive(Error, Debug)]
pub enum Error {
    // Storage errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no task id left after [{0}]")]
    IdSpaceExhausted(u32),

    // Not found
    #[error("task with id [{0}] not found")]
    TaskNotFound(u32),

    // Invalid input
    #[error("Invalid task ID format: {0}")]
    InvalidTaskId(String),

    #[error("invalid status '{0}' (expected todo|in-progress|done)")]
    InvalidStatus(String),
}

/// Coarse classification used by output and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Storage,
    NotFound,
    InvalidInput,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Storage => "storage",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidInput => "invalid_input",
        }
    }
}

impl Error {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::InvalidConfig(_)
            | Error::IdSpaceExhausted(_) => ErrorKind::Storage,

            Error::TaskNotFound(_) => ErrorKind::NotFound,

            Error::InvalidTaskId(_) | Error::InvalidStatus(_) => ErrorKind::InvalidInput,
        }
    }
}

/// Result type alias for task-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub message: String,
    pub kind: &'static str,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            message: err.to_string(),
            kind: err.kind().as_str(),
        }
    }
}
