//! Error types for task list domain validation and mutation.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task list values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskListError {
    /// No task exists at the requested 1-based position.
    #[error("task #{0} does not exist")]
    TaskNotFound(usize),

    /// The task sequence could not grow to hold another task.
    #[error("internal memory error: could not allocate a new task")]
    MemoryExhausted,

    /// The date string is not a valid `YYYY-MM-DD` calendar day.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The task description is empty after sanitization.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The task number is not a positive integer.
    #[error("invalid task number '{0}', expected a positive integer")]
    InvalidTaskNumber(String),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
