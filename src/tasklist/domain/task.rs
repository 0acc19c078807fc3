//! Task entity and its validated scalar fields.

use super::{ParseTaskStatusError, TaskListError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work on the task is outstanding.
    #[default]
    Todo,
    /// The task has been completed.
    Done,
}

impl TaskStatus {
    /// Returns the numeric code used by the task file format.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Todo => 0,
            Self::Done => 1,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Done => "done",
        }
    }
}

impl TryFrom<u8> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Todo),
            1 => Ok(Self::Done),
            other => Err(ParseTaskStatusError(other.to_string())),
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    /// Parses the numeric file code (`0`/`1`).
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let code = value
            .parse::<u8>()
            .map_err(|_| ParseTaskStatusError(value.to_owned()))?;
        Self::try_from(code)
    }
}

/// Sanitized task description.
///
/// Holds at most [`TaskDescription::MAX_LEN`] bytes of a single line. It never
/// ends in a carriage return and is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Maximum description length in bytes.
    pub const MAX_LEN: usize = 63;

    /// Creates a description from the first line of `value`, dropping every
    /// trailing carriage return and truncating to [`Self::MAX_LEN`] bytes on
    /// a character boundary.
    ///
    /// A stored description never ends in `\r`, so it reads back unchanged
    /// from a task file.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::EmptyDescription`] when the first line is
    /// empty or holds only whitespace.
    pub fn new(value: &str) -> Result<Self, TaskListError> {
        let first_line = value.split('\n').next().unwrap_or_default();
        let end = first_line
            .char_indices()
            .map(|(offset, ch)| offset + ch.len_utf8())
            .take_while(|end| *end <= Self::MAX_LEN)
            .last()
            .unwrap_or(0);
        let truncated = first_line
            .get(..end)
            .unwrap_or_default()
            .trim_end_matches('\r');
        if truncated.trim().is_empty() {
            return Err(TaskListError::EmptyDescription);
        }

        Ok(Self(truncated.to_owned()))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskDescription {
    type Error = TaskListError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TaskDescription> for String {
    fn from(value: TaskDescription) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One unit of work in a task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    status: TaskStatus,
    description: TaskDescription,
}

impl Task {
    /// Creates a task with the given status and description.
    #[must_use]
    pub const fn new(status: TaskStatus, description: TaskDescription) -> Self {
        Self {
            status,
            description,
        }
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Replaces the completion status.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: TaskDescription) {
        self.description = description;
    }
}
