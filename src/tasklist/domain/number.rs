//! External 1-based task numbering.

use super::TaskListError;
use std::fmt;

/// Position of a task as shown to the user, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskNumber(usize);

impl TaskNumber {
    /// Creates a task number from a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::InvalidTaskNumber`] when `value` is zero.
    pub fn new(value: usize) -> Result<Self, TaskListError> {
        if value == 0 {
            return Err(TaskListError::InvalidTaskNumber(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parses a task number typed by the user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::InvalidTaskNumber`] when the text is not a
    /// decimal integer greater than zero.
    pub fn parse(value: &str) -> Result<Self, TaskListError> {
        let number = value
            .trim()
            .parse::<usize>()
            .map_err(|_| TaskListError::InvalidTaskNumber(value.to_owned()))?;
        Self::new(number).map_err(|_| TaskListError::InvalidTaskNumber(value.to_owned()))
    }

    /// Creates the task number for a 0-based sequence index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index.saturating_add(1))
    }

    /// Returns the 1-based value.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Returns the 0-based sequence index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.saturating_sub(1)
    }
}

impl fmt::Display for TaskNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
