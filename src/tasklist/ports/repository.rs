//! Repository port for loading and storing a single task list.

use crate::tasklist::{
    adapters::codec::CorruptFileError,
    domain::{TaskList, TaskListError},
};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task list repository operations.
pub type TaskListRepositoryResult<T> = Result<T, TaskListRepositoryError>;

/// Task list persistence contract.
///
/// A repository is bound to exactly one list; there is no addressing beyond
/// the repository instance itself.
pub trait TaskListRepository: Send + Sync {
    /// Loads the stored list.
    ///
    /// Returns `None` when no list has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::Corrupt`] when the stored data does
    /// not parse, [`TaskListRepositoryError::Store`] when it cannot be held in
    /// memory, or [`TaskListRepositoryError::Io`] when it cannot be read.
    fn load(&self) -> TaskListRepositoryResult<Option<TaskList>>;

    /// Replaces the stored list with `list`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::Io`] when the list cannot be
    /// written. A failed save leaves the previously stored list intact.
    fn save(&self, list: &TaskList) -> TaskListRepositoryResult<()>;

    /// Human-readable location of the stored list, used in diagnostics.
    fn location(&self) -> String;
}

/// Errors returned by task list repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskListRepositoryError {
    /// The stored list does not follow the task file format.
    #[error("parsing error: task file corrupted ({0})")]
    Corrupt(#[from] CorruptFileError),

    /// The stored list could not be held in memory.
    #[error(transparent)]
    Store(#[from] TaskListError),

    /// Reading or writing the underlying storage failed.
    #[error("could not access {location}: {source}")]
    Io {
        /// Location being accessed.
        location: String,
        /// Underlying I/O failure.
        source: Arc<std::io::Error>,
    },
}

impl TaskListRepositoryError {
    /// Wraps an I/O failure for `location`.
    pub fn io(location: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            location: location.into(),
            source: Arc::new(err),
        }
    }
}
