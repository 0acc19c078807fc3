//! In-memory repository for task list tests.

use std::sync::{Arc, RwLock};

use crate::tasklist::{
    domain::TaskList,
    ports::{TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult},
};

const LOCATION: &str = "<memory>";

/// Thread-safe in-memory task list repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskListRepository {
    state: Arc<RwLock<Option<TaskList>>>,
}

impl InMemoryTaskListRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository already holding `list`.
    #[must_use]
    pub fn with_list(list: TaskList) -> Self {
        Self {
            state: Arc::new(RwLock::new(Some(list))),
        }
    }

    /// Returns a copy of the stored list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::Io`] when the lock is poisoned.
    pub fn snapshot(&self) -> TaskListRepositoryResult<Option<TaskList>> {
        self.load()
    }
}

fn poisoned(message: String) -> TaskListRepositoryError {
    TaskListRepositoryError::io(LOCATION, std::io::Error::other(message))
}

impl TaskListRepository for InMemoryTaskListRepository {
    fn load(&self) -> TaskListRepositoryResult<Option<TaskList>> {
        let state = self
            .state
            .read()
            .map_err(|e| poisoned(format!("lock poisoned: {e}")))?;
        Ok(state.clone())
    }

    fn save(&self, list: &TaskList) -> TaskListRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| poisoned(format!("lock poisoned: {e}")))?;
        *state = Some(list.clone());
        Ok(())
    }

    fn location(&self) -> String {
        LOCATION.to_owned()
    }
}
