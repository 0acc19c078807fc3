//! Shared world state for task list BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, TaskFileDir, date};
use chrono::NaiveDate;
use cras::tasklist::{
    adapters::FileTaskListRepository,
    services::{TaskListService, TaskListServiceError},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskListService = TaskListService<FileTaskListRepository, FixedClock>;

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    /// Directory holding the task file.
    pub dir: TaskFileDir,
    /// Calendar day the clock reports.
    pub today: NaiveDate,
    /// Error raised by the last operation, if any.
    pub last_error: Option<TaskListServiceError>,
}

impl TaskListWorld {
    /// Creates a world with an empty task directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TaskFileDir::new(),
            today: date("2024-05-01"),
            last_error: None,
        }
    }

    /// Builds a service reading the task file on the current day.
    #[must_use]
    pub fn service(&self) -> TestTaskListService {
        TaskListService::new(
            Arc::new(FileTaskListRepository::new(self.dir.path.clone())),
            Arc::new(FixedClock::on(self.today)),
        )
    }

    /// Records the error of a failed operation.
    pub fn record<T>(&mut self, result: Result<T, TaskListServiceError>) {
        self.last_error = result.err();
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}
