//! Service layer running one task list operation per invocation.

use crate::tasklist::{
    domain::{DueDate, Task, TaskList, TaskListError, TaskNumber, TaskStatus, Timeliness},
    ports::{TaskListRepository, TaskListRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Which due dates accept newly appended tasks.
///
/// Overdue lists never accept appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppendPolicy {
    /// Lists due today or on a later day accept appends.
    #[default]
    AllowUpcoming,
    /// Only lists due today accept appends.
    TodayOnly,
}

impl AppendPolicy {
    /// Returns the canonical configuration value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllowUpcoming => "upcoming",
            Self::TodayOnly => "today",
        }
    }

    const fn accepts(self, timeliness: Timeliness) -> bool {
        match (self, timeliness) {
            (_, Timeliness::DueToday) | (Self::AllowUpcoming, Timeliness::Upcoming) => true,
            (Self::TodayOnly, Timeliness::Upcoming) | (_, Timeliness::Overdue) => false,
        }
    }
}

impl fmt::Display for AppendPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing an append policy name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown append policy '{0}', expected 'upcoming' or 'today'")]
pub struct ParseAppendPolicyError(pub String);

impl FromStr for AppendPolicy {
    type Err = ParseAppendPolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Self::AllowUpcoming),
            "today" => Ok(Self::TodayOnly),
            _ => Err(ParseAppendPolicyError(value.to_owned())),
        }
    }
}

/// Service-level errors for task list operations.
#[derive(Debug, Error)]
pub enum TaskListServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskListError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskListRepositoryError),

    /// No list has been stored at the repository location.
    #[error("no task list at {0}")]
    MissingList(String),

    /// The list's due date has passed.
    #[error("due date passed ({todo} tasks overdue)")]
    Overdue {
        /// Due date of the list.
        due: Option<DueDate>,
        /// Tasks left to do.
        todo: usize,
    },

    /// The list is not due until a later day.
    #[error("task list is not due until {due}")]
    NotYetDue {
        /// Due date of the list.
        due: DueDate,
    },
}

/// Result type for task list service operations.
pub type TaskListServiceResult<T> = Result<T, TaskListServiceError>;

/// A task together with its current 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedTask {
    /// Position of the task at the time of the operation.
    pub number: TaskNumber,
    /// The task itself.
    pub task: Task,
}

/// Task list orchestration service.
///
/// Each operation loads the list, checks its due date, applies one mutation
/// and saves the result.
#[derive(Clone)]
pub struct TaskListService<R, C>
where
    R: TaskListRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    append_policy: AppendPolicy,
}

impl<R, C> TaskListService<R, C>
where
    R: TaskListRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task list service with the default append policy.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            append_policy: AppendPolicy::default(),
        }
    }

    /// Sets the append policy.
    #[must_use]
    pub const fn with_append_policy(mut self, append_policy: AppendPolicy) -> Self {
        self.append_policy = append_policy;
        self
    }

    /// Returns the current local calendar day.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Creates a new list from input lines, replacing any stored list.
    ///
    /// Blank lines are skipped. The due date is `due_date` when given, or
    /// today otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Domain`] when a task cannot be added
    /// and [`TaskListServiceError::Repository`] when saving fails.
    pub fn create<I, S>(
        &self,
        lines: I,
        due_date: Option<DueDate>,
    ) -> TaskListServiceResult<TaskList>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = TaskList::new();
        add_lines(&mut list, lines)?;
        list.set_due_date(due_date, self.today());
        self.repository.save(&list)?;
        info!(
            location = %self.repository.location(),
            tasks = list.len(),
            "created task list"
        );
        Ok(list)
    }

    /// Appends input lines to the stored list.
    ///
    /// When no list is stored yet, one is created with today's due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Overdue`] or
    /// [`TaskListServiceError::NotYetDue`] when the append policy rejects the
    /// list's due date, plus the errors of [`Self::create`].
    pub fn append<I, S>(&self, lines: I) -> TaskListServiceResult<TaskList>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(mut list) = self.repository.load()? else {
            debug!("no stored list, creating one for append");
            return self.create(lines, None);
        };

        let today = self.today();
        let timeliness = list.timeliness(today);
        if !self.append_policy.accepts(timeliness) {
            return Err(timeliness_error(&list, timeliness));
        }

        let before = list.len();
        add_lines(&mut list, lines)?;
        self.repository.save(&list)?;
        info!(
            location = %self.repository.location(),
            added = list.len().saturating_sub(before),
            "appended tasks"
        );
        Ok(list)
    }

    /// Loads the list for display. The list must be due today.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::MissingList`] when nothing is stored,
    /// and [`TaskListServiceError::Overdue`] or
    /// [`TaskListServiceError::NotYetDue`] when the list is not due today.
    pub fn view(&self) -> TaskListServiceResult<TaskList> {
        self.load_due_today()
    }

    /// Sets the status of task `number`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Domain`] with
    /// [`TaskListError::TaskNotFound`] when the task does not exist, plus the
    /// errors of [`Self::view`].
    pub fn mark(
        &self,
        number: TaskNumber,
        status: TaskStatus,
    ) -> TaskListServiceResult<NumberedTask> {
        self.mutate_task(number, |list| list.set_status(number.index(), status).cloned())
            .inspect(|_| info!(%number, status = status.as_str(), "marked task"))
    }

    /// Replaces the description of task `number`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Domain`] when the task does not exist
    /// or the description is empty, plus the errors of [`Self::view`].
    pub fn edit(
        &self,
        number: TaskNumber,
        description: &str,
    ) -> TaskListServiceResult<NumberedTask> {
        self.mutate_task(number, |list| list.edit_task(number.index(), description).cloned())
            .inspect(|_| info!(%number, "edited task"))
    }

    /// Deletes task `number`, returning the removed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Domain`] with
    /// [`TaskListError::TaskNotFound`] when the task does not exist, plus the
    /// errors of [`Self::view`].
    pub fn delete(&self, number: TaskNumber) -> TaskListServiceResult<NumberedTask> {
        self.mutate_task(number, |list| list.delete_task(number.index()))
            .inspect(|_| info!(%number, "deleted task"))
    }

    /// Forces the stored list into the overdue state.
    ///
    /// Works whatever the current due date is.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::MissingList`] when nothing is stored
    /// and [`TaskListServiceError::Repository`] when loading or saving fails.
    pub fn invalidate(&self) -> TaskListServiceResult<TaskList> {
        let mut list = self.load_existing()?;
        list.invalidate();
        self.repository.save(&list)?;
        info!(location = %self.repository.location(), "invalidated task list");
        Ok(list)
    }

    fn mutate_task<F>(&self, number: TaskNumber, apply: F) -> TaskListServiceResult<NumberedTask>
    where
        F: FnOnce(&mut TaskList) -> Result<Task, TaskListError>,
    {
        let mut list = self.load_due_today()?;
        let task = apply(&mut list)?;
        self.repository.save(&list)?;
        Ok(NumberedTask { number, task })
    }

    fn load_existing(&self) -> TaskListServiceResult<TaskList> {
        self.repository
            .load()?
            .ok_or_else(|| TaskListServiceError::MissingList(self.repository.location()))
    }

    fn load_due_today(&self) -> TaskListServiceResult<TaskList> {
        let list = self.load_existing()?;
        match list.timeliness(self.today()) {
            Timeliness::DueToday => Ok(list),
            other => Err(timeliness_error(&list, other)),
        }
    }
}

fn add_lines<I, S>(list: &mut TaskList, lines: I) -> Result<(), TaskListError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        let text = line.as_ref();
        if text.trim().is_empty() {
            continue;
        }
        list.add_task(TaskStatus::Todo, text)?;
    }
    Ok(())
}

fn timeliness_error(list: &TaskList, timeliness: Timeliness) -> TaskListServiceError {
    match (timeliness, list.due_date()) {
        (Timeliness::Upcoming, Some(due)) => TaskListServiceError::NotYetDue { due },
        _ => TaskListServiceError::Overdue {
            due: list.due_date(),
            todo: list.count_todo(),
        },
    }
}
