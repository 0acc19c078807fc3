//! Task list aggregate root.

use super::{DueDate, Task, TaskDescription, TaskListError, TaskStatus, Timeliness};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Counts of tasks by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Tasks still to do.
    pub todo: usize,
    /// Completed tasks.
    pub done: usize,
    /// All tasks.
    pub total: usize,
}

/// Ordered task sequence sharing one due date.
///
/// Tasks are addressed by their current position. Deleting a task shifts every
/// later task down by one, so positions are not stable identities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskList {
    due_date: Option<DueDate>,
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list without a due date.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            due_date: None,
            tasks: Vec::new(),
        }
    }

    /// Creates an empty list due on `due_date`, ready to be filled with
    /// persisted tasks through [`Self::push`].
    #[must_use]
    pub const fn with_due_date(due_date: DueDate) -> Self {
        Self {
            due_date: Some(due_date),
            tasks: Vec::new(),
        }
    }

    /// Returns the due date, if one has been set.
    #[must_use]
    pub const fn due_date(&self) -> Option<DueDate> {
        self.due_date
    }

    /// Sets the due date to `due_date`, or to `today` when `None`.
    ///
    /// Callers set the due date once, when a new list file is created.
    pub fn set_due_date(&mut self, due_date: Option<DueDate>, today: NaiveDate) {
        self.due_date = Some(due_date.unwrap_or_else(|| DueDate::from_date(today)));
    }

    /// Forces the list into the overdue state.
    pub fn invalidate(&mut self) {
        self.due_date = Some(DueDate::invalidated());
    }

    /// Classifies the due date against `today`. A list without a due date is
    /// overdue.
    #[must_use]
    pub fn timeliness(&self, today: NaiveDate) -> Timeliness {
        self.due_date
            .map_or(Timeliness::Overdue, |due| due.timeliness(today))
    }

    /// Returns `true` only when the list is due exactly on `today`.
    #[must_use]
    pub fn is_due_on(&self, today: NaiveDate) -> bool {
        self.timeliness(today) == Timeliness::DueToday
    }

    /// Appends a task at the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::EmptyDescription`] when the description is
    /// empty after sanitization, or [`TaskListError::MemoryExhausted`] when
    /// the sequence cannot grow.
    pub fn add_task(
        &mut self,
        status: TaskStatus,
        description: &str,
    ) -> Result<(), TaskListError> {
        let sanitized = TaskDescription::new(description)?;
        self.push(Task::new(status, sanitized))
    }

    /// Appends an already constructed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::MemoryExhausted`] when the sequence cannot
    /// grow.
    pub fn push(&mut self, task: Task) -> Result<(), TaskListError> {
        self.tasks
            .try_reserve(1)
            .map_err(|_| TaskListError::MemoryExhausted)?;
        self.tasks.push(task);
        Ok(())
    }

    /// Returns the task at the 0-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::TaskNotFound`] when `index` is out of bounds.
    pub fn get_task(&self, index: usize) -> Result<&Task, TaskListError> {
        self.tasks.get(index).ok_or_else(|| not_found(index))
    }

    /// Returns a mutable reference to the task at the 0-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::TaskNotFound`] when `index` is out of bounds.
    pub fn get_task_mut(&mut self, index: usize) -> Result<&mut Task, TaskListError> {
        self.tasks.get_mut(index).ok_or_else(|| not_found(index))
    }

    /// Sets the status of the task at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::TaskNotFound`] when `index` is out of bounds.
    pub fn set_status(
        &mut self,
        index: usize,
        status: TaskStatus,
    ) -> Result<&Task, TaskListError> {
        let task = self.get_task_mut(index)?;
        task.set_status(status);
        Ok(task)
    }

    /// Replaces the description of the task at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::TaskNotFound`] when `index` is out of bounds
    /// and [`TaskListError::EmptyDescription`] when the replacement is empty.
    /// The task is left untouched on error.
    pub fn edit_task(
        &mut self,
        index: usize,
        description: &str,
    ) -> Result<&Task, TaskListError> {
        let task = self.get_task_mut(index)?;
        task.set_description(TaskDescription::new(description)?);
        Ok(task)
    }

    /// Removes and returns the task at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::TaskNotFound`] when `index` is out of bounds.
    pub fn delete_task(&mut self, index: usize) -> Result<Task, TaskListError> {
        if index >= self.tasks.len() {
            return Err(not_found(index));
        }
        Ok(self.tasks.remove(index))
    }

    /// Returns the tasks in order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Counts tasks with the given status.
    #[must_use]
    pub fn count_by_status(&self, status: TaskStatus) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status() == status)
            .count()
    }

    /// Counts tasks still to do.
    #[must_use]
    pub fn count_todo(&self) -> usize {
        self.count_by_status(TaskStatus::Todo)
    }

    /// Counts completed tasks.
    #[must_use]
    pub fn count_done(&self) -> usize {
        self.count_by_status(TaskStatus::Done)
    }

    /// Returns the todo/done/total counts.
    #[must_use]
    pub fn summary(&self) -> TaskSummary {
        TaskSummary {
            todo: self.count_todo(),
            done: self.count_done(),
            total: self.len(),
        }
    }
}

const fn not_found(index: usize) -> TaskListError {
    TaskListError::TaskNotFound(index.saturating_add(1))
}
