//! Domain model for the task list.
//!
//! A [`TaskList`] owns an ordered sequence of [`Task`] values and a single
//! [`DueDate`]. Everything here is pure: the current day is always passed in,
//! and nothing touches the filesystem.

mod due_date;
mod error;
mod list;
mod number;
mod task;

pub use due_date::{DueDate, Timeliness, is_valid_date};
pub use error::{ParseTaskStatusError, TaskListError};
pub use list::{TaskList, TaskSummary};
pub use number::TaskNumber;
pub use task::{Task, TaskDescription, TaskStatus};
