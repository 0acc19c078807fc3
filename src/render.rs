//! Terminal and JSON rendering of task lists.

use crate::tasklist::domain::{Task, TaskList, TaskNumber, TaskStatus, TaskSummary};
use colored::Colorize;
use serde::Serialize;

const TODO_LABEL: &str = "[TODO]";
const DONE_LABEL: &str = "[DONE]";

/// Formats tasks and lists for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Creates a renderer; `color` enables ANSI colours on status labels.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Returns the status label, coloured when enabled.
    #[must_use]
    pub fn status_label(&self, status: TaskStatus) -> String {
        match (status, self.color) {
            (TaskStatus::Todo, true) => TODO_LABEL.red().bold().to_string(),
            (TaskStatus::Done, true) => DONE_LABEL.green().bold().to_string(),
            (TaskStatus::Todo, false) => TODO_LABEL.to_owned(),
            (TaskStatus::Done, false) => DONE_LABEL.to_owned(),
        }
    }

    /// Formats one task as `#NN [LABEL] description`.
    #[must_use]
    pub fn task_line(&self, number: TaskNumber, task: &Task) -> String {
        format!(
            "#{:02} {} {}",
            number.value(),
            self.status_label(task.status()),
            task.description()
        )
    }

    /// Formats the full listing: due date, tasks and summary.
    #[must_use]
    pub fn listing(&self, list: &TaskList) -> String {
        let due = list
            .due_date()
            .map_or_else(|| "none".to_owned(), |due| due.to_string());
        let mut out = format!("Due date: {due}\n");
        for (index, task) in list.tasks().iter().enumerate() {
            out.push_str(&self.task_line(TaskNumber::from_index(index), task));
            out.push('\n');
        }
        if !list.is_empty() {
            out.push('\n');
        }
        out.push_str(&short_summary(list.summary()));
        out.push_str(" to do/done/total");
        out
    }
}

/// Formats counts as `todo/done/total`.
#[must_use]
pub fn short_summary(summary: TaskSummary) -> String {
    format!("{}/{}/{}", summary.todo, summary.done, summary.total)
}

#[derive(Serialize)]
struct JsonTask<'a> {
    number: usize,
    status: TaskStatus,
    description: &'a str,
}

#[derive(Serialize)]
struct JsonListing<'a> {
    due_date: Option<String>,
    tasks: Vec<JsonTask<'a>>,
    summary: TaskSummary,
}

/// Formats the listing as pretty-printed JSON.
///
/// # Errors
///
/// Returns the serializer error, which only occurs for non-string map keys
/// and so cannot happen for this structure.
pub fn json_listing(list: &TaskList) -> Result<String, serde_json::Error> {
    let listing = JsonListing {
        due_date: list.due_date().map(|due| due.to_string()),
        tasks: list
            .tasks()
            .iter()
            .enumerate()
            .map(|(index, task)| JsonTask {
                number: TaskNumber::from_index(index).value(),
                status: task.status(),
                description: task.description().as_str(),
            })
            .collect(),
        summary: list.summary(),
    };
    serde_json::to_string_pretty(&listing)
}
