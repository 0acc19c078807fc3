//! Command-line surface: flag parsing and dispatch to the task list service.

use crate::config::{ConfigError, SettingsOverrides};
use crate::render::{self, Renderer};
use crate::tasklist::{
    domain::{DueDate, TaskListError, TaskNumber, TaskStatus},
    ports::TaskListRepository,
    services::{TaskListService, TaskListServiceError},
};
use clap::{ArgGroup, Parser};
use mockable::Clock;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "cras", version, about = "The daily task list manager")]
#[command(group(
    ArgGroup::new("mode")
        .args(["new", "append", "short", "done", "todo", "edit", "delete", "invalidate"])
))]
pub struct Cli {
    /// Create a new list from standard input, one task per line
    #[arg(short = 'n', long)]
    pub new: bool,

    /// Append standard input lines to the list
    #[arg(short = 'a', long)]
    pub append: bool,

    /// Print the todo/done/total summary only
    #[arg(short = 'o', long)]
    pub short: bool,

    /// Mark task NUM as done
    #[arg(short = 't', long, value_name = "NUM")]
    pub done: Option<String>,

    /// Mark task NUM as still to do
    #[arg(short = 'T', long, value_name = "NUM")]
    pub todo: Option<String>,

    /// Replace the description of task NUM with TEXT
    #[arg(short = 'e', long, num_args = 2, value_names = ["NUM", "TEXT"])]
    pub edit: Option<Vec<String>>,

    /// Delete task NUM
    #[arg(short = 'd', long, value_name = "NUM")]
    pub delete: Option<String>,

    /// Mark the whole list as expired
    #[arg(short = 'i', long)]
    pub invalidate: bool,

    /// Due date for a new list instead of today
    #[arg(long, value_name = "YYYY-MM-DD", requires = "new")]
    pub due: Option<String>,

    /// Print the listing as JSON
    #[arg(long, conflicts_with = "mode")]
    pub json: bool,

    /// Disable coloured status labels
    #[arg(long)]
    pub no_color: bool,

    /// Which due dates accept appended tasks: upcoming or today
    #[arg(long, value_name = "POLICY")]
    pub append_policy: Option<String>,

    /// Task file; defaults to $CRAS_FILE
    pub file: Option<String>,
}

/// The single operation an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the full listing.
    List {
        /// Emit JSON instead of text.
        json: bool,
    },
    /// Print the todo/done/total summary.
    Short,
    /// Create a list from standard input.
    New {
        /// Explicit due date, or today when absent.
        due: Option<DueDate>,
    },
    /// Append standard input to the list.
    Append,
    /// Set a task's status.
    Mark {
        /// Task to update.
        number: TaskNumber,
        /// New status.
        status: TaskStatus,
    },
    /// Replace a task's description.
    Edit {
        /// Task to update.
        number: TaskNumber,
        /// Replacement description.
        text: String,
    },
    /// Remove a task.
    Delete {
        /// Task to remove.
        number: TaskNumber,
    },
    /// Force the list to expire.
    Invalidate,
}

/// Errors surfaced to the user by the command-line layer.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Arguments failed domain validation.
    #[error(transparent)]
    Domain(#[from] TaskListError),

    /// The requested operation failed.
    #[error(transparent)]
    Service(#[from] TaskListServiceError),

    /// The listing could not be serialized.
    #[error("could not serialize listing: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Cli {
    /// Returns the values that feed settings resolution.
    #[must_use]
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            file: self.file.clone(),
            no_color: self.no_color,
            append_policy: self.append_policy.clone(),
        }
    }

    /// Determines the requested operation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::InvalidTaskNumber`] or
    /// [`TaskListError::InvalidDate`] for malformed flag values.
    pub fn mode(&self) -> Result<Mode, TaskListError> {
        if self.new {
            let due = self.due.as_deref().map(DueDate::parse).transpose()?;
            return Ok(Mode::New { due });
        }
        if self.append {
            return Ok(Mode::Append);
        }
        if self.short {
            return Ok(Mode::Short);
        }
        if self.invalidate {
            return Ok(Mode::Invalidate);
        }
        if let Some(number) = &self.done {
            return mark(number, TaskStatus::Done);
        }
        if let Some(number) = &self.todo {
            return mark(number, TaskStatus::Todo);
        }
        if let Some(number) = &self.delete {
            return Ok(Mode::Delete {
                number: TaskNumber::parse(number)?,
            });
        }
        if let Some([number, text]) = self.edit.as_deref() {
            return Ok(Mode::Edit {
                number: TaskNumber::parse(number)?,
                text: text.clone(),
            });
        }
        Ok(Mode::List { json: self.json })
    }
}

fn mark(number: &str, status: TaskStatus) -> Result<Mode, TaskListError> {
    Ok(Mode::Mark {
        number: TaskNumber::parse(number)?,
        status,
    })
}

/// Runs `mode` against `service`, reading task lines from `input` and
/// writing results to `output`.
///
/// # Errors
///
/// Returns [`CliError`] when the operation fails or output cannot be
/// written.
pub fn run<R, C>(
    mode: Mode,
    service: &TaskListService<R, C>,
    renderer: Renderer,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<(), CliError>
where
    R: TaskListRepository,
    C: Clock + Send + Sync,
{
    match mode {
        Mode::List { json: false } => {
            let list = service.view()?;
            writeln!(output, "{}", renderer.listing(&list))?;
        }
        Mode::List { json: true } => {
            let list = service.view()?;
            writeln!(output, "{}", render::json_listing(&list)?)?;
        }
        Mode::Short => {
            let list = service.view()?;
            writeln!(output, "{}", render::short_summary(list.summary()))?;
        }
        Mode::New { due } => {
            let lines = read_lines(input)?;
            service.create(lines, due)?;
        }
        Mode::Append => {
            let lines = read_lines(input)?;
            service.append(lines)?;
        }
        Mode::Mark { number, status } => {
            let marked = service.mark(number, status)?;
            writeln!(output, "{}", renderer.task_line(marked.number, &marked.task))?;
        }
        Mode::Edit { number, text } => {
            let edited = service.edit(number, &text)?;
            writeln!(output, "{}", renderer.task_line(edited.number, &edited.task))?;
        }
        Mode::Delete { number } => {
            let removed = service.delete(number)?;
            writeln!(output, "{}", renderer.task_line(removed.number, &removed.task))?;
        }
        Mode::Invalidate => {
            service.invalidate()?;
        }
    }
    Ok(())
}

fn read_lines(input: impl BufRead) -> io::Result<Vec<String>> {
    input.lines().collect()
}
