//! Line-oriented text codec for task list files.
//!
//! ```text
//! 2024-05-01
//! 0	Buy milk
//! 1	Write report
//! ```
//!
//! The first line is the due date. Every following line is a numeric status
//! code, a tab, and the description, which runs to the end of the line.

use crate::tasklist::domain::{
    DueDate, Task, TaskDescription, TaskList, TaskListError, TaskStatus,
};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Reason a task file failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptionKind {
    /// The file has no due date line.
    MissingDueDate,
    /// The due date line is not a valid `YYYY-MM-DD` date.
    InvalidDueDate,
    /// A task line has no tab separating status and description.
    MissingSeparator,
    /// The status field is not a known status code.
    InvalidStatus,
    /// The description field is empty.
    MissingDescription,
    /// The file is not valid UTF-8.
    InvalidEncoding,
}

impl CorruptionKind {
    const fn describe(self) -> &'static str {
        match self {
            Self::MissingDueDate => "missing due date",
            Self::InvalidDueDate => "invalid due date",
            Self::MissingSeparator => "missing tab separator",
            Self::InvalidStatus => "invalid task status",
            Self::MissingDescription => "missing task description",
            Self::InvalidEncoding => "invalid UTF-8",
        }
    }
}

/// Error returned when a task file does not follow the format.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("line {line}: {}", .kind.describe())]
pub struct CorruptFileError {
    /// 1-based line number of the offending line.
    pub line: usize,
    /// What was wrong with the line.
    pub kind: CorruptionKind,
}

impl CorruptFileError {
    const fn new(line: usize, kind: CorruptionKind) -> Self {
        Self { line, kind }
    }
}

/// Errors raised while decoding a task list.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The content is malformed.
    #[error(transparent)]
    Corrupt(#[from] CorruptFileError),
    /// The decoded tasks could not be stored.
    #[error(transparent)]
    Store(#[from] TaskListError),
    /// The reader failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Decodes a task list from `reader`.
///
/// A file holding only the due date line decodes to an empty list. The last
/// line may omit its trailing newline.
///
/// # Errors
///
/// Returns [`DecodeError::Corrupt`] for malformed content,
/// [`DecodeError::Store`] when the list cannot grow to hold another task,
/// and [`DecodeError::Io`] when reading fails.
pub fn decode(reader: impl BufRead) -> Result<TaskList, DecodeError> {
    let mut lines = reader.split(b'\n').enumerate();

    let (_, first) = lines
        .next()
        .ok_or(CorruptFileError::new(1, CorruptionKind::MissingDueDate))?;
    let marker = utf8_line(first?, 1)?;
    let due_date = DueDate::parse(&marker)
        .map_err(|_| CorruptFileError::new(1, CorruptionKind::InvalidDueDate))?;

    let mut list = TaskList::with_due_date(due_date);
    for (offset, raw) in lines {
        let line_number = offset.saturating_add(1);
        let line = utf8_line(raw?, line_number)?;
        list.push(decode_task(&line, line_number)?)?;
    }

    Ok(list)
}

fn utf8_line(raw: Vec<u8>, line_number: usize) -> Result<String, CorruptFileError> {
    let mut line = String::from_utf8(raw)
        .map_err(|_| CorruptFileError::new(line_number, CorruptionKind::InvalidEncoding))?;
    if line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

fn decode_task(line: &str, line_number: usize) -> Result<Task, CorruptFileError> {
    let corrupt = |kind| CorruptFileError::new(line_number, kind);
    let (status_field, description_field) = line
        .split_once('\t')
        .ok_or_else(|| corrupt(CorruptionKind::MissingSeparator))?;
    let status = TaskStatus::try_from(status_field)
        .map_err(|_| corrupt(CorruptionKind::InvalidStatus))?;
    let description = TaskDescription::new(description_field)
        .map_err(|_| corrupt(CorruptionKind::MissingDescription))?;
    Ok(Task::new(status, description))
}

/// Writes `list` to `writer`.
///
/// Every line, including the last, ends with a newline. A list without a due
/// date cannot be represented and is written with the invalidated marker.
///
/// # Errors
///
/// Returns the writer's I/O error.
pub fn encode(list: &TaskList, mut writer: impl Write) -> io::Result<()> {
    let due_date = list.due_date().unwrap_or_else(DueDate::invalidated);
    writeln!(writer, "{due_date}")?;
    for task in list.tasks() {
        writeln!(writer, "{}\t{}", task.status().code(), task.description())?;
    }
    writer.flush()
}
