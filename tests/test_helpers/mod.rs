//! Shared fixtures for integration tests.

use camino::Utf8PathBuf;
use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;
use tempfile::TempDir;

/// Clock pinned to noon on a fixed local calendar day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    /// Creates a clock reading noon on `date`.
    ///
    /// # Panics
    ///
    /// Panics if noon does not exist in the local time zone on `date`.
    #[must_use]
    pub fn on(date: NaiveDate) -> Self {
        let now = date
            .and_hms_opt(12, 0, 0)
            .and_then(|noon| noon.and_local_timezone(Local).earliest())
            .expect("noon exists in the local time zone");
        Self { now }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}

/// Parses a `YYYY-MM-DD` test date.
///
/// # Panics
///
/// Panics if `value` is not a valid date.
#[must_use]
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}

/// Temporary directory holding a task file path.
pub struct TaskFileDir {
    _dir: TempDir,
    /// Path of the task file inside the directory.
    pub path: Utf8PathBuf,
}

impl TaskFileDir {
    /// Creates an empty temporary directory and names `today.cras` in it.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created or is not UTF-8.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temporary directory");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .expect("temporary directory path is UTF-8");
        Self {
            path: root.join("today.cras"),
            _dir: dir,
        }
    }

    /// Reads the task file contents.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    #[must_use]
    pub fn contents(&self) -> String {
        std::fs::read_to_string(&self.path).expect("read task file")
    }

    /// Writes raw task file contents.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write(&self, contents: &str) {
        std::fs::write(&self.path, contents).expect("write task file");
    }
}

impl Default for TaskFileDir {
    fn default() -> Self {
        Self::new()
    }
}
