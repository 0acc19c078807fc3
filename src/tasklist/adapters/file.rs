//! Task list repository backed by a single file on disk.

use super::codec::{self, DecodeError};
use crate::tasklist::{
    domain::TaskList,
    ports::{TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult},
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{self, BufReader, BufWriter};
use tracing::{debug, warn};

/// Repository storing one task list at a fixed path.
///
/// Saves write a sibling temporary file, sync it and rename it over the
/// target, so a failed write never truncates an existing list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTaskListRepository {
    path: Utf8PathBuf,
}

impl FileTaskListRepository {
    /// Creates a repository for the task file at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open_parent_dir(&self) -> io::Result<(Dir, &str)> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| io::Error::other("path must include a file name"))?;
        let parent = self
            .path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
        Ok((dir, file_name))
    }

    fn io_error(&self, err: io::Error) -> TaskListRepositoryError {
        TaskListRepositoryError::io(self.path.as_str(), err)
    }

    fn write_atomically(&self, dir: &Dir, file_name: &str, list: &TaskList) -> io::Result<()> {
        let temp_name = format!(".{file_name}.tmp");
        let result = write_file(dir, &temp_name, list)
            .and_then(|()| dir.rename(&temp_name, dir, file_name));
        if result.is_err()
            && let Err(cleanup_err) = dir.remove_file(&temp_name)
        {
            warn!(
                path = %self.path,
                error = %cleanup_err,
                "failed to remove temporary task file"
            );
        }
        result
    }
}

fn write_file(dir: &Dir, name: &str, list: &TaskList) -> io::Result<()> {
    let mut file = dir.create(name)?;
    let mut writer = BufWriter::new(&mut file);
    codec::encode(list, &mut writer)?;
    drop(writer);
    file.sync_all()
}

impl TaskListRepository for FileTaskListRepository {
    fn load(&self) -> TaskListRepositoryResult<Option<TaskList>> {
        let (dir, file_name) = match self.open_parent_dir() {
            Ok(opened) => opened,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };
        let file = match dir.open(file_name) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path, "task file does not exist");
                return Ok(None);
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let list = codec::decode(BufReader::new(file)).map_err(|err| match err {
            DecodeError::Corrupt(corrupt) => TaskListRepositoryError::Corrupt(corrupt),
            DecodeError::Store(store) => TaskListRepositoryError::Store(store),
            DecodeError::Io(io_err) => self.io_error(io_err),
        })?;
        debug!(path = %self.path, tasks = list.len(), "loaded task file");
        Ok(Some(list))
    }

    fn save(&self, list: &TaskList) -> TaskListRepositoryResult<()> {
        let (dir, file_name) = self.open_parent_dir().map_err(|err| self.io_error(err))?;
        self.write_atomically(&dir, file_name, list)
            .map_err(|err| self.io_error(err))?;
        debug!(path = %self.path, tasks = list.len(), "saved task file");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.to_string()
    }
}
