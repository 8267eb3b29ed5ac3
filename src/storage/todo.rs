//! To-do repository for JSON storage
//!
//! Manages loading and saving the task list to todo.json. Labels are
//! trimmed on load and blank ones are dropped, so the file can't put an
//! empty task in either sequence.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::KeeperResult;
use crate::models::{Task, TaskList};

use super::file_io::{read_json, write_json_atomic};
use super::Loaded;

/// On-disk shape of todo.json
#[derive(Debug, Default, Deserialize)]
struct TodoFile {
    #[serde(default)]
    tasks: Vec<String>,

    #[serde(default)]
    completed_tasks: Vec<String>,
}

impl TodoFile {
    fn into_list(self) -> TaskList {
        TaskList::from_parts(
            tasks_from_labels("tasks", self.tasks),
            tasks_from_labels("completed_tasks", self.completed_tasks),
        )
    }
}

/// Validate stored labels, skipping blank ones
fn tasks_from_labels(field: &str, labels: Vec<String>) -> Vec<Task> {
    labels
        .into_iter()
        .enumerate()
        .filter_map(|(i, label)| match Task::new(&label) {
            Ok(task) => Some(task),
            Err(e) => {
                debug!(field, entry = i + 1, error = %e, "skipping invalid task");
                None
            }
        })
        .collect()
}

/// Repository for to-do persistence
pub struct TodoRepository {
    path: PathBuf,
    list: TaskList,
}

impl TodoRepository {
    /// Create an empty repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            list: TaskList::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file without touching in-memory state
    ///
    /// A missing file is an empty list; a corrupt or unreadable one is an error.
    pub fn read(&self) -> KeeperResult<TaskList> {
        let file: TodoFile = read_json(&self.path)?;
        Ok(file.into_list())
    }

    /// Replace in-memory state with the file contents
    ///
    /// Returns the warning when the file had to be discarded in favour of an
    /// empty list. The bad file is left in place until the next save.
    #[must_use]
    pub fn load(&mut self) -> Loaded<()> {
        let loaded = Loaded::recover(&self.path, self.read());
        debug!(
            path = %self.path.display(),
            pending = loaded.value.pending_len(),
            completed = loaded.value.completed_len(),
            "loaded tasks"
        );
        self.list = loaded.value;
        Loaded {
            value: (),
            warning: loaded.warning,
        }
    }

    /// Rewrite the whole snapshot
    pub fn save(&self) -> KeeperResult<()> {
        write_json_atomic(&self.path, &self.list)?;
        debug!(path = %self.path.display(), "saved tasks");
        Ok(())
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut TaskList {
        &mut self.list
    }
}
