//! To-do model
//!
//! A task is a trimmed, non-empty label. The list keeps two disjoint ordered
//! sequences: pending and completed.

use serde::Serialize;
use std::fmt;

use super::to_offset;
use crate::error::KeeperResult;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Task(String);

impl Task {
    /// Create a task from raw input, trimming surrounding whitespace
    pub fn new(label: &str) -> Result<Self, TaskValidationError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(TaskValidationError::EmptyLabel);
        }
        Ok(Self(label.to_string()))
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pending and completed tasks, persisted as
/// `{"tasks": [...], "completed_tasks": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskList {
    #[serde(rename = "tasks")]
    pending: Vec<Task>,

    #[serde(rename = "completed_tasks")]
    completed: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from already validated tasks
    pub fn from_parts(pending: Vec<Task>, completed: Vec<Task>) -> Self {
        Self { pending, completed }
    }

    /// Pending tasks numbered from 1, in insertion order
    pub fn pending(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.pending.iter().enumerate().map(|(i, t)| (i + 1, t))
    }

    /// Completed tasks numbered from 1, in completion order
    pub fn completed(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.completed.iter().enumerate().map(|(i, t)| (i + 1, t))
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn completed_len(&self) -> usize {
        self.completed.len()
    }

    /// Append a task to the pending sequence
    pub fn add(&mut self, task: Task) {
        self.pending.push(task);
    }

    /// Move the pending task at a 1-based position to the end of completed
    ///
    /// Leaves both sequences untouched when the position is out of range.
    pub fn complete(&mut self, position: usize) -> KeeperResult<&Task> {
        let offset = to_offset(position, self.pending.len())?;
        let task = self.pending.remove(offset);
        self.completed.push(task);
        Ok(&self.completed[self.completed.len() - 1])
    }
}

/// Validation errors for tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyLabel,
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "Task cannot be empty"),
        }
    }
}

impl std::error::Error for TaskValidationError {}
