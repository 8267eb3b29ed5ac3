//! To-do service
//!
//! Adds tasks and moves them from pending to completed.

use tracing::info;

use crate::error::{KeeperError, KeeperResult};
use crate::models::Task;
use crate::storage::TodoRepository;

use super::Persisted;

/// Service for to-do list management
pub struct TodoService<'a> {
    repo: &'a mut TodoRepository,
}

impl<'a> TodoService<'a> {
    /// Create a new to-do service
    pub fn new(repo: &'a mut TodoRepository) -> Self {
        Self { repo }
    }

    /// Append a task to the pending list and save
    ///
    /// Empty or whitespace-only input is rejected without touching the file.
    pub fn add(&mut self, input: &str) -> KeeperResult<Persisted<Task>> {
        let task = Task::new(input).map_err(|e| KeeperError::Validation(e.to_string()))?;

        self.repo.list_mut().add(task.clone());
        info!(task = %task, "task added");

        Ok(Persisted::after_save(task, self.repo.save()))
    }

    /// Move the pending task at a 1-based position to completed and save
    pub fn complete(&mut self, position: usize) -> KeeperResult<Persisted<Task>> {
        let task = self.repo.list_mut().complete(position)?.clone();
        info!(task = %task, position, "task completed");

        Ok(Persisted::after_save(task, self.repo.save()))
    }
}
