//! Path management for listkeeper
//!
//! All files live in a single data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `LISTKEEPER_DATA_DIR` environment variable (if set)
//! 2. The current working directory

use std::path::{Path, PathBuf};

use crate::error::KeeperError;

/// Manages all paths used by listkeeper
#[derive(Debug, Clone)]
pub struct KeeperPaths {
    /// Directory holding the snapshot and settings files
    base_dir: PathBuf,
}

impl KeeperPaths {
    /// Resolve paths from an optional explicit directory
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is given and the working directory
    /// cannot be determined.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self, KeeperError> {
        let base_dir = match data_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                KeeperError::Config(format!("Could not determine working directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create KeeperPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("listkeeper.json")
    }

    /// Get the path to todo.json (pending and completed tasks)
    pub fn todo_file(&self) -> PathBuf {
        self.base_dir.join("todo.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeeperPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.todo_file(), temp_dir.path().join("todo.json"));
        assert_eq!(paths.expenses_file(), temp_dir.path().join("expenses.json"));
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("listkeeper.json")
        );
    }

    #[test]
    fn test_defaults_to_working_directory() {
        let paths = KeeperPaths::new(None).unwrap();
        assert_eq!(paths.base_dir(), std::env::current_dir().unwrap());
    }
}
