//! Storage layer for listkeeper
//!
//! Each collection is a whole-file JSON snapshot, rewritten atomically after
//! every change. Missing files are empty collections; unreadable ones are
//! reported and replaced by empty collections.

pub mod expenses;
pub mod file_io;
pub mod todo;

pub use expenses::ExpenseRepository;
pub use file_io::{json_file_valid, read_json, write_json_atomic};
pub use todo::TodoRepository;

use std::path::Path;

use tracing::warn;

use crate::error::{KeeperError, KeeperResult};

/// Outcome of a lenient load: the value to use plus the reason it may be empty
#[derive(Debug)]
pub struct Loaded<T> {
    pub value: T,
    pub warning: Option<KeeperError>,
}

impl<T: Default> Loaded<T> {
    /// Apply the fallback policy: a failed read becomes the empty value
    pub fn recover(path: &Path, result: KeeperResult<T>) -> Self {
        match result {
            Ok(value) => Self {
                value,
                warning: None,
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "discarding unreadable file");
                Self {
                    value: T::default(),
                    warning: Some(e),
                }
            }
        }
    }
}
