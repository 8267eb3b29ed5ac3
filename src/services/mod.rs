//! Service layer for listkeeper
//!
//! The service layer validates input, mutates the in-memory collection, and
//! saves the full snapshot before handing control back to the caller.

pub mod expense;
pub mod todo;

pub use expense::ExpenseService;
pub use todo::TodoService;

use tracing::warn;

use crate::error::{KeeperError, KeeperResult};

/// Result of a mutation that was applied in memory
///
/// `save_error` is set when the snapshot could not be written; the change is
/// then ahead of the file on disk until the next successful save.
#[derive(Debug)]
pub struct Persisted<T> {
    pub value: T,
    pub save_error: Option<KeeperError>,
}

impl<T> Persisted<T> {
    fn after_save(value: T, saved: KeeperResult<()>) -> Self {
        let save_error = saved.err();
        if let Some(e) = &save_error {
            warn!(error = %e, "snapshot not saved; in-memory state is ahead of disk");
        }
        Self { value, save_error }
    }

    pub fn is_saved(&self) -> bool {
        self.save_error.is_none()
    }
}
