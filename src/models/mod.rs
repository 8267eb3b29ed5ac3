//! Core data models for listkeeper
//!
//! Tasks, expenses, and the money type. Entries have no identity beyond their
//! position, so operations address them by 1-based position.

pub mod expense;
pub mod money;
pub mod task;

pub use expense::{Expense, ExpenseValidationError, Ledger};
pub use money::{Money, MoneyParseError};
pub use task::{Task, TaskList, TaskValidationError};

use crate::error::{KeeperError, KeeperResult};

/// Convert a 1-based position into a vector offset, checking `1 <= position <= len`
pub(crate) fn to_offset(position: usize, len: usize) -> KeeperResult<usize> {
    if position == 0 || position > len {
        return Err(KeeperError::InvalidIndex {
            index: position,
            len,
        });
    }
    Ok(position - 1)
}
