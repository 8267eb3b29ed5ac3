//! Display formatting for terminal output
//!
//! Turns tasks and expenses into the numbered listings the shells print.

pub mod expense;
pub mod task;

pub use expense::{format_expense, format_expense_row, format_ledger, LedgerView};
pub use task::{format_completed, format_pending};
