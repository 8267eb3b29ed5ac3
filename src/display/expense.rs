//! Expense display formatting
//!
//! Renders ledger rows with the derived total underneath.

use crate::models::{Expense, Ledger};

/// Which part of the ledger to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerView {
    All,
    /// The trailing window of at most this many entries
    Recent(usize),
}

/// Format a ledger view followed by the total of the whole ledger
pub fn format_ledger(ledger: &Ledger, view: LedgerView, symbol: &str) -> String {
    if ledger.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::from("\nExpenses:\n");

    let rows: Box<dyn Iterator<Item = (usize, &Expense)> + '_> = match view {
        LedgerView::All => Box::new(ledger.entries()),
        LedgerView::Recent(count) => Box::new(ledger.recent(count)),
    };

    for (number, expense) in rows {
        output.push_str(&format!("  {}\n", format_expense_row(number, expense, symbol)));
    }

    output.push_str(&format!(
        "\nTotal Expenses: {}\n",
        ledger.total().format_with_symbol(symbol)
    ));

    output
}

/// Format one numbered expense
pub fn format_expense_row(number: usize, expense: &Expense, symbol: &str) -> String {
    format!("{}. {}", number, format_expense(expense, symbol))
}

/// Format an expense as `description - amount`
pub fn format_expense(expense: &Expense, symbol: &str) -> String {
    format!(
        "{} - {}",
        expense.description,
        expense.amount.format_with_symbol(symbol)
    )
}
