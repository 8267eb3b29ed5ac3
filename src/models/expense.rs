//! Expense model
//!
//! Expenses are kept in an ordered ledger; the total is always derived.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::to_offset;
use crate::error::{KeeperError, KeeperResult};

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub description: String,
    pub amount: Money,
}

impl Expense {
    /// Create a validated expense
    pub fn new(description: &str, amount: Money) -> Result<Self, ExpenseValidationError> {
        let expense = Self {
            description: description.trim().to_string(),
            amount,
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.description, self.amount)
    }
}

/// Ordered expense records, persisted as a bare JSON array
///
/// The running total always fits in a `Money`; `add` refuses an entry that
/// would overflow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every expense numbered from 1, in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Expense)> + '_ {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    /// The trailing window of at most `count` expenses, keeping ledger numbering
    pub fn recent(&self, count: usize) -> impl Iterator<Item = (usize, &Expense)> + '_ {
        let skip = self.entries.len().saturating_sub(count);
        self.entries().skip(skip)
    }

    /// Sum of every amount in the ledger
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| &e.amount).sum()
    }

    /// Append an expense
    ///
    /// # Errors
    ///
    /// Returns a validation error, leaving the ledger unchanged, if the new
    /// total would not fit in a `Money`.
    pub fn add(&mut self, expense: Expense) -> KeeperResult<()> {
        if self.total().checked_add(expense.amount).is_none() {
            return Err(KeeperError::Validation(
                "Total expenses would exceed the largest supported amount".into(),
            ));
        }
        self.entries.push(expense);
        Ok(())
    }

    /// Remove the expense at a 1-based position
    pub fn delete(&mut self, position: usize) -> KeeperResult<Expense> {
        let offset = to_offset(position, self.entries.len())?;
        Ok(self.entries.remove(offset))
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive number (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
