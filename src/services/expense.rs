//! Expense service
//!
//! Records and deletes expenses, keeping expenses.json in step with memory.

use tracing::info;

use crate::error::{KeeperError, KeeperResult};
use crate::models::{Expense, Money};
use crate::storage::ExpenseRepository;

use super::Persisted;

/// Service for expense management
pub struct ExpenseService<'a> {
    repo: &'a mut ExpenseRepository,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(repo: &'a mut ExpenseRepository) -> Self {
        Self { repo }
    }

    /// Parse a user-entered amount, requiring a positive value after rounding
    pub fn parse_amount(input: &str) -> KeeperResult<Money> {
        let amount = Money::parse(input)
            .map_err(|_| KeeperError::Validation("Please enter a valid number".into()))?;
        if !amount.is_positive() {
            return Err(KeeperError::Validation(
                "Amount must be a positive number".into(),
            ));
        }
        Ok(amount)
    }

    /// Validate and record an expense, then save
    pub fn add(&mut self, description: &str, amount: Money) -> KeeperResult<Persisted<Expense>> {
        let expense =
            Expense::new(description, amount).map_err(|e| KeeperError::Validation(e.to_string()))?;

        self.repo.ledger_mut().add(expense.clone())?;
        info!(description = %expense.description, amount = %expense.amount, "expense added");

        Ok(Persisted::after_save(expense, self.repo.save()))
    }

    /// Remove the expense at a 1-based position, then save
    pub fn delete(&mut self, position: usize) -> KeeperResult<Persisted<Expense>> {
        let expense = self.repo.ledger_mut().delete(position)?;
        info!(description = %expense.description, position, "expense deleted");

        Ok(Persisted::after_save(expense, self.repo.save()))
    }
}
