//! Interactive expense shell
//!
//! Menu loop over an [`ExpenseRepository`]. Amount and position prompts
//! repeat until the input is usable or the console runs dry.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_expense, format_ledger, LedgerView};
use crate::error::{KeeperError, KeeperResult};
use crate::models::{Expense, Money};
use crate::services::{ExpenseService, Persisted};
use crate::storage::ExpenseRepository;

use super::console::Console;
use super::menu::{parse_position, render_expense_menu, ExpenseAction};

pub const EXPENSES_FAREWELL: &str = "Goodbye! Stay on top of your expenses!";

/// The expense menu loop and the state it owns
pub struct ExpenseShell<R, W> {
    console: Console<R, W>,
    repo: ExpenseRepository,
    settings: Settings,
}

impl<R: BufRead, W: Write> ExpenseShell<R, W> {
    /// Load the repository, reporting a discarded file, and build the shell
    pub fn open(
        mut console: Console<R, W>,
        mut repo: ExpenseRepository,
        settings: Settings,
    ) -> KeeperResult<Self> {
        if let Some(e) = repo.load().warning {
            console.say(format!(
                "Warning: could not load {} ({}). Starting with an empty ledger.",
                repo.path().display(),
                e
            ))?;
        }
        Ok(Self {
            console,
            repo,
            settings,
        })
    }

    /// Run until Exit or end of input
    pub fn run(&mut self) -> KeeperResult<()> {
        self.console.say("Welcome to the Expense Tracker")?;

        loop {
            self.console
                .print(&render_expense_menu(self.settings.recent_expense_count))?;
            let Some(choice) = self.console.prompt("Enter your choice: ")? else {
                break;
            };

            match ExpenseAction::parse(&choice) {
                Some(ExpenseAction::Add) => self.add_expense()?,
                Some(ExpenseAction::ViewAll) => self.show(LedgerView::All)?,
                Some(ExpenseAction::ViewRecent) => {
                    self.show(LedgerView::Recent(self.settings.recent_expense_count))?
                }
                Some(ExpenseAction::Delete) => self.delete_expense()?,
                Some(ExpenseAction::Exit) => break,
                None => self
                    .console
                    .say("Invalid choice. Please enter a valid option.")?,
            }
        }

        self.console.say(EXPENSES_FAREWELL)
    }

    fn show(&mut self, view: LedgerView) -> KeeperResult<()> {
        let text = format_ledger(self.repo.ledger(), view, &self.settings.currency_symbol);
        self.console.print(&text)
    }

    fn add_expense(&mut self) -> KeeperResult<()> {
        let Some(description) = self.console.prompt("Enter expense description: ")? else {
            return Ok(());
        };
        if description.trim().is_empty() {
            return self.console.say("Description cannot be empty.");
        }

        let Some(amount) = self.read_amount()? else {
            return Ok(());
        };

        let result = ExpenseService::new(&mut self.repo).add(&description, amount);
        let added = match result {
            Ok(added) => added,
            Err(KeeperError::Validation(message)) => return self.console.say(message),
            Err(e) => return Err(e),
        };
        let row = self.describe(&added.value);
        self.console.say(format!("Added: {}", row))?;
        self.report_save(&added)
    }

    /// Prompt until a positive amount is entered
    fn read_amount(&mut self) -> KeeperResult<Option<Money>> {
        let label = format!("Enter expense amount: {}", self.settings.currency_symbol);
        loop {
            let Some(input) = self.console.prompt(&label)? else {
                return Ok(None);
            };

            match ExpenseService::parse_amount(&input) {
                Ok(amount) => return Ok(Some(amount)),
                Err(KeeperError::Validation(message)) => {
                    self.console.say(format!("{}. Try again.", message))?
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn delete_expense(&mut self) -> KeeperResult<()> {
        if self.repo.ledger().is_empty() {
            return self.console.say("No expenses to delete.");
        }

        self.show(LedgerView::All)?;

        loop {
            let Some(input) = self
                .console
                .prompt("Enter the expense number to delete: ")?
            else {
                return Ok(());
            };

            let Some(position) = parse_position(&input) else {
                self.console.say("Invalid input. Please enter a number.")?;
                continue;
            };

            let result = ExpenseService::new(&mut self.repo).delete(position);
            match result {
                Ok(removed) => {
                    let row = self.describe(&removed.value);
                    self.console.say(format!("Deleted: {}", row))?;
                    return self.report_save(&removed);
                }
                Err(KeeperError::InvalidIndex { len, .. }) => self.console.say(format!(
                    "Invalid selection. Enter a number between 1 and {}.",
                    len
                ))?,
                Err(e) => return Err(e),
            }
        }
    }

    fn describe(&self, expense: &Expense) -> String {
        format_expense(expense, &self.settings.currency_symbol)
    }

    fn report_save<T>(&mut self, persisted: &Persisted<T>) -> KeeperResult<()> {
        if let Some(e) = &persisted.save_error {
            self.console.say(format!(
                "Warning: could not save expenses ({}). The change is kept in memory only.",
                e
            ))?;
        }
        Ok(())
    }

    pub fn into_parts(self) -> (Console<R, W>, ExpenseRepository) {
        (self.console, self.repo)
    }
}
