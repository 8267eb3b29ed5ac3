//! CLI command handlers
//!
//! This module contains the interactive shells and the handlers behind each
//! subcommand, bridging the clap argument parsing with the service layer.

pub mod console;
pub mod expenses;
pub mod menu;
pub mod todo;

pub use console::Console;
pub use expenses::{ExpenseShell, EXPENSES_FAREWELL};
pub use todo::{TodoShell, TODO_FAREWELL};

use std::io::{self, Write};
use std::path::Path;

use crate::config::{KeeperPaths, Settings};
use crate::error::KeeperResult;
use crate::storage::{json_file_valid, ExpenseRepository, TodoRepository};

/// Run the to-do shell on the process console
pub fn handle_todo_command(paths: &KeeperPaths) -> KeeperResult<()> {
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut shell = TodoShell::open(console, TodoRepository::new(paths.todo_file()))?;
    shell.run()
}

/// Run the expense shell on the process console
pub fn handle_expenses_command(paths: &KeeperPaths, settings: Settings) -> KeeperResult<()> {
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let repo = ExpenseRepository::new(paths.expenses_file());
    let mut shell = ExpenseShell::open(console, repo, settings)?;
    shell.run()
}

/// Print resolved paths and effective settings
pub fn handle_config_command<W: Write>(
    out: &mut W,
    paths: &KeeperPaths,
    settings: &Settings,
) -> KeeperResult<()> {
    writeln!(out, "listkeeper Configuration")?;
    writeln!(out, "========================")?;
    writeln!(out, "Data directory: {}", paths.base_dir().display())?;
    writeln!(out, "Settings file:  {}", describe_file(&paths.settings_file()))?;
    writeln!(out, "To-do file:     {}", describe_file(&paths.todo_file()))?;
    writeln!(out, "Expenses file:  {}", describe_file(&paths.expenses_file()))?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Currency symbol:      {}", settings.currency_symbol)?;
    writeln!(out, "  Recent expense count: {}", settings.recent_expense_count)?;
    Ok(())
}

fn describe_file(path: &Path) -> String {
    let status = if !path.exists() {
        "missing"
    } else if json_file_valid(path) {
        "ok"
    } else {
        "unreadable"
    };
    format!("{} ({})", path.display(), status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_report() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeeperPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.todo_file(), r#"{"tasks": []}"#).unwrap();
        std::fs::write(paths.expenses_file(), "[oops").unwrap();

        let mut out = Vec::new();
        handle_config_command(&mut out, &paths, &Settings::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("listkeeper.json (missing)"));
        assert!(text.contains("todo.json (ok)"));
        assert!(text.contains("expenses.json (unreadable)"));
        assert!(text.contains("Recent expense count: 5"));
    }
}
