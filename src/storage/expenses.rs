//! Expense repository for JSON storage
//!
//! Manages loading and saving the ledger to expenses.json. Reading is lenient
//! per entry: records that don't form a valid expense are skipped, while a
//! file that isn't a JSON array at all counts as corrupt.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{KeeperError, KeeperResult};
use crate::models::{Expense, Ledger};

use super::file_io::{read_json_optional, write_json_atomic};
use super::Loaded;

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    ledger: Ledger,
}

impl ExpenseRepository {
    /// Create an empty repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ledger: Ledger::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file without touching in-memory state
    pub fn read(&self) -> KeeperResult<Ledger> {
        match read_json_optional::<Value, _>(&self.path)? {
            Some(value) => ledger_from_value(value),
            None => Ok(Ledger::new()),
        }
    }

    /// Replace in-memory state with the file contents
    ///
    /// Returns the warning when the file had to be discarded in favour of an
    /// empty ledger.
    #[must_use]
    pub fn load(&mut self) -> Loaded<()> {
        let loaded = Loaded::recover(&self.path, self.read());
        debug!(
            path = %self.path.display(),
            entries = loaded.value.len(),
            "loaded expenses"
        );
        self.ledger = loaded.value;
        Loaded {
            value: (),
            warning: loaded.warning,
        }
    }

    /// Rewrite the whole snapshot
    pub fn save(&self) -> KeeperResult<()> {
        write_json_atomic(&self.path, &self.ledger)?;
        debug!(path = %self.path.display(), entries = self.ledger.len(), "saved expenses");
        Ok(())
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }
}

/// Build a ledger from parsed JSON, skipping unusable records
fn ledger_from_value(value: Value) -> KeeperResult<Ledger> {
    let Value::Array(items) = value else {
        return Err(KeeperError::Storage(
            "Expense file must contain a list of expenses".into(),
        ));
    };

    let mut ledger = Ledger::new();
    for (i, item) in items.into_iter().enumerate() {
        let expense = match serde_json::from_value::<Expense>(item) {
            Ok(expense) => expense,
            Err(e) => {
                debug!(entry = i + 1, error = %e, "skipping unreadable expense");
                continue;
            }
        };

        if let Err(e) = expense.validate() {
            debug!(entry = i + 1, error = %e, "skipping invalid expense");
            continue;
        }

        if let Err(e) = ledger.add(expense) {
            debug!(entry = i + 1, error = %e, "skipping expense past the total limit");
        }
    }

    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, mut repo) = create_test_repo();
        assert!(repo.load().warning.is_none());
        assert!(repo.ledger().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.ledger_mut()
            .add(Expense::new("Coffee", Money::from_cents(350)).unwrap())
            .unwrap();
        repo.ledger_mut()
            .add(Expense::new("Book", Money::from_cents(1299)).unwrap())
            .unwrap();
        repo.save().unwrap();

        let mut repo2 = ExpenseRepository::new(repo.path().to_path_buf());
        assert!(repo2.load().warning.is_none());
        assert_eq!(repo2.ledger(), repo.ledger());
        assert_eq!(repo2.ledger().total(), Money::from_cents(1649));
    }

    #[test]
    fn test_incomplete_entries_skipped() {
        let (_temp_dir, mut repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"[
                {"description": "Coffee", "amount": 3.5},
                {"description": "no amount"},
                {"amount": 2.0},
                "just a string",
                {"description": "Bad amount", "amount": "ten"},
                {"description": "Refund", "amount": -4},
                {"description": "Book", "amount": 12.99}
            ]"#,
        )
        .unwrap();

        assert!(repo.load().warning.is_none());
        let names: Vec<&str> = repo
            .ledger()
            .entries()
            .map(|(_, e)| e.description.as_str())
            .collect();
        assert_eq!(names, vec!["Coffee", "Book"]);
    }

    #[test]
    fn test_entries_past_total_limit_skipped() {
        let (_temp_dir, mut repo) = create_test_repo();
        let entries: Vec<Value> = (0..10_000)
            .map(|i| serde_json::json!({"description": format!("big {}", i), "amount": 9.9e12}))
            .collect();
        fs::write(repo.path(), Value::Array(entries).to_string()).unwrap();

        assert!(repo.load().warning.is_none());
        let ledger = repo.ledger();
        assert!(ledger.len() < 10_000);
        assert!(ledger.total().is_positive());
        assert_eq!(
            ledger.total().cents(),
            990_000_000_000_000 * ledger.len() as i64
        );
    }

    #[test]
    fn test_amounts_rounded_on_load() {
        let (_temp_dir, mut repo) = create_test_repo();
        fs::write(repo.path(), r#"[{"description": "Gum", "amount": 1.239}]"#).unwrap();

        assert!(repo.load().warning.is_none());
        assert_eq!(repo.ledger().total(), Money::from_cents(124));
    }

    #[test]
    fn test_malformed_json_loads_empty_with_warning() {
        let (_temp_dir, mut repo) = create_test_repo();
        fs::write(repo.path(), "[{\"description\": ").unwrap();

        let loaded = repo.load();
        assert!(matches!(loaded.warning, Some(KeeperError::Storage(_))));
        assert!(repo.ledger().is_empty());
    }

    #[test]
    fn test_non_array_is_corrupt() {
        let (_temp_dir, mut repo) = create_test_repo();
        fs::write(repo.path(), r#"{"description": "Coffee", "amount": 3.5}"#).unwrap();

        assert!(repo.load().warning.is_some());
        assert!(repo.ledger().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_content() {
        let (_temp_dir, mut repo) = create_test_repo();
        let original = serde_json::json!([
            {"description": "Coffee", "amount": 3.5},
            {"description": "Book", "amount": 12.99}
        ]);
        fs::write(repo.path(), original.to_string()).unwrap();

        assert!(repo.load().warning.is_none());
        repo.save().unwrap();

        let written: Value =
            serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(written, original);
    }
}
