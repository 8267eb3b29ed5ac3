//! Interactive to-do shell
//!
//! Menu loop over a [`TodoRepository`]: view, add, complete, view completed,
//! exit. The shell owns the repository for the whole session.

use std::io::{BufRead, Write};

use crate::display::{format_completed, format_pending};
use crate::error::{KeeperError, KeeperResult};
use crate::services::{Persisted, TodoService};
use crate::storage::TodoRepository;

use super::console::Console;
use super::menu::{parse_position, render_todo_menu, TodoAction};

/// Printed on Exit, end of input, and interrupt
pub const TODO_FAREWELL: &str = "Exiting the To-Do List. Goodbye!";

/// The to-do menu loop and the state it owns
pub struct TodoShell<R, W> {
    console: Console<R, W>,
    repo: TodoRepository,
}

impl<R: BufRead, W: Write> TodoShell<R, W> {
    /// Load the repository, reporting a discarded file, and build the shell
    pub fn open(mut console: Console<R, W>, mut repo: TodoRepository) -> KeeperResult<Self> {
        if let Some(e) = repo.load().warning {
            console.say(format!(
                "Warning: could not load {} ({}). Starting with an empty list.",
                repo.path().display(),
                e
            ))?;
        }
        Ok(Self { console, repo })
    }

    /// Run until Exit or end of input
    pub fn run(&mut self) -> KeeperResult<()> {
        loop {
            self.console.print(&render_todo_menu())?;
            let Some(choice) = self.console.prompt("\nEnter your choice (1-5): ")? else {
                break;
            };

            match TodoAction::parse(&choice) {
                Some(TodoAction::ViewPending) => {
                    self.console.print(&format_pending(self.repo.list()))?;
                }
                Some(TodoAction::AddTask) => self.add_task()?,
                Some(TodoAction::CompleteTask) => self.complete_task()?,
                Some(TodoAction::ViewCompleted) => {
                    self.console.print(&format_completed(self.repo.list()))?;
                }
                Some(TodoAction::Exit) => break,
                None => self
                    .console
                    .say("Invalid choice! Enter a number between 1 and 5.")?,
            }
        }

        self.console.say(TODO_FAREWELL)
    }

    fn add_task(&mut self) -> KeeperResult<()> {
        let Some(input) = self.console.prompt("\nEnter the task: ")? else {
            return Ok(());
        };

        let result = TodoService::new(&mut self.repo).add(&input);
        match result {
            Ok(added) => {
                self.console.say(format!("Task '{}' added!", added.value))?;
                self.report_save(&added)
            }
            Err(e) if e.is_validation() => self.console.say("Task cannot be empty!"),
            Err(e) => Err(e),
        }
    }

    fn complete_task(&mut self) -> KeeperResult<()> {
        self.console.print(&format_pending(self.repo.list()))?;
        if self.repo.list().pending_len() == 0 {
            return Ok(());
        }

        let Some(input) = self
            .console
            .prompt("\nEnter the task number to mark as completed: ")?
        else {
            return Ok(());
        };

        let Some(position) = parse_position(&input) else {
            return self.console.say("Invalid input! Enter a valid task number.");
        };

        let result = TodoService::new(&mut self.repo).complete(position);
        match result {
            Ok(done) => {
                self.console
                    .say(format!("Task '{}' marked as completed!", done.value))?;
                self.console.say("Nice job! Keep it up!")?;
                self.report_save(&done)
            }
            Err(KeeperError::InvalidIndex { .. }) => {
                self.console.say("Invalid task number. Please try again.")
            }
            Err(e) => Err(e),
        }
    }

    fn report_save<T>(&mut self, persisted: &Persisted<T>) -> KeeperResult<()> {
        if let Some(e) = &persisted.save_error {
            self.console.say(format!(
                "Warning: could not save tasks ({}). The change is kept in memory only.",
                e
            ))?;
        }
        Ok(())
    }

    pub fn into_parts(self) -> (Console<R, W>, TodoRepository) {
        (self.console, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    fn run_script(path: &Path, script: &str) -> (String, TodoRepository) {
        let console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let repo = TodoRepository::new(path.to_path_buf());
        let mut shell = TodoShell::open(console, repo).unwrap();
        shell.run().unwrap();

        let (console, repo) = shell.into_parts();
        (String::from_utf8(console.into_output()).unwrap(), repo)
    }

    fn labels(repo: &TodoRepository) -> (Vec<String>, Vec<String>) {
        (
            repo.list().pending().map(|(_, t)| t.to_string()).collect(),
            repo.list().completed().map(|(_, t)| t.to_string()).collect(),
        )
    }

    #[test]
    fn test_add_view_complete_session() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todo.json");

        let (output, repo) = run_script(&path, "2\nBuy milk\n1\n3\n1\n4\n5\n");

        assert!(output.contains("Task 'Buy milk' added!"));
        assert!(output.contains("1. Buy milk"));
        assert!(output.contains("Task 'Buy milk' marked as completed!"));
        assert!(output.contains(TODO_FAREWELL));
        assert_eq!(labels(&repo), (vec![], vec!["Buy milk".to_string()]));

        let on_disk: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            on_disk,
            serde_json::json!({"tasks": [], "completed_tasks": ["Buy milk"]})
        );
    }

    #[test]
    fn test_empty_task_not_saved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todo.json");

        let (output, repo) = run_script(&path, "2\n   \n5\n");

        assert!(output.contains("Task cannot be empty!"));
        assert_eq!(repo.list().pending_len(), 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_bad_task_numbers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todo.json");

        let (output, repo) = run_script(&path, "2\nA\n3\n0\n3\n2\n3\nabc\n3\n-1\n5\n");

        assert_eq!(output.matches("Invalid task number. Please try again.").count(), 3);
        assert!(output.contains("Invalid input! Enter a valid task number."));
        assert_eq!(labels(&repo), (vec!["A".to_string()], vec![]));
    }

    #[test]
    fn test_overlong_task_number_is_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todo.json");

        let (output, repo) = run_script(&path, "2\nA\n3\n99999999999999999999\n5\n");

        assert!(output.contains("Invalid task number. Please try again."));
        assert!(!output.contains("Invalid input!"));
        assert_eq!(labels(&repo), (vec!["A".to_string()], vec![]));
    }

    #[test]
    fn test_complete_with_nothing_pending_skips_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todo.json");

        let (output, _repo) = run_script(&path, "3\n5\n");

        assert!(output.contains("No pending tasks. Add some!"));
        assert!(!output.contains("Enter the task number"));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todo.json");

        let (output, _repo) = run_script(&path, "9\nfoo\n5\n");

        assert_eq!(
            output
                .matches("Invalid choice! Enter a number between 1 and 5.")
                .count(),
            2
        );
        assert!(!path.exists());
    }

    #[test]
    fn test_end_of_input_exits() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todo.json");

        let (output, _repo) = run_script(&path, "2\nwrite report\n");

        assert!(output.trim_end().ends_with(TODO_FAREWELL));
        assert!(path.exists());
    }

    #[test]
    fn test_resumes_saved_state() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todo.json");
        fs::write(&path, r#"{"tasks": ["old one", "old two"], "completed_tasks": ["done"]}"#)
            .unwrap();

        let (output, repo) = run_script(&path, "3\n2\n5\n");

        assert!(output.contains("2. old two"));
        assert_eq!(
            labels(&repo),
            (
                vec!["old one".to_string()],
                vec!["done".to_string(), "old two".to_string()]
            )
        );
    }

    #[test]
    fn test_corrupt_file_warns_and_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todo.json");
        fs::write(&path, "]]garbage").unwrap();

        let (output, repo) = run_script(&path, "1\n5\n");

        assert!(output.starts_with("Warning: could not load"));
        assert!(output.contains("No pending tasks. Add some!"));
        assert_eq!(repo.list().pending_len(), 0);
    }
}
