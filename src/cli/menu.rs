//! Menu choices for the interactive shells
//!
//! Each shell's options are a closed enum so dispatch is checked for
//! exhaustiveness.

use std::num::IntErrorKind;

/// To-do shell options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoAction {
    ViewPending,
    AddTask,
    CompleteTask,
    ViewCompleted,
    Exit,
}

impl TodoAction {
    pub const ALL: [TodoAction; 5] = [
        Self::ViewPending,
        Self::AddTask,
        Self::CompleteTask,
        Self::ViewCompleted,
        Self::Exit,
    ];

    /// Map a typed choice ("1".."5") to an action
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::ViewPending),
            "2" => Some(Self::AddTask),
            "3" => Some(Self::CompleteTask),
            "4" => Some(Self::ViewCompleted),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ViewPending => "View To-Do List",
            Self::AddTask => "Add Task",
            Self::CompleteTask => "Complete Task",
            Self::ViewCompleted => "View Completed Tasks",
            Self::Exit => "Exit",
        }
    }
}

/// Expense shell options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseAction {
    Add,
    ViewAll,
    ViewRecent,
    Delete,
    Exit,
}

impl ExpenseAction {
    pub const ALL: [ExpenseAction; 5] = [
        Self::Add,
        Self::ViewAll,
        Self::ViewRecent,
        Self::Delete,
        Self::Exit,
    ];

    /// Map a typed choice ("1".."5") to an action
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::ViewAll),
            "3" => Some(Self::ViewRecent),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn label(&self, recent_count: usize) -> String {
        match self {
            Self::Add => "Add Expense".to_string(),
            Self::ViewAll => "View All Expenses".to_string(),
            Self::ViewRecent => format!("View Last {} Expenses", recent_count),
            Self::Delete => "Delete Expense".to_string(),
            Self::Exit => "Exit".to_string(),
        }
    }
}

/// Render the to-do menu
pub fn render_todo_menu() -> String {
    let mut output = String::from("\nTo-Do List Menu:\n");
    for (i, action) in TodoAction::ALL.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, action.label()));
    }
    output
}

/// Render the expense menu
pub fn render_expense_menu(recent_count: usize) -> String {
    let mut output = String::from("\nMenu:\n");
    for (i, action) in ExpenseAction::ALL.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, action.label(recent_count)));
    }
    output
}

/// Read a 1-based list position typed at a prompt
///
/// Returns `None` when the input is not a whole number. Negative numbers map
/// to 0 and numbers too large for `usize` map to `usize::MAX`, so both are
/// reported as out of range rather than as bad input.
pub fn parse_position(input: &str) -> Option<usize> {
    match input.trim().parse::<i64>() {
        Ok(number) if number < 0 => Some(0),
        Ok(number) => Some(usize::try_from(number).unwrap_or(usize::MAX)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(usize::MAX),
            IntErrorKind::NegOverflow => Some(0),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches_menu_numbers() {
        for (i, action) in TodoAction::ALL.iter().enumerate() {
            assert_eq!(TodoAction::parse(&(i + 1).to_string()), Some(*action));
        }
        for (i, action) in ExpenseAction::ALL.iter().enumerate() {
            assert_eq!(ExpenseAction::parse(&(i + 1).to_string()), Some(*action));
        }
    }

    #[test]
    fn test_parse_rejects_other_input() {
        for choice in ["", "0", "6", "one", "1.0", "-1"] {
            assert_eq!(TodoAction::parse(choice), None);
            assert_eq!(ExpenseAction::parse(choice), None);
        }
        assert_eq!(TodoAction::parse(" 3 "), Some(TodoAction::CompleteTask));
    }

    #[test]
    fn test_render_menus() {
        let todo = render_todo_menu();
        assert!(todo.contains("1. View To-Do List"));
        assert!(todo.contains("5. Exit"));

        let expenses = render_expense_menu(5);
        assert!(expenses.contains("3. View Last 5 Expenses"));
        assert!(expenses.contains("4. Delete Expense"));
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position(" 3 "), Some(3));
        assert_eq!(parse_position("-2"), Some(0));
        assert_eq!(parse_position("99999999999999999999"), Some(usize::MAX));
        assert_eq!(parse_position("-99999999999999999999"), Some(0));
        assert_eq!(parse_position("two"), None);
        assert_eq!(parse_position(""), None);
        assert_eq!(parse_position("1.5"), None);
    }
}
