//! Task display formatting

use crate::models::TaskList;

/// Format the pending tasks as a numbered list
pub fn format_pending(list: &TaskList) -> String {
    let mut output = String::from("\nYour To-Do List:\n");

    if list.pending_len() == 0 {
        output.push_str("No pending tasks. Add some!\n");
    } else {
        for (number, task) in list.pending() {
            output.push_str(&format!("{}. {}\n", number, task));
        }
    }

    output
}

/// Format the completed tasks as a numbered list
pub fn format_completed(list: &TaskList) -> String {
    let mut output = String::from("\nCompleted Tasks:\n");

    if list.completed_len() == 0 {
        output.push_str("No completed tasks yet.\n");
    } else {
        for (number, task) in list.completed() {
            output.push_str(&format!("{}. {}\n", number, task));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    #[test]
    fn test_empty_lists() {
        let list = TaskList::new();
        assert!(format_pending(&list).contains("No pending tasks. Add some!"));
        assert!(format_completed(&list).contains("No completed tasks yet."));
    }

    #[test]
    fn test_numbered_rows() {
        let mut list = TaskList::new();
        list.add(Task::new("Buy milk").unwrap());
        list.add(Task::new("Walk dog").unwrap());
        list.complete(2).unwrap();

        assert_eq!(format_pending(&list), "\nYour To-Do List:\n1. Buy milk\n");
        assert_eq!(format_completed(&list), "\nCompleted Tasks:\n1. Walk dog\n");
    }
}
