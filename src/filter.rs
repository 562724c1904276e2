//! Filter Utilities
//!
//! Helper functions for projecting the collection through the active filter.

use crate::models::{Todo, TodoFilter};

/// Whether `todo` is visible under `filter`
pub fn matches(filter: TodoFilter, todo: &Todo) -> bool {
    match filter {
        TodoFilter::All => true,
        TodoFilter::Active => !todo.completed,
        TodoFilter::Completed => todo.completed,
    }
}

/// Visible todos in collection order
pub fn filter_todos(todos: &[Todo], filter: TodoFilter) -> Vec<Todo> {
    todos.iter()
        .filter(|todo| matches(filter, todo))
        .cloned()
        .collect()
}

/// Message shown when nothing is visible under `filter`
pub fn empty_message(filter: TodoFilter) -> &'static str {
    match filter {
        TodoFilter::All => "No todos yet! Add one above.",
        TodoFilter::Active => "No active todos.",
        TodoFilter::Completed => "No completed todos.",
    }
}

/// Active/completed totals for the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoCounts {
    pub active: usize,
    pub completed: usize,
}

impl TodoCounts {
    pub fn of(todos: &[Todo]) -> Self {
        let completed = todos.iter().filter(|t| t.completed).count();
        Self {
            active: todos.len() - completed,
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todos::{add_todo, delete_todo, toggle_todo};

    fn make_list() -> Vec<Todo> {
        // newest first: e, d, c, b, a
        let mut todos = Vec::new();
        for text in ["a", "b", "c", "d", "e"] {
            add_todo(&mut todos, text);
        }
        let (b, d) = (todos[3].id, todos[1].id);
        toggle_todo(&mut todos, b);
        toggle_todo(&mut todos, d);
        todos
    }

    fn texts(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_filter_preserves_order() {
        let todos = make_list();
        assert_eq!(texts(&filter_todos(&todos, TodoFilter::All)), ["e", "d", "c", "b", "a"]);
        assert_eq!(texts(&filter_todos(&todos, TodoFilter::Active)), ["e", "c", "a"]);
        assert_eq!(texts(&filter_todos(&todos, TodoFilter::Completed)), ["d", "b"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let todos = make_list();
        for filter in TodoFilter::ALL {
            let once = filter_todos(&todos, filter);
            let twice = filter_todos(&once, filter);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_counts() {
        let todos = make_list();
        assert_eq!(TodoCounts::of(&todos), TodoCounts { active: 3, completed: 2 });
        assert_eq!(TodoCounts::of(&[]), TodoCounts::default());
    }

    #[test]
    fn test_empty_messages_are_distinct() {
        let all = empty_message(TodoFilter::All);
        let active = empty_message(TodoFilter::Active);
        let completed = empty_message(TodoFilter::Completed);
        assert_ne!(all, active);
        assert_ne!(active, completed);
        assert_ne!(all, completed);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut todos = Vec::new();

        let id = add_todo(&mut todos, "Buy milk").expect("should add");
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "Buy milk");
        assert!(!todos[0].completed);

        assert!(add_todo(&mut todos, "  ").is_none());
        assert_eq!(todos.len(), 1);

        toggle_todo(&mut todos, id);
        assert!(todos[0].completed);

        assert!(filter_todos(&todos, TodoFilter::Active).is_empty());
        assert_eq!(empty_message(TodoFilter::Active), "No active todos.");

        let done = filter_todos(&todos, TodoFilter::Completed);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, id);

        delete_todo(&mut todos, id);
        assert!(todos.is_empty());
        assert!(filter_todos(&todos, TodoFilter::All).is_empty());
        assert_eq!(empty_message(TodoFilter::All), "No todos yet! Add one above.");
    }
}
