//! Todo Collection Operations
//!
//! Add, toggle and delete over the in-memory collection.
//! Every operation is total: unknown ids and blank input leave the list untouched.

use chrono::Utc;

use crate::models::{Todo, TodoId};

/// Prepend a new todo built from `input` (trimmed).
/// Returns the new id, or None when the trimmed input is empty.
pub fn add_todo(todos: &mut Vec<Todo>, input: &str) -> Option<TodoId> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }
    let todo = Todo::new(text.to_string(), Utc::now());
    let id = todo.id;
    todos.insert(0, todo);
    Some(id)
}

/// Flip `completed` on the todo with `id`. Returns false if no todo matched.
pub fn toggle_todo(todos: &mut [Todo], id: TodoId) -> bool {
    todos.iter_mut()
        .find(|todo| todo.id == id)
        .map(|todo| todo.completed = !todo.completed)
        .is_some()
}

/// Remove the todo with `id`. Returns false if no todo matched.
pub fn delete_todo(todos: &mut Vec<Todo>, id: TodoId) -> bool {
    let before = todos.len();
    todos.retain(|todo| todo.id != id);
    todos.len() != before
}
