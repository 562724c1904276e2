//! UI Components
//!
//! Leptos components for the todo page.

mod todo_item;
mod todo_list;
mod new_todo_form;
mod filter_bar;

pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use new_todo_form::NewTodoForm;
pub use filter_bar::FilterBar;
