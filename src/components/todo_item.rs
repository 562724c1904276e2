//! Todo Item Component
//!
//! Individual row in the todo list.

use leptos::prelude::*;

use crate::models::{Todo, TodoId};

/// A single todo row. Holds no state of its own; both gestures go to the owner.
#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(into)] on_toggle: Callback<TodoId>,
    #[prop(into)] on_delete: Callback<TodoId>,
) -> impl IntoView {
    let id = todo.id;
    let completed = todo.completed;
    let toggle_class = if completed { "toggle-btn completed" } else { "toggle-btn" };
    let toggle_label = if completed { "Mark as incomplete" } else { "Mark as complete" };
    let text_class = if completed { "todo-text completed" } else { "todo-text" };

    view! {
        <div class="todo-row">
            <div class="todo-main">
                // Completion toggle
                <button
                    class=toggle_class
                    aria-label=toggle_label
                    on:click=move |_| on_toggle.run(id)
                >
                    {completed.then_some("✓")}
                </button>

                <span class=text_class>
                    {todo.text}
                </span>
            </div>

            <button
                class="delete-btn"
                aria-label="Delete todo"
                on:click=move |_| on_delete.run(id)
            >
                "×"
            </button>
        </div>
    }
}
