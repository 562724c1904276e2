//! Todo List Component
//!
//! Shows the collection through the active filter, or an empty-state message.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::filter::{empty_message, filter_todos};
use crate::models::{Todo, TodoFilter, TodoId};

#[component]
pub fn TodoList(
    #[prop(into)] todos: Signal<Vec<Todo>>,
    #[prop(into)] filter: Signal<TodoFilter>,
    #[prop(into)] on_toggle: Callback<TodoId>,
    #[prop(into)] on_delete: Callback<TodoId>,
) -> impl IntoView {
    let visible = Memo::new(move |_| filter_todos(&todos.get(), filter.get()));

    view! {
        <div class="todo-list">
            <For
                each=move || visible.get()
                // completed is part of the key so a toggle re-renders that row only
                key=|todo| (todo.id, todo.completed)
                children=move |todo| view! {
                    <TodoItem todo=todo on_toggle=on_toggle on_delete=on_delete />
                }
            />

            <Show when=move || visible.with(|v| v.is_empty())>
                <p class="empty-state">{move || empty_message(filter.get())}</p>
            </Show>
        </div>
    }
}
