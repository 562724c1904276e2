//! Todo App
//!
//! Owns the store, bridges it to localStorage and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, NewTodoForm, TodoList};
use crate::filter::TodoCounts;
use crate::models::TodoId;
use crate::storage::{LocalStore, TodoRepository};
use crate::store::{
    store_add_todo, store_apply, store_delete_todo, store_restore, store_toggle_todo, AppState,
    AppStateStoreFields, AppStore,
};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store: AppStore = Store::new(AppState::default());
    let repository = StoredValue::new(TodoRepository::new(LocalStore));

    // Provide store to all children
    provide_context(store);

    // Load todos once on mount; saves are refused until this has run
    Effect::new(move |_| {
        let restored = repository.with_value(|repo| store_restore(&store, repo));
        log::info!("[APP] Restored {} todos", restored);
    });

    // Every transition saves the collection if it changed anything
    let on_add = Callback::new(move |text: String| {
        repository.with_value(|repo| store_apply(&store, repo, |s| store_add_todo(s, &text)))
    });
    let on_toggle = Callback::new(move |id: TodoId| {
        let changed = repository.with_value(|repo| store_apply(&store, repo, |s| store_toggle_todo(s, id)));
        if !changed {
            log::debug!("[APP] Toggle ignored, no todo {}", id);
        }
    });
    let on_delete = Callback::new(move |id: TodoId| {
        let changed = repository.with_value(|repo| store_apply(&store, repo, |s| store_delete_todo(s, id)));
        if !changed {
            log::debug!("[APP] Delete ignored, no todo {}", id);
        }
    });

    let todos = Signal::derive(move || store.todos().get());
    let filter = Signal::derive(move || store.filter().get());
    let counts = move || store.todos().with(|todos| TodoCounts::of(todos));

    view! {
        <main class="main-content">
            <h1>"Cursor Todo App"</h1>

            <NewTodoForm on_add=on_add />

            <FilterBar />

            <TodoList
                todos=todos
                filter=filter
                on_toggle=on_toggle
                on_delete=on_delete
            />

            <p class="todo-count">
                {move || {
                    let c = counts();
                    format!("{} active, {} completed", c.active, c.completed)
                }}
            </p>
        </main>
    }
}
