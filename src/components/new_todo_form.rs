//! New Todo Form Component
//!
//! Text input plus submit button for adding todos.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Form for creating new todos
///
/// `on_add` returns whether the todo was accepted; rejected (blank) input stays in the field.
#[component]
pub fn NewTodoForm(#[prop(into)] on_add: Callback<String, bool>) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if on_add.run(new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <div class="new-todo-row">
                <input
                    type="text"
                    class="todo-input"
                    placeholder="What needs to be done?"
                    prop:value=move || new_text.get()
                    on:input=move |ev| {
                        if let Some(input) = ev.target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                        {
                            set_new_text.set(input.value());
                        }
                    }
                />
                <button type="submit" class="todo-button">"Add Todo"</button>
            </div>
        </form>
    }
}
