//! Filter Bar Component
//!
//! All / Active / Completed selector buttons.

use leptos::prelude::*;

use crate::models::TodoFilter;
use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            {TodoFilter::ALL.into_iter().map(|option| {
                let is_selected = move || store.filter().get() == option;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| store_set_filter(&store, option)
                    >
                        {option.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
