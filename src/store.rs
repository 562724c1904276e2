//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, TodoFilter, TodoId};
use crate::storage::{KeyValueStore, TodoRepository};
use crate::todos;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos, newest first
    pub todos: Vec<Todo>,
    /// Active list filter (not persisted)
    pub filter: TodoFilter,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole collection (initial load)
pub fn store_replace_todos(store: &AppStore, loaded: Vec<Todo>) {
    store.todos().set(loaded);
}

/// Add a todo from raw input. Returns false (and notifies nobody) for blank input.
pub fn store_add_todo(store: &AppStore, input: &str) -> bool {
    let mut changed = false;
    store.todos().maybe_update(|list| {
        changed = todos::add_todo(list, input).is_some();
        changed
    });
    changed
}

/// Toggle a todo by ID
pub fn store_toggle_todo(store: &AppStore, id: TodoId) -> bool {
    let mut changed = false;
    store.todos().maybe_update(|list| {
        changed = todos::toggle_todo(list, id);
        changed
    });
    changed
}

/// Remove a todo by ID
pub fn store_delete_todo(store: &AppStore, id: TodoId) -> bool {
    let mut changed = false;
    store.todos().maybe_update(|list| {
        changed = todos::delete_todo(list, id);
        changed
    });
    changed
}

/// Change the active filter
pub fn store_set_filter(store: &AppStore, filter: TodoFilter) {
    store.filter().set(filter);
}

// ========================
// Persistence
// ========================

/// Load the stored collection into the store, then write it back.
/// This first write is what unlocks later saves.
pub fn store_restore<S: KeyValueStore>(store: &AppStore, repo: &TodoRepository<S>) -> usize {
    let loaded = repo.load();
    let count = loaded.len();
    store_replace_todos(store, loaded);
    store_save(store, repo);
    count
}

/// Write the current collection to storage
pub fn store_save<S: KeyValueStore>(store: &AppStore, repo: &TodoRepository<S>) -> bool {
    store.todos().with_untracked(|list| repo.save(list))
}

/// Run a transition and save only if it changed the collection
pub fn store_apply<S: KeyValueStore>(
    store: &AppStore,
    repo: &TodoRepository<S>,
    transition: impl FnOnce(&AppStore) -> bool,
) -> bool {
    let changed = transition(store);
    if changed {
        store_save(store, repo);
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, STORAGE_KEY};

    #[test]
    fn test_store_transitions() {
        let store = Store::new(AppState::default());

        assert!(!store_add_todo(&store, "   "));
        assert!(store.todos().get_untracked().is_empty());

        assert!(store_add_todo(&store, " Buy milk "));
        let id = store.todos().get_untracked()[0].id;
        assert_eq!(store.todos().get_untracked()[0].text, "Buy milk");

        assert!(store_toggle_todo(&store, id));
        assert!(store.todos().get_untracked()[0].completed);

        store_set_filter(&store, TodoFilter::Active);
        assert_eq!(store.filter().get_untracked(), TodoFilter::Active);
        assert_eq!(store.todos().get_untracked().len(), 1);

        assert!(!store_toggle_todo(&store, TodoId::new()));
        assert!(!store_delete_todo(&store, TodoId::new()));
        assert!(store_delete_todo(&store, id));
        assert!(store.todos().get_untracked().is_empty());
    }

    #[test]
    fn test_replace_todos() {
        let store = Store::new(AppState::default());
        let mut loaded = Vec::new();
        todos::add_todo(&mut loaded, "restored");

        store_replace_todos(&store, loaded.clone());

        assert_eq!(store.todos().get_untracked(), loaded);
        assert_eq!(store.filter().get_untracked(), TodoFilter::All);
    }

    #[test]
    fn test_restore_writes_loaded_collection() {
        let mut saved = Vec::new();
        todos::add_todo(&mut saved, "from last session");
        let raw = crate::storage::encode_todos(&saved).expect("encode");

        let repo = TodoRepository::new(MemoryStore::with_entry(STORAGE_KEY, &raw));
        let store = Store::new(AppState::default());

        assert_eq!(store_restore(&store, &repo), 1);

        assert_eq!(store.todos().get_untracked(), saved);
        assert_eq!(repo.backend().writes(), 1);
        assert_eq!(repo.load(), saved);
    }

    #[test]
    fn test_no_save_before_restore() {
        let repo = TodoRepository::new(MemoryStore::with_entry(STORAGE_KEY, "[]"));
        let store = Store::new(AppState::default());

        assert!(store_apply(&store, &repo, |s| store_add_todo(s, "too early")));

        assert_eq!(repo.backend().writes(), 0);
        assert_eq!(repo.backend().read(STORAGE_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_every_change_is_saved() {
        let repo = TodoRepository::new(MemoryStore::default());
        let store = Store::new(AppState::default());
        store_restore(&store, &repo);
        assert_eq!(repo.backend().writes(), 1);

        assert!(store_apply(&store, &repo, |s| store_add_todo(s, "Buy milk")));
        assert_eq!(repo.backend().writes(), 2);
        let id = store.todos().get_untracked()[0].id;

        assert!(store_apply(&store, &repo, |s| store_toggle_todo(s, id)));
        assert_eq!(repo.backend().writes(), 3);
        assert!(repo.load()[0].completed);

        assert!(store_apply(&store, &repo, |s| store_delete_todo(s, id)));
        assert_eq!(repo.backend().writes(), 4);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_noop_transitions_do_not_save() {
        let repo = TodoRepository::new(MemoryStore::default());
        let store = Store::new(AppState::default());
        store_restore(&store, &repo);
        store_apply(&store, &repo, |s| store_add_todo(s, "keep"));
        let writes = repo.backend().writes();

        assert!(!store_apply(&store, &repo, |s| store_add_todo(s, "  \t")));
        assert!(!store_apply(&store, &repo, |s| store_toggle_todo(s, TodoId::new())));
        assert!(!store_apply(&store, &repo, |s| store_delete_todo(s, TodoId::new())));

        assert_eq!(repo.backend().writes(), writes);
        assert_eq!(repo.load().len(), 1);
    }
}
