//! Storage Layer
//!
//! Key-value port over the browser's localStorage plus the JSON codec
//! for the todo collection.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::models::Todo;

/// Key the collection is stored under
pub const STORAGE_KEY: &str = "todos";

/// Storage-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Encode(String),
    Decode(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Encode(msg) => write!(f, "Encode error: {}", msg),
            StorageError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Minimal string key-value store
///
/// Both operations are best-effort: a failed write is logged by the
/// implementation, never reported to the caller.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            log::warn!("[STORAGE] localStorage unavailable, dropping write to '{}'", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("[STORAGE] Failed to write '{}': {:?}", key, e);
        }
    }
}

pub fn encode_todos(todos: &[Todo]) -> Result<String, StorageError> {
    serde_json::to_string(todos).map_err(|e| StorageError::Encode(e.to_string()))
}

pub fn decode_todos(raw: &str) -> Result<Vec<Todo>, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::Decode(e.to_string()))
}

/// Loads and saves the whole collection under one key.
///
/// Saves are refused until `load` has run once, so an empty in-memory
/// list can't overwrite the stored one during startup.
#[derive(Debug)]
pub struct TodoRepository<S: KeyValueStore> {
    store: S,
    key: &'static str,
    loaded: AtomicBool,
}

impl<S: KeyValueStore> TodoRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: &'static str) -> Self {
        Self {
            store,
            key,
            loaded: AtomicBool::new(false),
        }
    }

    /// Read the stored collection. Missing or undecodable data yields an empty list.
    pub fn load(&self) -> Vec<Todo> {
        let todos = match self.store.read(self.key) {
            None => Vec::new(),
            Some(raw) => decode_todos(&raw).unwrap_or_else(|e| {
                log::error!("[STORAGE] Error loading todos: {}", e);
                Vec::new()
            }),
        };
        self.loaded.store(true, Ordering::Release);
        log::debug!("[STORAGE] Loaded {} todos", todos.len());
        todos
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Overwrite the stored collection. Returns whether a write happened.
    pub fn save(&self, todos: &[Todo]) -> bool {
        if !self.is_loaded() {
            log::debug!("[STORAGE] Skipping save before initial load");
            return false;
        }
        match encode_todos(todos) {
            Ok(raw) => {
                self.store.write(self.key, &raw);
                true
            }
            Err(e) => {
                log::error!("[STORAGE] Error saving todos: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
impl<S: KeyValueStore> TodoRepository<S> {
    pub(crate) fn backend(&self) -> &S {
        &self.store
    }
}

/// In-memory stand-in for localStorage
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
    writes: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}
