//! # Preference Storage
//!
//! The provider persists exactly one value: the active theme identifier under
//! [PREFERENCE_KEY]. Storage is abstracted behind [PreferenceStore] so the
//! provider works the same against an in-memory map, a settings file or a
//! browser's local storage.
//!
//! [MemoryStore] is shared: clones read and write the same map, which lets a
//! caller hand one clone to a provider and keep another to inspect it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeResult;

/// Key under which the active theme identifier is persisted.
pub const PREFERENCE_KEY: &str = "preferred-theme";

/// Client-side key-value storage for user preferences.
pub trait PreferenceStore {
    /// Read a stored value. Missing or unreadable values are `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> ThemeResult<()>;
}

/// In-memory [PreferenceStore].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one preference.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Remove a value.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.values.borrow_mut().remove(key)
    }

    /// Drop every value.
    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> ThemeResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store that never remembers anything, for sessions without storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl PreferenceStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> ThemeResult<()> {
        Ok(())
    }
}
