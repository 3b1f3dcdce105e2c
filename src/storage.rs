//! Key/value persistence for the theme preference.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;

/// String store that survives page loads (localStorage in the browser).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    entries: RefCell<HashMap<String, String>>,
    reads: Cell<usize>,
}

/// In-memory store. Clones share the same entries.
///
/// Used as the fallback when the browser refuses localStorage, so a toggle
/// still works for the current page view.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Rc<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .state
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Number of `get` calls served.
    pub fn reads(&self) -> usize {
        self.state.reads.get()
    }

    pub fn peek(&self, key: &str) -> Option<String> {
        self.state.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.state.reads.set(self.state.reads.get() + 1);
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.state
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
