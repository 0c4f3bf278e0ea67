//! Key/value persistence port
//!
//! Both task stores persist through a [`KeyValueStore`]: a string-valued map
//! keyed by a fixed name per store. [`FileStore`] backs it with one JSON file
//! per key inside a profile directory; [`MemoryStore`] keeps everything in a
//! shared map and is what the unit tests use.

mod error;
mod file;

pub use error::{Result, StorageError};
pub use file::FileStore;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub trait KeyValueStore {
    /// Returns `None` when nothing has been written under `key` yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Clones share the same map, so two stores built from
/// clones of one `MemoryStore` see each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything has been written under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
