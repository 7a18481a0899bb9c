use crate::store::{KeyValueStore, Result, StoreError};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-process store - nothing survives a restart, which is exactly what tests want
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a value, handy for simulating an earlier session
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("favorites").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::with_entry("favorites", "[1]");
        store.set("favorites", "[1,2]").unwrap();
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[1,2]"));
    }
}
