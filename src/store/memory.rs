//! In-memory preference store.

use std::collections::HashMap;

use super::{PreferenceStore, StoreError};

/// A [`PreferenceStore`] held entirely in memory.
///
/// Backs tests and embedders that only want session-scoped persistence. The
/// write counter exists so callers can assert that every preference change
/// reaches the store, including writes of an unchanged value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Number of `set` calls since creation.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme-preference").unwrap(), None);
    }

    #[test]
    fn test_seeded_entry_is_readable() {
        let store = MemoryStore::with_entry("theme-preference", "light");
        assert_eq!(
            store.get("theme-preference").unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_writes_are_counted() {
        let mut store = MemoryStore::new();
        store.set("theme-preference", "dark").unwrap();
        store.set("theme-preference", "dark").unwrap();
        assert_eq!(store.writes(), 2);
    }
}
