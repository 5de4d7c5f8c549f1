//! In-memory session store. Data is lost on process exit.

use std::collections::HashMap;

use parking_lot::RwLock;

use iga_core::ports::{SessionStore, StoreError};

#[derive(Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = InMemorySessionStore::new();
        store.set("authtoken", "abc").unwrap();
        assert_eq!(store.get("authtoken"), Some("abc".to_string()));
    }

    #[test]
    fn test_last_write_wins_and_remove() {
        let store = InMemorySessionStore::with_entries([("userRole", "STUDENT")]);
        store.set("userRole", "ADMIN").unwrap();
        assert_eq!(store.get("userRole").as_deref(), Some("ADMIN"));

        store.remove("userRole").unwrap();
        store.remove("userRole").unwrap();
        assert!(store.keys().is_empty());
    }
}
