//! In-memory preference store.
//!
//! Ephemeral [`PreferenceStore`] backend holding values in a plain map.
//! Used by tests and by hosts that have no durable storage to offer; values
//! vanish when the instance is dropped.

use crate::domain::error::{JobdeckError, Result};
use crate::storage::backend::PreferenceStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Preference backend that keeps values only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| JobdeckError::Preferences("preference store lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| JobdeckError::Preferences("preference store lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn behaves_like_a_map() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.get("isDarkMode").await.unwrap(), None);

        store.set("isDarkMode", "true").await.unwrap();
        assert_eq!(store.get("isDarkMode").await.unwrap().as_deref(), Some("true"));

        store.set("isDarkMode", "false").await.unwrap();
        assert_eq!(store.get("isDarkMode").await.unwrap().as_deref(), Some("false"));
    }
}
