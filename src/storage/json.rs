//! JSON file-based preference store.
//!
//! This module provides a simple, human-readable preference backend using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! The whole map is kept in memory and rewritten on every `set`; preference
//! writes are rare (one per theme toggle), so there is no write batching.

use crate::domain::error::{JobdeckError, Result};
use crate::storage::backend::PreferenceStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// On-disk container format.
///
/// Wraps the key/value map in a versioned object so the format can migrate
/// without guessing at bare-map files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// All stored preference values, keyed by preference name.
    #[serde(default)]
    values: HashMap<String, String>,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: 1,
            values: HashMap::new(),
        }
    }
}

/// JSON file preference backend.
///
/// Loads the file once on construction and serves reads from memory; every
/// write persists the full map atomically. A mutex serializes access so the
/// store can be shared behind an `Arc` across suspension points.
pub struct JsonPreferenceStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory cache of the on-disk map.
    data: Mutex<PreferenceData>,
}

impl JsonPreferenceStore {
    /// Creates or opens a JSON preference store.
    ///
    /// If the file exists, loads existing data. Otherwise starts from an empty
    /// map. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty preference store");
            PreferenceData::default()
        };

        tracing::debug!(value_count = data.values.len(), "preference store initialized");

        Ok(Self {
            file_path,
            data: Mutex::new(data),
        })
    }

    fn load_from_file(path: &PathBuf) -> Result<PreferenceData> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferenceData = serde_json::from_str(&contents)
            .map_err(|e| JobdeckError::Preferences(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            values = data.values.len(),
            "loaded preference data"
        );

        Ok(data)
    }

    /// Persists the map using atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path,
    /// so the file is never left half-written even if the process crashes.
    fn save_to_file(&self, data: &PreferenceData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| JobdeckError::Preferences(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for JsonPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let data = self
            .data
            .lock()
            .map_err(|_| JobdeckError::Preferences("preference store lock poisoned".to_string()))?;

        let value = data.values.get(key).cloned();
        tracing::debug!(key = %key, found = value.is_some(), "preference lookup");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut data = self
            .data
            .lock()
            .map_err(|_| JobdeckError::Preferences("preference store lock poisoned".to_string()))?;

        data.values.insert(key.to_string(), value.to_string());
        self.save_to_file(&data)?;

        tracing::debug!(key = %key, "preference written");
        Ok(())
    }
}
