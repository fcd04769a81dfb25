//! Preference store abstraction.
//!
//! This module defines the [`PreferenceStore`] trait that abstracts over
//! durable key/value backends. The core consumes exactly two operations,
//! get a string by key and set a string by key, so the trait stays that
//! small rather than growing into a generic settings framework.
//!
//! Both operations are asynchronous: on a mobile host the backing store is a
//! platform facility reached through a suspension point, and the in-tree
//! implementations keep the same shape.

use crate::domain::error::Result;
use async_trait::async_trait;

/// Abstraction over durable key/value preference storage.
///
/// Implementations take `&self` and handle their own interior synchronization
/// so a single instance can be shared behind an `Arc`.
///
/// # Implementations
///
/// - [`JsonPreferenceStore`](crate::storage::JsonPreferenceStore): JSON file with atomic writes
/// - [`MemoryPreferenceStore`](crate::storage::MemoryPreferenceStore): ephemeral map, for tests and hosts without durable storage
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write does not reach durable storage. Callers
    /// in this crate log such failures and keep the in-memory state
    /// authoritative rather than propagating them.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
