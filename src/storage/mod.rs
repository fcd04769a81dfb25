//! Preference Store adapter layer.
//!
//! This module provides the durable key/value abstraction the core uses for
//! the persisted dark-mode flag: read once at startup, written on each toggle.
//! Backends are intentionally dumb string stores; encoding (`"true"` /
//! `"false"`) belongs to the caller.
//!
//! # Modules
//!
//! - `backend`: [`PreferenceStore`] trait abstraction
//! - `json`: JSON file-based implementation with atomic writes
//! - `memory`: ephemeral in-memory implementation

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::PreferenceStore;
pub use json::JsonPreferenceStore;
pub use memory::MemoryPreferenceStore;
