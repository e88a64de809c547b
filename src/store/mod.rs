//! Durable key-value storage for the theme preference.
//!
//! This module provides:
//!
//! - [`PreferenceStore`]: The storage trait the controller reads and writes through
//! - [`FileStore`]: JSON-file-backed store at an explicit or platform path
//! - [`MemoryStore`]: In-memory store for tests and session-only embedders
//! - [`StoreError`]: Read/write failures
//!
//! The controller reads the preference once at startup and writes it on every
//! change. Failures surface as [`StoreError`] so callers can decide policy;
//! the controller itself logs and falls back to OS detection rather than
//! propagating.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A durable string key-value store.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, or `None` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
