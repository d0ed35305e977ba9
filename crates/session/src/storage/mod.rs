//! Key-value persistence interface.
//!
//! The session persists two string markers through a narrow get/set/delete
//! interface. Implementations: [`MemoryStore`] for tests and [`FileStore`]
//! for on-device state. [`BestEffort`] wraps either and applies the
//! log-and-ignore failure policy.

mod best_effort;
mod file;
mod memory;

pub use best_effort::BestEffort;
pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors from a key-value store implementation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file holds something other than a string map.
    #[error("storage format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// A persistent string key-value store.
///
/// Only three operations are needed: get, set, delete. Absence of a key is
/// represented as `Ok(None)`, not an error.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the removal cannot be persisted.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;
}
