//! The log-and-ignore persistence policy, as a named type.

use tracing::warn;

use super::{KeyValueStore, StorageError};

/// Wraps a [`KeyValueStore`] and swallows its failures.
///
/// In-memory session flags are authoritative; a failed write only costs
/// carry-over to the next launch. Every failure is logged at WARN so the
/// policy is deliberate, not accidental.
#[derive(Debug)]
pub struct BestEffort<S> {
    inner: S,
}

impl<S: KeyValueStore> BestEffort<S> {
    /// Wrap a store.
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Read `key`, treating a storage failure as an absent key.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.inner.get(key) {
            Ok(value) => value,
            Err(error) => {
                log_failure("get", key, &error);
                None
            }
        }
    }

    /// Write `key`, ignoring storage failures.
    pub fn set(&mut self, key: &str, value: &str) {
        if let Err(error) = self.inner.set(key, value) {
            log_failure("set", key, &error);
        }
    }

    /// Delete `key`, ignoring storage failures.
    pub fn delete(&mut self, key: &str) {
        if let Err(error) = self.inner.delete(key) {
            log_failure("delete", key, &error);
        }
    }

    /// Borrow the wrapped store.
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap into the underlying store.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

fn log_failure(operation: &str, key: &str, error: &StorageError) {
    warn!(operation, key, %error, "storage operation failed; continuing with in-memory state");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;

    use super::super::MemoryStore;
    use super::*;

    /// A store whose every operation fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(io::Error::from(io::ErrorKind::PermissionDenied).into())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(io::Error::from(io::ErrorKind::StorageFull).into())
        }

        fn delete(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(io::Error::from(io::ErrorKind::PermissionDenied).into())
        }
    }

    #[test]
    fn test_failures_are_swallowed() {
        let mut store = BestEffort::new(BrokenStore);
        store.set("k", "v");
        store.delete("k");
        assert!(store.get("k").is_none());
    }

    #[test]
    fn test_passthrough_on_working_store() {
        let mut store = BestEffort::new(MemoryStore::new());
        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.delete("k");
        assert!(store.get("k").is_none());
        assert!(store.inner().is_empty());
    }
}
