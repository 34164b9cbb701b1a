//! In-memory [`RecordStorage`] used by tests and the QA tester.
use crate::RecordStorage;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryStorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage is read-only")]
    ReadOnly,
}

#[derive(Debug, Default)]
struct Inner {
    entries: RefCell<BTreeMap<String, Vec<u8>>>,
    read_only: Cell<bool>,
    unavailable: Cell<bool>,
}

/// Key-value storage held in memory.
///
/// Clones share the same entries, the way every tab of one origin sees the
/// same `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<Inner>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every subsequent write, like a full or locked-down store.
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.read_only.set(read_only);
    }

    /// Fail every access, like a browser with storage disabled.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.unavailable.set(unavailable);
    }

    /// Store a raw value, bypassing the read-only flag.
    pub fn seed(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.inner
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.into());
    }

    /// Raw value currently stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.entries.borrow().get(key).cloned()
    }

    fn check_available(&self) -> Result<(), MemoryStorageError> {
        if self.inner.unavailable.get() {
            Err(MemoryStorageError::Unavailable)
        } else {
            Ok(())
        }
    }

    fn check_writable(&self) -> Result<(), MemoryStorageError> {
        self.check_available()?;
        if self.inner.read_only.get() {
            Err(MemoryStorageError::ReadOnly)
        } else {
            Ok(())
        }
    }
}

impl RecordStorage for MemoryStorage {
    type Error = MemoryStorageError;

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        self.check_available()?;
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), Self::Error> {
        self.check_writable()?;
        self.seed(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.check_writable()?;
        self.inner.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.set("k", b"v").unwrap();
        assert_eq!(b.get("k").unwrap(), Some(b"v".to_vec()));
        b.remove("k").unwrap();
        assert_eq!(a.get("k").unwrap(), None);
    }

    #[test]
    fn read_only_rejects_writes_but_allows_reads() {
        let storage = MemoryStorage::new();
        storage.seed("k", "v");
        storage.set_read_only(true);
        assert_eq!(storage.set("k", b"w"), Err(MemoryStorageError::ReadOnly));
        assert_eq!(storage.get("k").unwrap(), Some(b"v".to_vec()));
    }

    #[test]
    fn unavailable_fails_every_access() {
        let storage = MemoryStorage::new();
        storage.set_unavailable(true);
        assert_eq!(storage.get("k"), Err(MemoryStorageError::Unavailable));
        assert_eq!(storage.set("k", b"v"), Err(MemoryStorageError::Unavailable));
    }
}
