//! Shared dictionary
//!
//! A [`Dictionary`] behind one exclusive lock, for callers that share an
//! instance across threads.
//!
//! ## Concurrency Model
//! Every public method takes the single `parking_lot::Mutex` for its whole
//! duration. A delete renumbers the entire slot table, so no finer-grained
//! locking is offered.

use bytes::Bytes;
use parking_lot::Mutex;

use crate::blob::Blob;
use crate::config::Config;
use crate::dict::Dictionary;
use crate::error::Result;

/// Thread-safe handle around a [`Dictionary`]
#[derive(Default)]
pub struct SharedDictionary {
    inner: Mutex<Dictionary>,
}

impl SharedDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self::from(Dictionary::with_config(config)?))
    }

    /// Insert or overwrite (see [`Dictionary::set`])
    pub fn set(&self, key: Blob, value: Blob) -> Result<()> {
        self.inner.lock().set(key, value)
    }

    /// Read-only handle to the stored value's buffer
    ///
    /// The handle stays valid after the lock is released, even if the pair
    /// is later overwritten or deleted.
    pub fn get(&self, key: Blob) -> Option<Bytes> {
        self.inner.lock().get(key).map(|value| value.bytes().clone())
    }

    /// Run `f` on the stored value while the lock is held
    pub fn get_with<R, F>(&self, key: Blob, f: F) -> Option<R>
    where
        F: FnOnce(&Blob) -> R,
    {
        self.inner.lock().get(key).map(f)
    }

    pub fn has(&self, key: Blob) -> bool {
        self.inner.lock().has(key)
    }

    pub fn delete(&self, key: Blob) -> bool {
        self.inner.lock().delete(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Copy of every `(key, value)` in insertion order, taken under one lock
    pub fn snapshot(&self) -> Vec<(Bytes, Bytes)> {
        self.inner
            .lock()
            .iter()
            .map(|(key, value)| (key.bytes().clone(), value.bytes().clone()))
            .collect()
    }

    /// Run `f` with exclusive access to the whole dictionary
    pub fn with_locked<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut Dictionary) -> R,
    {
        let mut dict = self.inner.lock();
        f(&mut *dict)
    }

    /// Unwrap the dictionary
    pub fn into_inner(self) -> Dictionary {
        self.inner.into_inner()
    }
}

impl From<Dictionary> for SharedDictionary {
    fn from(dict: Dictionary) -> Self {
        Self {
            inner: Mutex::new(dict),
        }
    }
}
