//! Dictionary Module
//!
//! Insertion-ordered associative container from blobs to blobs.
//!
//! ## Layout
//! ```text
//!   slot table (capacity cells)          pair array (dense, ordered)
//! ┌───────┬───────┬───────┬───────┐    ┌────────────┬────────────┐
//! │ Empty │  1    │  Del  │  0    │ ─► │ 0: (k0,v0) │ 1: (k1,v1) │
//! └───────┴───────┴───────┴───────┘    └────────────┴────────────┘
//! ```
//! The slot table is probed with the key's hash and yields an index into
//! the pair array. The pair array never has holes: deleting shifts every
//! later pair down by one and renumbers the slot table to match.
//!
//! ## Ownership
//! `set`, `get`, `has`, `delete` and `remove` take their key by value and
//! always consume it. `get` hands back a borrow of the stored value.

mod iter;
mod resize;
mod slots;

use std::fmt;

use tracing::trace;

use crate::blob::{hash_bytes, Blob};
use crate::config::Config;
use crate::error::Result;

pub use iter::{IntoIter, Iter, Keys, Values};
pub use resize::{growth_threshold, next_capacity};
pub use slots::{Slot, SlotTable};

/// A stored (key, value) pair
pub(crate) struct Pair {
    pub(crate) key: Blob,
    pub(crate) value: Blob,
}

/// Open-addressed, insertion-ordered dictionary of blobs
///
/// ## Invariants
/// - `capacity()` is zero or a power of two, and `len() <= capacity()`
/// - pairs occupy indices `0..len()` with no gaps
/// - every live pair index is referenced by exactly one occupied slot
#[derive(Default)]
pub struct Dictionary {
    /// Growth configuration
    config: Config,

    /// Hash-derived index into `pairs`
    slots: SlotTable,

    /// Live pairs in insertion order
    pairs: Vec<Pair>,
}

impl Dictionary {
    /// Create an empty dictionary with the default configuration
    ///
    /// Nothing is allocated until the first insert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty dictionary with a validated configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            slots: SlotTable::default(),
            pairs: Vec::new(),
        })
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Pair index holding a key equal to `key`
    fn lookup(&self, key: &Blob) -> Option<usize> {
        self.slots
            .find(key.hash_value(), |index| self.pairs[index].key == *key)
    }

    /// Pair index holding a key with exactly these bytes
    fn lookup_bytes(&self, key: &[u8]) -> Option<usize> {
        self.slots
            .find(hash_bytes(key), |index| self.pairs[index].key.as_bytes() == key)
    }

    /// Borrow the value stored for `key`
    pub fn get(&self, key: Blob) -> Option<&Blob> {
        self.lookup(&key).map(|index| &self.pairs[index].value)
    }

    /// Whether a pair with `key` exists
    pub fn has(&self, key: Blob) -> bool {
        self.lookup(&key).is_some()
    }

    /// Borrow the value stored for a key given as raw bytes
    pub fn get_bytes(&self, key: &[u8]) -> Option<&Blob> {
        self.lookup_bytes(key).map(|index| &self.pairs[index].value)
    }

    pub fn has_bytes(&self, key: &[u8]) -> bool {
        self.lookup_bytes(key).is_some()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert `key -> value`, replacing the value of an existing equal key
    ///
    /// An existing key keeps its position; the old value and the incoming
    /// (redundant) key are released. A new key is appended last, growing the
    /// tables first if the load factor would pass 0.625.
    ///
    /// If growth fails both blobs are released, the error is returned and
    /// the dictionary is unchanged.
    pub fn set(&mut self, key: Blob, value: Blob) -> Result<()> {
        if let Some(index) = self.lookup(&key) {
            self.pairs[index].value = value;
            return Ok(());
        }

        if self.needs_grow() {
            self.grow()?;
        }

        let index = self.pairs.len();
        self.slots.insert(key.hash_value(), index);
        self.pairs.push(Pair { key, value });

        Ok(())
    }

    /// Remove the pair for `key`, keeping the remaining pairs in order
    ///
    /// Returns `false` if the key was absent.
    pub fn delete(&mut self, key: Blob) -> bool {
        self.remove(key).is_some()
    }

    /// Remove the pair for `key` and hand it back as `(key, value)`
    ///
    /// Costs O(len + capacity): later pairs shift down and every slot is
    /// renumbered.
    pub fn remove(&mut self, key: Blob) -> Option<(Blob, Blob)> {
        let index = self.lookup(&key)?;

        let Pair { key, value } = self.pairs.remove(index);
        self.slots.remove_and_renumber(index);

        trace!(index, shifted = self.pairs.len() - index, "pair removed");

        Some((key, value))
    }

    // =========================================================================
    // Ordinal Access
    // =========================================================================

    /// Key at dense position `index`, in insertion order
    pub fn key_at(&self, index: usize) -> Option<&Blob> {
        self.pairs.get(index).map(|pair| &pair.key)
    }

    /// Value at dense position `index`, in insertion order
    pub fn value_at(&self, index: usize) -> Option<&Blob> {
        self.pairs.get(index).map(|pair| &pair.value)
    }

    pub fn entry_at(&self, index: usize) -> Option<(&Blob, &Blob)> {
        self.pairs.get(index).map(|pair| (&pair.key, &pair.value))
    }

    /// Iterate over `(key, value)` in insertion order
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.pairs)
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self.iter())
    }

    pub fn values(&self) -> Values<'_> {
        Values::new(self.iter())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of live pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of allocated slots (zero or a power of two)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Raw view of the slot table (for testing and debugging)
    pub fn slots(&self) -> &SlotTable {
        &self.slots
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a Blob, &'a Blob);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Dictionary {
    type Item = (Blob, Blob);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.pairs)
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter()
                    .map(|(key, value)| (key.to_text_lossy(), value.to_text_lossy())),
            )
            .finish()
    }
}
