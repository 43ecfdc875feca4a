//! Slot table
//!
//! Fixed-capacity open-addressed index. Each cell maps a hash bucket to a
//! position in the pair array, or holds one of two sentinels.
//!
//! Capacity is always a power of two so a bucket is `hash & (capacity - 1)`.

use crate::error::Result;

/// State of one indirection cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Never used since the last rebuild; terminates a probe
    Empty,

    /// Tombstone left by a deletion; skipped by probes, reusable by inserts
    Deleted,

    /// Index of a live pair in the pair array
    Occupied(usize),
}

/// Open-addressed table of [`Slot`]s using linear probing
#[derive(Debug, Default)]
pub struct SlotTable {
    slots: Vec<Slot>,
}

impl SlotTable {
    /// Allocate a table of `capacity` empty cells
    ///
    /// `capacity` must be a power of two.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self> {
        debug_assert!(capacity.is_power_of_two());

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize(capacity, Slot::Empty);

        Ok(Self { slots })
    }

    /// Number of cells (zero before the first allocation)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn mask(&self) -> usize {
        self.capacity() - 1
    }

    /// Starting bucket for `hash`
    #[inline]
    pub(crate) fn bucket_for(&self, hash: u32) -> usize {
        hash as usize & self.mask()
    }

    /// Store `pair_index` in the first free cell of `hash`'s probe chain
    ///
    /// The caller keeps the load factor below one, so a free cell exists.
    pub(crate) fn insert(&mut self, hash: u32, pair_index: usize) {
        let mask = self.mask();
        let mut index = self.bucket_for(hash);

        for _ in 0..self.capacity() {
            match self.slots[index] {
                Slot::Empty | Slot::Deleted => {
                    self.slots[index] = Slot::Occupied(pair_index);
                    return;
                }
                Slot::Occupied(_) => index = (index + 1) & mask,
            }
        }

        unreachable!("slot table full: load factor invariant violated");
    }

    /// Walk `hash`'s probe chain and return the first pair index accepted
    /// by `matches`
    ///
    /// Stops at the first `Empty` cell and after at most `capacity` steps.
    pub(crate) fn find<F>(&self, hash: u32, mut matches: F) -> Option<usize>
    where
        F: FnMut(usize) -> bool,
    {
        if self.slots.is_empty() {
            return None;
        }

        let mask = self.mask();
        let mut index = self.bucket_for(hash);

        for _ in 0..self.capacity() {
            match self.slots[index] {
                Slot::Empty => return None,
                Slot::Deleted => {}
                Slot::Occupied(pair_index) => {
                    if matches(pair_index) {
                        return Some(pair_index);
                    }
                }
            }
            index = (index + 1) & mask;
        }

        None
    }

    /// Renumber every cell after the pair at `removed` was compacted away
    ///
    /// The cell pointing at `removed` becomes a tombstone and every cell
    /// pointing above it moves down by one. Sentinels are left alone.
    pub(crate) fn remove_and_renumber(&mut self, removed: usize) {
        for slot in &mut self.slots {
            if let Slot::Occupied(index) = *slot {
                if index == removed {
                    *slot = Slot::Deleted;
                } else if index > removed {
                    *slot = Slot::Occupied(index - 1);
                }
            }
        }
    }

    /// Iterate over the raw cells
    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }
}
