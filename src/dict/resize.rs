//! Resizer
//!
//! Grows a dictionary by rebuilding both arrays from scratch. The rebuild
//! rehashes every key against the new capacity, restores insertion order
//! and discards every tombstone.
//!
//! Growth is all-or-nothing: both new arrays are allocated before anything
//! is moved, so a failure leaves the dictionary untouched.

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{DictError, Result};

use super::slots::SlotTable;
use super::{Dictionary, Pair};

/// Live-pair count at which a table of `capacity` cells must grow
///
/// `floor(capacity * 3/4) - floor(capacity / 8)`, a load factor of 0.625.
/// `capacity` is zero or a power of two. Below 8 the eighth rounds to zero
/// and the threshold is the plain three quarters.
#[inline]
pub fn growth_threshold(capacity: usize) -> usize {
    let three_quarters = (capacity >> 1) + (capacity >> 2);
    three_quarters - (capacity >> 3)
}

/// Capacity that follows `capacity`: the configured initial size from
/// zero, otherwise double
pub fn next_capacity(capacity: usize, config: &Config) -> Result<usize> {
    let next = if capacity == 0 {
        config.initial_capacity
    } else {
        capacity
            .checked_mul(2)
            .ok_or(DictError::CapacityOverflow { capacity })?
    };

    match config.max_capacity {
        Some(limit) if next > limit => Err(DictError::CapacityExceeded {
            requested: next,
            limit,
        }),
        _ => Ok(next),
    }
}

impl Dictionary {
    /// Whether inserting one more pair requires growing first
    #[inline]
    pub(super) fn needs_grow(&self) -> bool {
        let capacity = self.capacity();
        capacity == 0 || self.len() >= growth_threshold(capacity)
    }

    /// Grow until one more pair fits below the load-factor threshold
    ///
    /// With a tiny initial capacity more than one doubling may be needed;
    /// the target is computed first and the tables are rebuilt once.
    pub(super) fn grow(&mut self) -> Result<()> {
        let old_capacity = self.capacity();

        let result = self.target_capacity().and_then(|new_capacity| {
            let (slots, pairs) = allocate(new_capacity)?;
            self.rebuild(slots, pairs);
            Ok(new_capacity)
        });

        match result {
            Ok(new_capacity) => {
                debug!(
                    old_capacity,
                    new_capacity,
                    count = self.len(),
                    "dictionary resized"
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    old_capacity,
                    count = self.len(),
                    error = %e,
                    "dictionary resize failed"
                );
                Err(e)
            }
        }
    }

    fn target_capacity(&self) -> Result<usize> {
        let mut capacity = next_capacity(self.capacity(), &self.config)?;
        while self.len() >= growth_threshold(capacity) {
            capacity = next_capacity(capacity, &self.config)?;
        }
        Ok(capacity)
    }

    /// Move every live pair, in order, into freshly allocated tables
    fn rebuild(&mut self, mut slots: SlotTable, mut pairs: Vec<Pair>) {
        for (index, pair) in self.pairs.drain(..).enumerate() {
            slots.insert(pair.key.hash_value(), index);
            pairs.push(pair);
        }

        self.slots = slots;
        self.pairs = pairs;
    }
}

/// Allocate an empty slot table and pair array of `capacity`
///
/// If the second allocation fails the first is released on return.
fn allocate(capacity: usize) -> Result<(SlotTable, Vec<Pair>)> {
    let slots = SlotTable::with_capacity(capacity)?;

    let mut pairs = Vec::new();
    pairs.try_reserve_exact(capacity)?;

    Ok((slots, pairs))
}
