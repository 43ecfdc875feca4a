//! Blob
//!
//! Immutable byte buffer carrying a precomputed hash. Blobs are the unit of
//! both keys and values in a [`Dictionary`](crate::Dictionary).
//!
//! ## Ownership
//! Blobs are move-only. Every dictionary operation that accepts a blob takes
//! it by value and releases it when it is no longer needed, whether or not
//! the operation succeeds. Dropping a blob releases it.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use bytes::Bytes;

use crate::error::Result;

/// Seed of the rolling hash
pub const HASH_SEED: u32 = 5381;

/// Hash a byte sequence: `hash = hash * 33 ^ byte`, seeded with 5381
///
/// This is the XOR variant of DJB2. It spreads short keys well enough for a
/// power-of-two table but offers no resistance to crafted collisions.
#[inline]
pub fn hash_bytes(data: &[u8]) -> u32 {
    data.iter().fold(HASH_SEED, |hash, &byte| {
        ((hash << 5).wrapping_add(hash)) ^ u32::from(byte)
    })
}

/// Length-prefixed, immutable byte buffer with a hash computed at creation
pub struct Blob {
    hash: u32,
    data: Bytes,
}

impl Blob {
    /// Create a blob by copying `data`
    ///
    /// Fails with `DictError::Allocation` if the copy cannot be allocated.
    pub fn new(data: &[u8]) -> Result<Self> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(data.len())?;
        buffer.extend_from_slice(data);
        Ok(Self::from(buffer))
    }

    /// Create a blob from text, including a trailing NUL byte in its length
    ///
    /// Kept for interop with consumers that expect terminated strings.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(text.len() + 1)?;
        buffer.extend_from_slice(text.as_bytes());
        buffer.push(0);
        Ok(Self::from(buffer))
    }

    /// Number of bytes in the blob
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Hash computed when the blob was created
    #[inline]
    pub fn hash_value(&self) -> u32 {
        self.hash
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Underlying buffer handle (read-only)
    #[inline]
    pub fn bytes(&self) -> &Bytes {
        &self.data
    }

    /// Consume the blob, returning its buffer
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// Render as text, dropping a single trailing NUL if present
    pub fn to_text_lossy(&self) -> Cow<'_, str> {
        let bytes = self.as_bytes();
        let bytes = bytes.strip_suffix(&[0]).unwrap_or(bytes);
        String::from_utf8_lossy(bytes)
    }
}

impl From<Vec<u8>> for Blob {
    fn from(data: Vec<u8>) -> Self {
        Self::from(Bytes::from(data))
    }
}

impl From<Bytes> for Blob {
    fn from(data: Bytes) -> Self {
        Self {
            hash: hash_bytes(&data),
            data,
        }
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Blob {
    /// Identity first, then hash and length as cheap rejects, then content
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        if self.hash != other.hash || self.len() != other.len() {
            return false;
        }

        self.data == other.data
    }
}

impl Eq for Blob {}

impl Hash for Blob {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash);
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("len", &self.len())
            .field("hash", &format_args!("{:#010x}", self.hash))
            .field("data", &self.to_text_lossy())
            .finish()
    }
}
