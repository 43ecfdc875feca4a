//! # kvdict
//!
//! An in-memory, insertion-ordered dictionary from byte blobs to byte blobs:
//! - Open addressing with linear probing over a power-of-two slot table
//! - An index layer that decouples slot lookup from storage position
//! - Growth by doubling with a full rehash at load factor 0.625
//! - Order-preserving deletion via compaction and index renumbering
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Caller (demo CLI, tests)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Blob (owned, hashed once)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Dictionary                              │
//! │              (set / get / has / delete)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────────┐
//!          │            │                 │
//!          ▼            ▼                 ▼
//!   ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//!   │ Slot Table  │ │ Pair Array  │ │   Resizer   │
//!   │  (probing)  │ │  (ordered)  │ │ (rehashing) │
//!   └─────────────┘ └─────────────┘ └─────────────┘
//! ```
//!
//! ```
//! use kvdict::{Blob, Dictionary};
//!
//! let mut dict = Dictionary::new();
//! dict.set(Blob::from_text("hello")?, Blob::from_text("world!")?)?;
//!
//! let value = dict.get(Blob::from_text("hello")?).unwrap();
//! assert_eq!(value.to_text_lossy(), "world!");
//! # Ok::<(), kvdict::DictError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod blob;
pub mod dict;
pub mod shared;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DictError, Result};
pub use config::Config;
pub use blob::Blob;
pub use dict::Dictionary;
pub use shared::SharedDictionary;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvdict
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
