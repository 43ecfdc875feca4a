//! Error types for kvdict
//!
//! Provides a unified error type for all fallible operations.
//!
//! A lookup miss is not an error: `get`, `has` and `delete` report it with
//! `None` / `false`.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type alias using DictError
pub type Result<T> = std::result::Result<T, DictError>;

/// Unified error type for kvdict operations
#[derive(Debug, Error)]
pub enum DictError {
    // -------------------------------------------------------------------------
    // Allocation Errors
    // -------------------------------------------------------------------------
    #[error("Allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Capacity exceeded: requested {requested} slots, limit is {limit}")]
    CapacityExceeded { requested: usize, limit: usize },

    #[error("Capacity overflow: cannot double {capacity} slots")]
    CapacityOverflow { capacity: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DictError {
    /// Whether this error means backing memory could not be obtained
    ///
    /// Both a failed reservation and a refused growth count: in either case
    /// the dictionary was left exactly as it was before the call.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self,
            DictError::Allocation(_)
                | DictError::CapacityExceeded { .. }
                | DictError::CapacityOverflow { .. }
        )
    }
}
