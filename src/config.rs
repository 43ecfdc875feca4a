//! Configuration for kvdict
//!
//! Controls how a dictionary grows. Defaults match the classic behaviour:
//! the first allocation holds 8 slots and every later one doubles.

use crate::error::{DictError, Result};

/// First capacity allocated when no configuration is given
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Growth configuration for a [`Dictionary`](crate::Dictionary)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Growth Configuration
    // -------------------------------------------------------------------------
    /// Capacity allocated on the first insert (must be a power of two)
    pub initial_capacity: usize,

    /// Upper bound on capacity; growth beyond it fails with
    /// `DictError::CapacityExceeded`. `None` means bounded only by memory.
    pub max_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_capacity: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the configuration describes a usable dictionary
    pub fn validate(&self) -> Result<()> {
        if !self.initial_capacity.is_power_of_two() {
            return Err(DictError::Config(format!(
                "initial_capacity must be a non-zero power of two, got {}",
                self.initial_capacity
            )));
        }

        if let Some(max) = self.max_capacity {
            if max < self.initial_capacity {
                return Err(DictError::Config(format!(
                    "max_capacity ({}) is smaller than initial_capacity ({})",
                    max, self.initial_capacity
                )));
            }
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the capacity allocated on the first insert
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Set the maximum capacity the dictionary may grow to
    pub fn max_capacity(mut self, capacity: usize) -> Self {
        self.config.max_capacity = Some(capacity);
        self
    }

    /// Remove any capacity limit
    pub fn unbounded(mut self) -> Self {
        self.config.max_capacity = None;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
