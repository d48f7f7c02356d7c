//! Batch supplier configuration.

use crate::error::{DataError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of rows per batch.
pub const DEFAULT_BATCH_SIZE: usize = 32;

/// Configuration for a sparse batch supplier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SupplierConfig {
    /// Number of rows per batch. The final batch of an epoch may be smaller.
    pub batch_size: usize,
    /// Whether to reshuffle row order at construction and at every epoch end.
    pub shuffle: bool,
    /// Seed for the shuffling RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SupplierConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            shuffle: true,
            seed: None,
        }
    }
}

impl SupplierConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Enables or disables shuffling.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Fixes the shuffling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the configuration can drive a supplier.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(DataError::invalid_configuration(
                "batch size must be positive",
                "batch_size",
                self.batch_size.to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for creating a validated supplier configuration.
pub struct SupplierConfigBuilder {
    config: SupplierConfig,
}

impl SupplierConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: SupplierConfig::default(),
        }
    }

    /// Set the number of rows per batch.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Enable or disable shuffling.
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.config.shuffle = shuffle;
        self
    }

    /// Set the shuffling seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the configuration, rejecting invalid values.
    pub fn build(self) -> Result<SupplierConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SupplierConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
