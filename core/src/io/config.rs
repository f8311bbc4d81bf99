use thiserror::Error;

use crate::constants::{DEFAULT_BUFFER_CAPACITY, MAX_BUFFER_CAPACITY};

/// Writer parameters. `Default` shuffles with a fresh thread RNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteConfig {
    /// Randomly permute examples before writing.
    pub shuffle: bool,
    /// Seed for the shuffle; `None` uses the thread-local RNG.
    pub seed: Option<u64>,
    /// Output buffer size in bytes.
    pub buffer_capacity: usize,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            shuffle: true,
            seed: None,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl WriteConfig {
    /// Keep input order.
    pub fn ordered() -> Self {
        Self { shuffle: false, ..Self::default() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_capacity == 0 || self.buffer_capacity > MAX_BUFFER_CAPACITY {
            return Err(ConfigError::BufferCapacity { have: self.buffer_capacity, max: MAX_BUFFER_CAPACITY });
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("buffer capacity must be in 1..={max}, got {have}")]
    BufferCapacity { have: usize, max: usize },
}
