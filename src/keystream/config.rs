//! Keystream generation parameters.

use serde::{Deserialize, Serialize};

/// Keystream generation parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeystreamConfig {
    /// Maximum transform cycles spent on a single key (0 = unlimited).
    /// Each cycle yields a joker with probability 2/28, so any ceiling in
    /// the dozens is practically never reached.
    pub max_cycles_per_key: u32,
}

impl KeystreamConfig {
    /// Create a new config with a cycle ceiling per key.
    pub fn with_max_cycles_per_key(mut self, cycles: u32) -> Self {
        self.max_cycles_per_key = cycles;
        self
    }

    /// Check whether `cycles` has reached the configured ceiling.
    #[must_use]
    pub fn exhausted(&self, cycles: u32) -> bool {
        self.max_cycles_per_key != 0 && cycles >= self.max_cycles_per_key
    }
}
