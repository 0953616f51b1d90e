//! Keystream statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Counters collected while generating keystream values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeystreamStats {
    /// Keystream values accepted.
    pub keys: u64,

    /// Four-step cycles run, accepted or not.
    pub cycles: u64,
}

impl KeystreamStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Cycles whose candidate was a joker and had to be rerun.
    #[must_use]
    pub fn retries(&self) -> u64 {
        self.cycles - self.keys
    }

    /// Average cycles per accepted key.
    #[must_use]
    pub fn cycles_per_key(&self) -> f64 {
        if self.keys == 0 {
            0.0
        } else {
            self.cycles as f64 / self.keys as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retries() {
        let stats = KeystreamStats {
            keys: 10,
            cycles: 13,
        };
        assert_eq!(stats.retries(), 3);
        assert!((stats.cycles_per_key() - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_empty_stats() {
        let mut stats = KeystreamStats::new();
        assert_eq!(stats.cycles_per_key(), 0.0);

        stats.keys = 4;
        stats.cycles = 4;
        stats.reset();
        assert_eq!(stats, KeystreamStats::default());
    }
}
