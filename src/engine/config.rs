//! Engine configuration

use super::subwords::DEFAULT_MAX_WORD_LENGTH;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Tunables shared by the engine components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed seed for reproducible scrambles and word picks
    pub seed: Option<u64>,
    /// Longest source word the sub-word search will explore
    pub max_word_length: usize,
}

impl EngineConfig {
    /// Random generator for this configuration
    ///
    /// Seeded runs are reproducible; otherwise the generator is seeded from
    /// the thread-local entropy source.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.max_word_length, 32);
    }

    #[test]
    fn seeded_rng_repeats() {
        let config = EngineConfig {
            seed: Some(99),
            ..EngineConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
