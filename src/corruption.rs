//! Seedable corruption simulator for exercising the decoder

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Configuration for simulated corruption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorruptionConfig {
    /// Symbols to damage in every block
    pub errors_per_block: usize,
    /// Fixed seed for reproducible runs (`None` = seeded from the OS)
    pub seed: Option<u64>,
}

impl CorruptionConfig {
    pub fn new(errors_per_block: usize, seed: Option<u64>) -> Self {
        Self {
            errors_per_block,
            seed,
        }
    }

    /// Damage exactly as many symbols as the code can still correct
    pub fn at_capacity(ecc_symbols: usize, seed: Option<u64>) -> Self {
        Self::new(ecc_symbols / 2, seed)
    }
}

/// Damages distinct symbols of each block with a random nonzero XOR mask
pub struct Corruptor {
    errors_per_block: usize,
    rng: StdRng,
}

impl Corruptor {
    pub fn new(config: &CorruptionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            errors_per_block: config.errors_per_block,
            rng,
        }
    }

    /// Corrupt `block` in place, returning the sorted damaged positions
    pub fn corrupt_block(&mut self, block: &mut [u8]) -> Vec<usize> {
        let count = self.errors_per_block.min(block.len());
        let mut positions = index::sample(&mut self.rng, block.len(), count).into_vec();
        positions.sort_unstable();

        for &pos in &positions {
            let mask: u8 = self.rng.random_range(1..=u8::MAX);
            block[pos] ^= mask;
        }
        positions
    }
}
