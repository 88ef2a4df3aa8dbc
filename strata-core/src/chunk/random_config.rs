//! Per-chunk random sources derived from the world seed.

use strata_utils::random::{LegacyRandom, Random};

const CHUNK_X_MULTIPLIER: i64 = 341_873_128_712;
const CHUNK_Z_MULTIPLIER: i64 = 132_897_987_541;

/// Derives the random state of individual chunks from the world seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldRandomConfig {
    /// The world seed, read as a signed 64-bit value.
    pub seed: i64,
}

impl WorldRandomConfig {
    /// Creates a configuration for `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed: seed as i64 }
    }

    /// Seed of the random handed to per-chunk surface work.
    ///
    /// Unlike the legacy chunk seed, the world seed is mixed in, so surface
    /// randomness changes with the world.
    #[must_use]
    pub fn chunk_seed(&self, chunk_x: i32, chunk_z: i32) -> i64 {
        i64::from(chunk_x)
            .wrapping_mul(CHUNK_X_MULTIPLIER)
            .wrapping_add(i64::from(chunk_z).wrapping_mul(CHUNK_Z_MULTIPLIER))
            ^ self.seed
    }

    /// A random seeded with [`Self::chunk_seed`].
    #[must_use]
    pub fn chunk_random(&self, chunk_x: i32, chunk_z: i32) -> LegacyRandom {
        let mut random = LegacyRandom::from_seed(0);
        random.set_seed(self.chunk_seed(chunk_x, chunk_z));
        random
    }

    /// The seed population features of a chunk start from.
    ///
    /// Two odd multipliers are drawn from the world seed and combined with
    /// the chunk coordinates.
    #[must_use]
    pub fn population_seed(&self, chunk_x: i32, chunk_z: i32) -> i64 {
        let mut random = LegacyRandom::from_seed(0);
        random.set_seed(self.seed);
        let x_multiplier = random.next_i64() / 2 * 2 + 1;
        let z_multiplier = random.next_i64() / 2 * 2 + 1;

        i64::from(chunk_x)
            .wrapping_mul(x_multiplier)
            .wrapping_add(i64::from(chunk_z).wrapping_mul(z_multiplier))
            ^ self.seed
    }
}
