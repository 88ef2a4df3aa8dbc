//! Seeded byte permutations, the hash behind every lattice noise.

use std::array;

use crate::random::Random;

/// A shuffled table of `0..=255`. Lookups wrap with `& 255`.
#[derive(Debug, Clone)]
pub(crate) struct Permutation {
    table: [u8; 256],
}

impl Permutation {
    /// Shuffles the identity table, drawing one bounded int per slot.
    pub(crate) fn shuffled<R: Random>(random: &mut R) -> Self {
        let mut table: [u8; 256] = array::from_fn(|i| i as u8);
        for i in 0..256 {
            let j = i + random.next_i32_bounded((256 - i) as i32) as usize;
            table.swap(i, j);
        }
        Self { table }
    }

    /// The entry at `index & 255`.
    #[inline]
    pub(crate) fn byte(&self, index: i32) -> u8 {
        self.table[(index & 255) as usize]
    }

    /// [`Self::byte`] widened for further hashing.
    #[inline]
    pub(crate) fn hash(&self, index: i32) -> i32 {
        i32::from(self.byte(index))
    }
}

/// Draws the three lattice offsets that precede a permutation, each in `[0, 256)`.
pub(crate) fn draw_offsets<R: Random>(random: &mut R) -> [f64; 3] {
    let x = random.next_f64() * 256.0;
    let y = random.next_f64() * 256.0;
    let z = random.next_f64() * 256.0;
    [x, y, z]
}
