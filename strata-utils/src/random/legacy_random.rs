//! The 48-bit linear congruential generator behind `java.util.Random`.
//!
//! All legacy terrain noise is seeded through this generator, so its output
//! must match the reference sequence bit for bit.

use super::Random;

const MULTIPLIER: i64 = 0x5DEECE66D;
const ADDEND: i64 = 0xB;
const MASK: i64 = 0xFFFFFFFFFFFF;

/// A `java.util.Random` compatible generator.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    seed: i64,
}

impl LegacyRandom {
    /// Creates a generator from a 64-bit seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut random = Self { seed: 0 };
        random.set_seed(seed as i64);
        random
    }

    /// Reseeds the generator, scrambling the seed the same way `setSeed` does.
    pub fn set_seed(&mut self, seed: i64) {
        self.seed = (seed ^ MULTIPLIER) & MASK;
    }

    fn next(&mut self, bits: u64) -> i32 {
        (self.next_random() >> (48 - bits)) as i32
    }

    fn next_random(&mut self) -> i64 {
        let m = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        self.seed = m;
        m
    }
}

impl Random for LegacyRandom {
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        if bound & bound.wrapping_sub(1) == 0 {
            ((bound as i64).wrapping_mul(self.next(31) as i64) >> 31) as i32
        } else {
            loop {
                let i = self.next(31);
                let j = i % bound;
                if i.wrapping_sub(j).wrapping_add(bound.wrapping_sub(1)) >= 0 {
                    return j;
                }
            }
        }
    }

    fn next_i64(&mut self) -> i64 {
        let i = self.next_i32();
        let j = self.next_i32();
        ((i as i64) << 32).wrapping_add(j as i64)
    }

    fn next_f32(&mut self) -> f32 {
        self.next(24) as f32 * 5.9604645e-8f32
    }

    fn next_f64(&mut self) -> f64 {
        // The f32 literal widens to exactly 2^-53.
        (((self.next(26) as u64) << 27) | (self.next(27) as u64)) as f64 * f64::from(1.110223e-16f32)
    }

    fn next_bool(&mut self) -> bool {
        self.next(1) != 0
    }
}

#[cfg(test)]
mod test {
    use crate::random::Random;

    use super::LegacyRandom;

    #[test]
    fn test_next_i32() {
        let mut rand = LegacyRandom::from_seed(0);

        let values = [
            -1155484576,
            -723955400,
            1033096058,
            -1690734402,
            -1557280266,
            1327362106,
            -1930858313,
            502539523,
            -1728529858,
            -938301587,
        ];

        for value in values {
            assert_eq!(rand.next_i32(), value);
        }
    }

    #[test]
    fn test_next_i32_bounded() {
        let mut rand = LegacyRandom::from_seed(0);

        let values = [0, 13, 4, 2, 5, 8, 11, 6, 9, 14];

        for value in values {
            assert_eq!(rand.next_i32_bounded(0xf), value);
        }

        let mut rand = LegacyRandom::from_seed(0);
        for _ in 0..10 {
            assert_eq!(rand.next_i32_bounded(1), 0);
        }

        let mut rand = LegacyRandom::from_seed(0);
        let values = [1, 1, 0, 1, 1, 0, 1, 0, 1, 1];
        for value in values {
            assert_eq!(rand.next_i32_bounded(2), value);
        }
    }

    #[test]
    fn test_next_f64() {
        let mut rand = LegacyRandom::from_seed(0);

        let values = [
            0.730967787376657,
            0.24053641567148587,
            0.6374174253501083,
            0.5504370051176339,
            0.5975452777972018,
            0.3332183994766498,
            0.3851891847407185,
            0.984841540199809,
            0.8791825178724801,
            0.9412491794821144,
        ];

        for value in values {
            assert_eq!(rand.next_f64(), value);
        }
    }

    #[test]
    fn test_next_f32() {
        let mut rand = LegacyRandom::from_seed(0);

        let values: [f32; 10] = [
            0.73096776, 0.831441, 0.24053639, 0.6063452, 0.6374174, 0.30905056, 0.550437,
            0.1170066, 0.59754527, 0.7815346,
        ];

        for value in values {
            assert_eq!(rand.next_f32(), value);
        }
    }

    #[test]
    fn test_next_i64() {
        let mut rand = LegacyRandom::from_seed(0);

        let values: [i64; 10] = [
            -4962768465676381896,
            4437113781045784766,
            -6688467811848818630,
            -8292973307042192125,
            -7423979211207825555,
            6146794652083548235,
            7105486291024734541,
            -279624296851435688,
            -2228689144322150137,
            -1083761183081836303,
        ];

        for value in values {
            assert_eq!(rand.next_i64(), value);
        }
    }

    #[test]
    fn test_next_bool() {
        let mut rand = LegacyRandom::from_seed(0);

        let values = [
            true, true, false, true, true, false, true, false, true, true,
        ];

        for value in values {
            assert_eq!(rand.next_bool(), value);
        }
    }

    #[test]
    fn test_set_seed_restarts_sequence() {
        let mut rand = LegacyRandom::from_seed(0);
        let first = rand.next_i64();
        rand.next_i32();

        rand.set_seed(0);
        assert_eq!(rand.next_i64(), first);
    }

    #[test]
    fn test_next_f64_scale_is_exact() {
        assert_eq!(
            f64::from(1.110223e-16f32).to_bits(),
            (1.0 / (1u64 << 53) as f64).to_bits()
        );

        let mut raw = LegacyRandom::from_seed(42);
        let mut rand = LegacyRandom::from_seed(42);
        for _ in 0..16 {
            let bits = ((raw.next(26) as u64) << 27) | (raw.next(27) as u64);
            let expected = bits as f64 / (1u64 << 53) as f64;
            assert_eq!(rand.next_f64().to_bits(), expected.to_bits());
        }
    }
}
