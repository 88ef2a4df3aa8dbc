//! Per-column lateral noise on the coarse 5×5 lattice.
//!
//! Each octave is value noise over signed bytes: octave `k` places a lattice
//! point every `2^k` coarse cells and eases between them with the quintic fade.
//! The octaves are kept apart so callers can weight them per biome.

use crate::random::Random;

use super::{lerp2, permutation::Permutation, smoothstep};

/// Number of octaves produced per column.
pub const LATERAL_OCTAVES: usize = 6;
/// Width of the lateral lattice sampled per chunk.
pub const LATERAL_GRID: usize = 5;
/// Number of columns in one lateral sample.
pub const LATERAL_COLUMNS: usize = LATERAL_GRID * LATERAL_GRID;

/// One octave of byte value noise.
struct ByteOctave {
    permutation: Permutation,
    /// Lattice period in coarse cells.
    period: i32,
}

impl ByteOctave {
    fn new<R: Random>(random: &mut R, period: i32) -> Self {
        Self {
            permutation: Permutation::shuffled(random),
            period,
        }
    }

    /// The signed byte at a lattice point, mapped into `[-1, 1)`.
    #[inline]
    fn lattice(&self, x: i32, z: i32) -> f64 {
        let hashed = self.permutation.hash(x).wrapping_add(z);
        f64::from(self.permutation.byte(hashed) as i8) / 128.0
    }

    fn value(&self, x: i32, z: i32) -> f64 {
        let lx = x.div_euclid(self.period);
        let lz = z.div_euclid(self.period);
        let period = f64::from(self.period);
        let fx = smoothstep(f64::from(x.rem_euclid(self.period)) / period);
        let fz = smoothstep(f64::from(z.rem_euclid(self.period)) / period);

        lerp2(
            fx,
            fz,
            self.lattice(lx, lz),
            self.lattice(lx.wrapping_add(1), lz),
            self.lattice(lx, lz.wrapping_add(1)),
            self.lattice(lx.wrapping_add(1), lz.wrapping_add(1)),
        )
    }
}

/// Raw octave values for every column of one lateral lattice.
#[derive(Debug, Clone)]
pub struct LateralSample {
    values: [[f64; LATERAL_COLUMNS]; LATERAL_OCTAVES],
}

impl LateralSample {
    /// Value of a single octave at `column` (`ix * 5 + iz`).
    #[must_use]
    pub fn octave_value(&self, octave: usize, column: usize) -> f64 {
        self.values[octave][column]
    }

    /// Sum of each octave at `column` scaled by the matching entry of `weights`.
    #[must_use]
    pub fn weighted_value(&self, column: usize, weights: &[f64; LATERAL_OCTAVES]) -> f64 {
        self.values
            .iter()
            .zip(weights)
            .map(|(octave, weight)| octave[column] * weight)
            .sum()
    }
}

/// Six octaves of byte value noise sampled on a 5×5 lattice.
pub struct LateralNoise {
    octaves: Vec<ByteOctave>,
}

impl LateralNoise {
    /// Creates the octaves in order, finest first.
    pub fn new<R: Random>(random: &mut R) -> Self {
        let octaves = (0..LATERAL_OCTAVES)
            .map(|k| ByteOctave::new(random, 1 << k))
            .collect();
        Self { octaves }
    }

    /// Samples all octaves at the 5×5 columns starting at the given coarse cell.
    #[must_use]
    pub fn sample(&self, subcell_x: i32, subcell_z: i32) -> LateralSample {
        let mut values = [[0.0; LATERAL_COLUMNS]; LATERAL_OCTAVES];
        for (octave, out) in self.octaves.iter().zip(values.iter_mut()) {
            for ix in 0..LATERAL_GRID {
                for iz in 0..LATERAL_GRID {
                    out[ix * LATERAL_GRID + iz] = octave.value(
                        subcell_x.wrapping_add(ix as i32),
                        subcell_z.wrapping_add(iz as i32),
                    );
                }
            }
        }
        LateralSample { values }
    }
}
