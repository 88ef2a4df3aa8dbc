//! Improved Perlin noise, one octave of the legacy terrain noise.

// Noise code uses mathematical single-letter variables (x, y, z)
#![allow(clippy::many_single_char_names)]

use crate::random::Random;

use super::{
    floor, lerp3,
    permutation::{Permutation, draw_offsets},
    simplex_noise::{GRADIENT, dot},
    smoothstep,
};

/// Three-dimensional gradient noise over a shuffled lattice.
///
/// Sampling only reads the table and offsets, so one instance can be shared
/// between threads.
pub struct ImprovedNoise {
    permutation: Permutation,
    /// X offset added before sampling.
    pub xo: f64,
    /// Y offset added before sampling.
    pub yo: f64,
    /// Z offset added before sampling.
    pub zo: f64,
}

impl ImprovedNoise {
    /// Draws the offsets, then the permutation, from `random`.
    pub fn new<R: Random>(random: &mut R) -> Self {
        let [xo, yo, zo] = draw_offsets(random);
        Self {
            permutation: Permutation::shuffled(random),
            xo,
            yo,
            zo,
        }
    }

    /// Samples the noise at `(x, y, z)`, roughly in `[-1, 1]`.
    #[inline]
    #[must_use]
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        let x = x + self.xo;
        let y = y + self.yo;
        let z = z + self.zo;
        let cell = [floor(x), floor(y), floor(z)];

        self.sample_cell(
            cell,
            [
                x - f64::from(cell[0]),
                y - f64::from(cell[1]),
                z - f64::from(cell[2]),
            ],
        )
    }

    /// Blends the gradient contributions of the eight corners of `cell`.
    fn sample_cell(&self, cell: [i32; 3], local: [f64; 3]) -> f64 {
        let [cx, cy, cz] = cell;
        let [x, y, z] = local;
        let hash = |index| self.permutation.hash(index);

        let row0 = hash(cx) + cy;
        let row1 = hash(cx + 1) + cy;
        let h00 = hash(row0) + cz;
        let h01 = hash(row0 + 1) + cz;
        let h10 = hash(row1) + cz;
        let h11 = hash(row1 + 1) + cz;

        let corner = |h: i32, dx: f64, dy: f64, dz: f64| {
            dot(GRADIENT[(hash(h) & 15) as usize], x - dx, y - dy, z - dz)
        };

        lerp3(
            smoothstep(x),
            smoothstep(y),
            smoothstep(z),
            corner(h00, 0.0, 0.0, 0.0),
            corner(h10, 1.0, 0.0, 0.0),
            corner(h01, 0.0, 1.0, 0.0),
            corner(h11, 1.0, 1.0, 0.0),
            corner(h00 + 1, 0.0, 0.0, 1.0),
            corner(h10 + 1, 1.0, 0.0, 1.0),
            corner(h01 + 1, 0.0, 1.0, 1.0),
            corner(h11 + 1, 1.0, 1.0, 1.0),
        )
    }
}
