//! Two-dimensional simplex noise, the building block of the surface noise.

// Noise code uses mathematical single-letter variables (x, y, z, i, j, k)
#![allow(clippy::many_single_char_names)]

use crate::random::Random;

use super::{
    floor,
    permutation::{Permutation, draw_offsets},
};

/// Gradient vectors shared with `ImprovedNoise`.
pub static GRADIENT: [[i32; 3]; 16] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
    [1, 1, 0],
    [0, -1, 1],
    [-1, 1, 0],
    [0, -1, -1],
];

/// Dot product of a gradient with an offset.
#[inline]
pub fn dot(gradient: [i32; 3], x: f64, y: f64, z: f64) -> f64 {
    f64::from(gradient[0]) * x + f64::from(gradient[1]) * y + f64::from(gradient[2]) * z
}

/// Simplex noise generator with a seeded permutation table.
pub struct SimplexNoise {
    permutation: Permutation,
    /// X offset for noise variation.
    pub xo: f64,
    /// Y offset for noise variation.
    pub yo: f64,
    /// Z offset, drawn to keep the random sequence aligned; unused in 2D.
    pub zo: f64,
}

impl SimplexNoise {
    // 0.5 * (sqrt(3) - 1)
    const F2: f64 = 0.366_025_403_784_438_6;
    // (3 - sqrt(3)) / 6
    const G2: f64 = 0.211_324_865_405_187_1;

    /// Creates a new `SimplexNoise` from a random source.
    pub fn new<R: Random>(random: &mut R) -> Self {
        let [xo, yo, zo] = draw_offsets(random);
        Self {
            permutation: Permutation::shuffled(random),
            xo,
            yo,
            zo,
        }
    }

    #[inline]
    fn p(&self, index: i32) -> i32 {
        self.permutation.hash(index)
    }

    #[inline]
    fn corner(gradient_index: i32, x: f64, y: f64) -> f64 {
        let d = 0.5 - x * x - y * y;
        if d < 0.0 {
            0.0
        } else {
            let d = d * d;
            d * d * dot(GRADIENT[(gradient_index & 15) as usize], x, y, 0.0)
        }
    }

    /// Samples 2D simplex noise, roughly in `[-1, 1]`.
    #[must_use]
    pub fn get_value_2d(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * Self::F2;
        let i = floor(x + s);
        let j = floor(y + s);

        let t = f64::from(i + j) * Self::G2;
        let dx0 = x - (f64::from(i) - t);
        let dy0 = y - (f64::from(j) - t);

        let (i1, j1) = if dx0 > dy0 { (1, 0) } else { (0, 1) };

        let dx1 = dx0 - f64::from(i1) + Self::G2;
        let dy1 = dy0 - f64::from(j1) + Self::G2;
        let dx2 = dx0 - 1.0 + 2.0 * Self::G2;
        let dy2 = dy0 - 1.0 + 2.0 * Self::G2;

        let ii = i & 255;
        let jj = j & 255;
        let gi0 = self.p(ii + self.p(jj)) % 12;
        let gi1 = self.p(ii + i1 + self.p(jj + j1)) % 12;
        let gi2 = self.p(ii + 1 + self.p(jj + 1)) % 12;

        let n0 = Self::corner(gi0, dx0, dy0);
        let n1 = Self::corner(gi1, dx1, dy1);
        let n2 = Self::corner(gi2, dx2, dy2);

        70.0 * (n0 + n1 + n2)
    }
}
