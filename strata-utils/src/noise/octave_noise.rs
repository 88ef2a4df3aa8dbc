//! Multi-octave Perlin noise sampled on a regular lattice.
//!
//! This is the legacy octave generator the terrain density is built from:
//! every octave halves the frequency and doubles the amplitude of the one
//! before it, and a whole lattice of samples is produced in one call.

use crate::random::Random;

use super::{ImprovedNoise, lfloor};

/// Lateral lattice origins are folded into `[0, 2^24)` before sampling.
const LATERAL_WRAP: i64 = 16_777_216;

/// Keeps the fractional part of `value` and folds its integer part, so
/// far-away lattices sample with the same precision as ones near the origin.
#[inline]
#[must_use]
pub fn wrap_lateral(value: f64) -> f64 {
    let whole = lfloor(value);
    let fraction = value - whole as f64;
    fraction + (whole % LATERAL_WRAP) as f64
}

/// A stack of [`ImprovedNoise`] octaves.
///
/// Octave `j` is sampled at frequency `2^-j` and contributes with amplitude
/// `2^j`, so the full output range grows with the octave count. Callers
/// normalize by a constant suited to the octave count (512 for 16 octaves).
pub struct OctaveNoise {
    octaves: Vec<ImprovedNoise>,
}

impl OctaveNoise {
    /// Creates `octave_count` octaves, drawing each one from `random` in turn.
    pub fn new<R: Random>(random: &mut R, octave_count: usize) -> Self {
        let octaves = (0..octave_count)
            .map(|_| ImprovedNoise::new(random))
            .collect();
        Self { octaves }
    }

    /// Number of octaves in this generator.
    #[must_use]
    pub fn octave_count(&self) -> usize {
        self.octaves.len()
    }

    /// Samples a `size` lattice whose first point is `origin` and whose points
    /// are `scale` noise units apart on each axis.
    ///
    /// The output is laid out x-major, then z, then y:
    /// `index = (x * size_z + z) * size_y + y`.
    #[must_use]
    pub fn sample(&self, origin: [i32; 3], size: [usize; 3], scale: [f64; 3]) -> Vec<f64> {
        let [size_x, size_y, size_z] = size;
        let mut values = vec![0.0; size_x * size_y * size_z];

        let mut frequency = 1.0;
        for octave in &self.octaves {
            let start = [
                wrap_lateral(f64::from(origin[0]) * frequency * scale[0]),
                f64::from(origin[1]) * frequency * scale[1],
                wrap_lateral(f64::from(origin[2]) * frequency * scale[2]),
            ];
            let step = [
                scale[0] * frequency,
                scale[1] * frequency,
                scale[2] * frequency,
            ];
            Self::accumulate(octave, &mut values, start, step, size, 1.0 / frequency);
            frequency /= 2.0;
        }

        values
    }

    fn accumulate(
        octave: &ImprovedNoise,
        values: &mut [f64],
        start: [f64; 3],
        step: [f64; 3],
        size: [usize; 3],
        amplitude: f64,
    ) {
        let [size_x, size_y, size_z] = size;
        let mut index = 0;
        for ix in 0..size_x {
            let x = start[0] + ix as f64 * step[0];
            for iz in 0..size_z {
                let z = start[2] + iz as f64 * step[2];
                for iy in 0..size_y {
                    let y = start[1] + iy as f64 * step[1];
                    values[index] += octave.noise(x, y, z) * amplitude;
                    index += 1;
                }
            }
        }
    }
}
