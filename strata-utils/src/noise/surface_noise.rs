//! Octave simplex noise for the per-column surface depth.

use crate::random::Random;

use super::SimplexNoise;

/// A stack of 2D [`SimplexNoise`] octaves.
///
/// Unlike [`super::OctaveNoise`] the frequency scale halves per octave while
/// the amplitude follows `0.55 / frequency`.
pub struct SurfaceNoise {
    octaves: Vec<SimplexNoise>,
}

impl SurfaceNoise {
    /// Creates `octave_count` simplex octaves from `random`.
    pub fn new<R: Random>(random: &mut R, octave_count: usize) -> Self {
        let octaves = (0..octave_count)
            .map(|_| SimplexNoise::new(random))
            .collect();
        Self { octaves }
    }

    /// Samples a `size_x` by `size_z` grid starting at `(x, z)`.
    ///
    /// Output is x-major: `index = ix * size_z + iz`.
    #[must_use]
    pub fn sample(
        &self,
        x: f64,
        z: f64,
        size_x: usize,
        size_z: usize,
        scale_x: f64,
        scale_z: f64,
    ) -> Vec<f64> {
        let mut values = vec![0.0; size_x * size_z];
        let mut frequency = 1.0;

        for octave in &self.octaves {
            let amplitude = 0.55 / frequency;
            let mut index = 0;
            for ix in 0..size_x {
                let sx = (x + ix as f64) * scale_x * frequency + octave.xo;
                for iz in 0..size_z {
                    let sz = (z + iz as f64) * scale_z * frequency + octave.yo;
                    values[index] += octave.get_value_2d(sx, sz) * amplitude;
                    index += 1;
                }
            }
            frequency *= 0.5;
        }

        values
    }
}
