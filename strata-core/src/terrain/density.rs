//! The coarse 5×33×5 density lattice of a chunk.
//!
//! Positive density is solid. Each lattice column gets its own blended
//! terrain parameters; the vertical profile comes from two 16-octave fields
//! mixed by an 8-octave balance field, on top of a lateral base level.

// Lattice code uses short axis names (ix, iy, iz, a, b)
#![allow(clippy::many_single_char_names, clippy::similar_names)]

use strata_utils::noise::{LateralNoise, OctaveNoise, clamped_lerp};

use crate::{
    biome::{BiomeId, BiomeSource},
    error::TerrainError,
    terrain::{
        blender::{
            BLEND_RADIUS, BiomeBlender, BlendOverride, NEIGHBORHOOD_SIZE, NEIGHBORHOOD_WIDTH,
        },
        parameters::TerrainParameters,
    },
};

/// Lattice points per horizontal axis.
pub const LATTICE_WIDTH: usize = 5;
/// Lattice points on the vertical axis.
pub const LATTICE_HEIGHT: usize = 33;
/// Total points in one lattice.
pub const LATTICE_SIZE: usize = LATTICE_WIDTH * LATTICE_HEIGHT * LATTICE_WIDTH;
/// Blocks between vertical lattice points.
pub const VERTICAL_STEP: i32 = 8;
/// Blocks between horizontal lattice points.
pub const HORIZONTAL_STEP: i32 = 4;

/// Field scales are single precision values, widened after dividing.
const COORDINATE_SCALE: f32 = 684.412;
const MAIN_NOISE_SCALE_XZ: f32 = 80.0;
const MAIN_NOISE_SCALE_Y: f32 = 160.0;
/// Normalizes 16-octave field values.
const LIMIT_SCALE: f64 = 512.0;
/// The last three vertical points fade towards this density.
const TOP_DENSITY: f64 = -10.0;
const TAPER_START: usize = 29;

/// Density values for one chunk, stored `(ix * 5 + iz) * 33 + iy`.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityLattice {
    values: Vec<f64>,
}

impl DensityLattice {
    /// Builds a lattice by evaluating `density` at every point.
    pub fn from_fn(mut density: impl FnMut(usize, usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(LATTICE_SIZE);
        for ix in 0..LATTICE_WIDTH {
            for iz in 0..LATTICE_WIDTH {
                for iy in 0..LATTICE_HEIGHT {
                    values.push(density(ix, iy, iz));
                }
            }
        }
        Self { values }
    }

    /// Flat index of a lattice point.
    #[inline]
    #[must_use]
    pub const fn index(ix: usize, iy: usize, iz: usize) -> usize {
        (ix * LATTICE_WIDTH + iz) * LATTICE_HEIGHT + iy
    }

    /// Density at a lattice point.
    #[inline]
    #[must_use]
    pub fn get(&self, ix: usize, iy: usize, iz: usize) -> f64 {
        self.values[Self::index(ix, iy, iz)]
    }

    /// All values in storage order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// The per-column quantities that stay fixed along one vertical line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnShape {
    /// Surface height before the 3D noise is added.
    pub base_level: f64,
    /// Scale of the 3D noise contribution.
    pub xyz_amplitude: f64,
    /// Lower clamp height.
    pub min_height: f64,
    /// Upper clamp height.
    pub max_height: f64,
}

impl ColumnShape {
    /// Combines blended parameters with the column's lateral noise value.
    #[must_use]
    pub fn new(parameters: &TerrainParameters, lateral: f64, amplitude: f64) -> Self {
        let variation = if lateral < 0.0 {
            parameters.variation_below
        } else {
            parameters.variation_above
        };
        let lateral_amplitude =
            amplitude * variation * (1.0 - parameters.sideways_noise_amount);
        let xyz_amplitude = amplitude * variation * parameters.sideways_noise_amount;

        Self {
            base_level: parameters.avg_height + lateral * lateral_amplitude,
            xyz_amplitude,
            min_height: parameters.min_height,
            max_height: parameters.max_height,
        }
    }

    /// Density at vertical lattice index `iy` given the raw field samples.
    ///
    /// Outside `[min_height, max_height]` the density is the signed distance to
    /// the violated bound and the fields are ignored. Inside, the top three
    /// points fade linearly to `-10`.
    #[must_use]
    pub fn density(&self, iy: usize, noise_a: f64, noise_b: f64, balance: f64) -> f64 {
        let y = (iy as i32 * VERTICAL_STEP) as f64;

        if y < self.min_height {
            return self.min_height - y;
        }
        if y > self.max_height {
            return self.max_height - y;
        }

        let a = noise_a / LIMIT_SCALE;
        let b = noise_b / LIMIT_SCALE;
        let balance = (balance / 10.0 + 1.0) / 2.0;
        let xyz = clamped_lerp(a, b, balance) / 50.0;

        let mut depth = self.base_level - y + self.xyz_amplitude * xyz;
        if iy > TAPER_START {
            // Computed in single precision: 1/3, 2/3 or exactly 1.
            let t = f64::from((iy - TAPER_START) as f32 / 3.0);
            depth = depth * (1.0 - t) + TOP_DENSITY * t;
        }
        depth
    }
}

/// The seeded fields a density lattice is sampled from.
pub struct DensityNoises {
    /// Lower-limit 3D field, 16 octaves.
    pub noise_a: OctaveNoise,
    /// Upper-limit 3D field, 16 octaves.
    pub noise_b: OctaveNoise,
    /// Mixes the two limit fields, 8 octaves.
    pub balance: OctaveNoise,
    /// Per-column lateral field, 6 octaves.
    pub lateral: LateralNoise,
}

/// Builds density lattices for chunks.
pub struct DensityFieldBuilder {
    noises: DensityNoises,
    blender: BiomeBlender,
    amplitude: f64,
}

impl DensityFieldBuilder {
    /// Creates a builder. `amplitude` scales every biome's height variation.
    #[must_use]
    pub fn new(noises: DensityNoises, blender: BiomeBlender, amplitude: f64) -> Self {
        Self {
            noises,
            blender,
            amplitude,
        }
    }

    /// Installs a blend override on the inner blender.
    #[must_use]
    pub fn with_blend_override(mut self, override_fn: BlendOverride) -> Self {
        self.blender = self.blender.with_override(override_fn);
        self
    }

    /// The blender used for per-column parameters.
    #[must_use]
    pub fn blender(&self) -> &BiomeBlender {
        &self.blender
    }

    /// Queries the 10×10 generation biomes around the chunk and builds its lattice.
    ///
    /// Cell coordinates wrap as 32-bit ints, so chunks `2^30` apart share a lattice.
    pub fn build(
        &self,
        chunk_x: i32,
        chunk_z: i32,
        biomes: &dyn BiomeSource,
    ) -> Result<DensityLattice, TerrainError> {
        let origin_x = chunk_x.wrapping_mul(4).wrapping_sub(BLEND_RADIUS);
        let origin_z = chunk_z.wrapping_mul(4).wrapping_sub(BLEND_RADIUS);
        let neighborhood = biomes.generation_biomes(
            origin_x,
            origin_z,
            NEIGHBORHOOD_WIDTH,
            NEIGHBORHOOD_WIDTH,
        )?;
        self.build_with_biomes(chunk_x, chunk_z, &neighborhood)
    }

    /// Builds the lattice for a chunk from an already fetched neighborhood.
    pub fn build_with_biomes(
        &self,
        chunk_x: i32,
        chunk_z: i32,
        neighborhood: &[BiomeId],
    ) -> Result<DensityLattice, TerrainError> {
        if neighborhood.len() != NEIGHBORHOOD_SIZE {
            return Err(TerrainError::MalformedBiomeGrid {
                expected: NEIGHBORHOOD_SIZE,
                actual: neighborhood.len(),
            });
        }

        let subcell_x = chunk_x.wrapping_mul(4);
        let subcell_z = chunk_z.wrapping_mul(4);
        let origin = [subcell_x, 0, subcell_z];
        let size = [LATTICE_WIDTH, LATTICE_HEIGHT, LATTICE_WIDTH];

        let lateral = self.noises.lateral.sample(subcell_x, subcell_z);
        let balance = self.noises.balance.sample(
            origin,
            size,
            [
                f64::from(COORDINATE_SCALE / MAIN_NOISE_SCALE_XZ),
                f64::from(COORDINATE_SCALE / MAIN_NOISE_SCALE_Y),
                f64::from(COORDINATE_SCALE / MAIN_NOISE_SCALE_XZ),
            ],
        );
        let scale = [f64::from(COORDINATE_SCALE); 3];
        let noise_a = self.noises.noise_a.sample(origin, size, scale);
        let noise_b = self.noises.noise_b.sample(origin, size, scale);

        let mut values = vec![0.0; LATTICE_SIZE];
        for ix in 0..LATTICE_WIDTH {
            for iz in 0..LATTICE_WIDTH {
                let column = ix * LATTICE_WIDTH + iz;
                let parameters = self.blender.blend(ix, iz, neighborhood)?;
                let lateral_value = lateral.weighted_value(column, &parameters.octave_weights);
                let shape = ColumnShape::new(&parameters, lateral_value, self.amplitude);

                for iy in 0..LATTICE_HEIGHT {
                    let index = DensityLattice::index(ix, iy, iz);
                    values[index] =
                        shape.density(iy, noise_a[index], noise_b[index], balance[index]);
                }
            }
        }

        log::trace!("Built density lattice for chunk ({chunk_x}, {chunk_z})");
        Ok(DensityLattice { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(min_height: f64, max_height: f64) -> ColumnShape {
        ColumnShape {
            base_level: 64.0,
            xyz_amplitude: 8.0,
            min_height,
            max_height,
        }
    }

    #[test]
    fn test_lattice_index_order() {
        assert_eq!(DensityLattice::index(0, 0, 0), 0);
        assert_eq!(DensityLattice::index(0, 1, 0), 1);
        assert_eq!(DensityLattice::index(0, 0, 1), 33);
        assert_eq!(DensityLattice::index(1, 0, 0), 165);
        assert_eq!(DensityLattice::index(4, 32, 4), LATTICE_SIZE - 1);

        let lattice = DensityLattice::from_fn(|ix, iy, iz| (ix * 10_000 + iz * 100 + iy) as f64);
        assert_eq!(lattice.get(3, 7, 2).to_bits(), 30_207.0_f64.to_bits());
    }

    #[test]
    fn test_taper_reaches_minus_ten() {
        let shape = shape(0.0, 256.0);
        for (a, b, balance) in [(0.0, 0.0, 0.0), (9000.0, -9000.0, 3.0), (-1e6, 1e6, -20.0)] {
            assert_eq!(shape.density(32, a, b, balance).to_bits(), (-10.0_f64).to_bits());
        }
    }

    #[test]
    fn test_taper_blends_top_points() {
        let shape = shape(0.0, 256.0);
        let untapered = 64.0 - 240.0;
        let t = f64::from(1.0_f32 / 3.0);
        let expected = untapered * (1.0 - t) + -10.0 * t;
        assert_eq!(shape.density(30, 0.0, 0.0, 0.0).to_bits(), expected.to_bits());
    }

    #[test]
    fn test_height_clamp() {
        let shape = shape(40.0, 100.0);
        // y = 16 is below the floor: distance to it, positive.
        assert_eq!(shape.density(2, 1e9, -1e9, 0.0).to_bits(), 24.0_f64.to_bits());
        // y = 104 is above the ceiling: negative distance.
        assert_eq!(shape.density(13, 1e9, -1e9, 0.0).to_bits(), (-4.0_f64).to_bits());
        // y = 256 with a low ceiling: clamp wins over the taper.
        assert_eq!(shape.density(32, 0.0, 0.0, 0.0).to_bits(), (-156.0_f64).to_bits());
    }

    #[test]
    fn test_balance_selects_field() {
        let shape = ColumnShape {
            base_level: 0.0,
            xyz_amplitude: 50.0,
            min_height: 0.0,
            max_height: 256.0,
        };
        // balance -10 maps to 0 (all A), +10 maps to 1 (all B).
        assert!((shape.density(0, 512.0, -512.0, -10.0) - 1.0).abs() < 1e-12);
        assert!((shape.density(0, 512.0, -512.0, 10.0) + 1.0).abs() < 1e-12);
        // Out-of-range balance is clamped.
        assert!((shape.density(0, 512.0, -512.0, 50.0) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_column_shape_amplitudes() {
        let parameters = TerrainParameters::derived(0.0, 0.0)
            .with_avg_height(64.0)
            .with_variations(20.0, 10.0)
            .with_sideways_noise(0.25);

        let above = ColumnShape::new(&parameters, 0.5, 2.0);
        assert_eq!(above.base_level.to_bits(), (64.0 + 0.5 * 30.0_f64).to_bits());
        assert_eq!(above.xyz_amplitude.to_bits(), 10.0_f64.to_bits());

        let below = ColumnShape::new(&parameters, -0.5, 2.0);
        assert_eq!(below.base_level.to_bits(), (64.0 - 0.5 * 15.0_f64).to_bits());
        assert_eq!(below.xyz_amplitude.to_bits(), 5.0_f64.to_bits());
    }
}
