//! Per-biome terrain shape parameters.

use serde::{Deserialize, Serialize};
use strata_utils::noise::LATERAL_OCTAVES;

/// Octave weights given to every biome that does not set its own.
pub const DEFAULT_OCTAVE_WEIGHTS: [f64; LATERAL_OCTAVES] = [0.05, 0.1, 0.2, 0.3, 0.2, 0.15];

/// Shape parameters for one biome, or a blend of several.
///
/// Heights are in blocks. `sideways_noise_amount` splits the height variation
/// between the lateral noise (`1 - sideways`) and the 3D noise (`sideways`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainParameters {
    /// Height the terrain settles around.
    pub avg_height: f64,
    /// How far above `avg_height` the lateral noise may push the surface.
    pub variation_above: f64,
    /// How far below `avg_height` the lateral noise may push the surface.
    pub variation_below: f64,
    /// Below this height the density is forced positive.
    pub min_height: f64,
    /// Above this height the density is forced negative.
    pub max_height: f64,
    /// Fraction of the variation given to the 3D noise, in `[0, 1]`.
    pub sideways_noise_amount: f64,
    /// Weight of each lateral noise octave, finest first.
    pub octave_weights: [f64; LATERAL_OCTAVES],
}

impl TerrainParameters {
    /// All fields zero. The starting point of a weighted sum.
    pub const ZERO: Self = Self {
        avg_height: 0.0,
        variation_above: 0.0,
        variation_below: 0.0,
        min_height: 0.0,
        max_height: 0.0,
        sideways_noise_amount: 0.0,
        octave_weights: [0.0; LATERAL_OCTAVES],
    };

    /// Derives parameters from a legacy biome's base height and height variation.
    #[must_use]
    pub fn derived(base_height: f32, height_variation: f32) -> Self {
        let base_height = f64::from(base_height);
        let height_variation = f64::from(height_variation);
        Self {
            avg_height: 64.0 + 24.0 * base_height,
            variation_above: 8.0 + 48.0 * height_variation,
            variation_below: 4.0 + 16.0 * height_variation,
            min_height: 0.0,
            max_height: 256.0,
            sideways_noise_amount: 0.5,
            octave_weights: DEFAULT_OCTAVE_WEIGHTS,
        }
    }

    /// Sets the average height.
    #[must_use]
    pub fn with_avg_height(mut self, avg_height: f64) -> Self {
        self.avg_height = avg_height;
        self
    }

    /// Sets the same variation above and below the average height.
    #[must_use]
    pub fn with_variation(mut self, variation: f64) -> Self {
        self.variation_above = variation;
        self.variation_below = variation;
        self
    }

    /// Sets the variation above and below separately.
    #[must_use]
    pub fn with_variations(mut self, above: f64, below: f64) -> Self {
        self.variation_above = above;
        self.variation_below = below;
        self
    }

    /// Sets the height clamp range.
    #[must_use]
    pub fn with_height_range(mut self, min_height: f64, max_height: f64) -> Self {
        self.min_height = min_height;
        self.max_height = max_height;
        self
    }

    /// Sets the sideways noise fraction.
    #[must_use]
    pub fn with_sideways_noise(mut self, amount: f64) -> Self {
        self.sideways_noise_amount = amount;
        self
    }

    /// Sets the lateral octave weights.
    #[must_use]
    pub fn with_octave_weights(mut self, weights: [f64; LATERAL_OCTAVES]) -> Self {
        self.octave_weights = weights;
        self
    }

    /// Every field as one array: the six scalars in declaration order, then
    /// the octave weights.
    #[must_use]
    pub fn values(&self) -> [f64; 6 + LATERAL_OCTAVES] {
        let mut values = [0.0; 6 + LATERAL_OCTAVES];
        values[..6].copy_from_slice(&[
            self.avg_height,
            self.variation_above,
            self.variation_below,
            self.min_height,
            self.max_height,
            self.sideways_noise_amount,
        ]);
        values[6..].copy_from_slice(&self.octave_weights);
        values
    }

    /// Adds `weight * other` to every field, octave weights included.
    pub fn add_weighted(&mut self, weight: f64, other: &Self) {
        self.avg_height += weight * other.avg_height;
        self.variation_above += weight * other.variation_above;
        self.variation_below += weight * other.variation_below;
        self.min_height += weight * other.min_height;
        self.max_height += weight * other.max_height;
        self.sideways_noise_amount += weight * other.sideways_noise_amount;
        for (own, theirs) in self.octave_weights.iter_mut().zip(&other.octave_weights) {
            *own += weight * theirs;
        }
    }

    /// Checks that the parameters describe a usable terrain shape.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.values().iter().any(|value| !value.is_finite()) {
            return Err("Terrain parameters must be finite");
        }
        if self.min_height > self.max_height {
            return Err("Minimum height must not exceed maximum height");
        }
        if self.variation_above < 0.0 || self.variation_below < 0.0 {
            return Err("Height variation must not be negative");
        }
        if !(0.0..=1.0).contains(&self.sideways_noise_amount) {
            return Err("Sideways noise amount must be in range 0..1");
        }
        Ok(())
    }
}
