//! World generation settings.
//!
//! Settings arrive as a JSON5 string. An empty string is accepted and yields
//! the defaults, so worlds created without settings still load.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use strata_utils::noise::LATERAL_OCTAVES;
use thiserror::Error;

use crate::terrain::{blender::KernelKind, parameters::TerrainParameters};

/// Errors produced while reading [`WorldGenSettings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings string is not valid JSON5 for this schema.
    #[error("failed to parse world generation settings: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The settings parsed but hold unusable values.
    #[error("invalid world generation settings: {0}")]
    Invalid(&'static str),
}

/// A partial terrain override for one biome.
///
/// Fields left out keep the biome's derived value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomBiomeTerrain {
    /// Overrides [`TerrainParameters::avg_height`].
    pub avg_height: Option<f64>,
    /// Overrides [`TerrainParameters::variation_above`].
    pub variation_above: Option<f64>,
    /// Overrides [`TerrainParameters::variation_below`].
    pub variation_below: Option<f64>,
    /// Overrides [`TerrainParameters::min_height`].
    pub min_height: Option<f64>,
    /// Overrides [`TerrainParameters::max_height`].
    pub max_height: Option<f64>,
    /// Overrides [`TerrainParameters::sideways_noise_amount`].
    pub sideways_noise_amount: Option<f64>,
    /// Overrides [`TerrainParameters::octave_weights`].
    pub octave_weights: Option<[f64; LATERAL_OCTAVES]>,
    /// Opts the biome in or out of neighbor blending.
    pub neighbor_independent: Option<bool>,
}

impl CustomBiomeTerrain {
    /// Applies the set fields on top of `base`.
    #[must_use]
    pub fn apply_to(&self, base: TerrainParameters) -> TerrainParameters {
        TerrainParameters {
            avg_height: self.avg_height.unwrap_or(base.avg_height),
            variation_above: self.variation_above.unwrap_or(base.variation_above),
            variation_below: self.variation_below.unwrap_or(base.variation_below),
            min_height: self.min_height.unwrap_or(base.min_height),
            max_height: self.max_height.unwrap_or(base.max_height),
            sideways_noise_amount: self
                .sideways_noise_amount
                .unwrap_or(base.sideways_noise_amount),
            octave_weights: self.octave_weights.unwrap_or(base.octave_weights),
        }
    }
}

/// Structure toggles. Carried for structure generators; terrain ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct StructureSettings {
    /// Generate villages.
    pub villages: bool,
    /// Generate strongholds.
    pub strongholds: bool,
    /// Generate mineshafts.
    pub mineshafts: bool,
    /// Generate temples and huts.
    pub temples: bool,
    /// Generate ocean monuments.
    pub monuments: bool,
}

impl Default for StructureSettings {
    fn default() -> Self {
        Self {
            villages: true,
            strongholds: true,
            mineshafts: true,
            temples: true,
            monuments: true,
        }
    }
}

/// Settings that shape a whole world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenSettings {
    /// Global multiplier on every biome's height variation.
    pub amplitude: f64,
    /// Structure toggles.
    pub structures: StructureSettings,
    /// Neighborhood kernel used to blend biome parameters.
    pub blend_kernel: KernelKind,
    /// Terrain overrides keyed by biome name.
    pub custom_biomes: FxHashMap<String, CustomBiomeTerrain>,
}

impl Default for WorldGenSettings {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            structures: StructureSettings::default(),
            blend_kernel: KernelKind::Radial,
            custom_biomes: FxHashMap::default(),
        }
    }
}

impl WorldGenSettings {
    /// Parses and validates a settings string. Blank input yields the defaults.
    pub fn from_json5(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_json5::from_str(source)?;
        settings.validate().map_err(ConfigError::Invalid)?;
        Ok(settings)
    }

    /// Serializes the settings as compact JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        // A map with string keys and plain numbers cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Checks the global values. Per-biome overrides are checked when the
    /// biome table is built, where a bad entry only loses its override.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err("Amplitude must be a finite, non-negative number");
        }
        Ok(())
    }
}
