//! The driver configuration file.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Deserialize;
use strata_core::{
    WorldGenSettings,
    biome::{
        BiomeId, BiomeSource, by_name,
        source::{BandedBiomeSource, StripedBiomeSource, UniformBiomeSource},
    },
};
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/strata_config.json5");

/// Largest accepted radius, in chunks.
const MAX_RADIUS: u32 = 64;

/// Errors raised while loading the driver configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading or writing the file failed.
    #[error("failed to access {path}: {source}")]
    Io {
        /// The config file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The file is not valid JSON5 for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
    /// A biome layout names a biome that does not exist.
    #[error("unknown biome {0:?}")]
    UnknownBiome(String),
}

/// How the driver assigns biomes to the world.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BiomeLayout {
    /// One biome everywhere.
    Uniform {
        /// Biome name.
        biome: String,
    },
    /// Two biomes split at `boundary_x`.
    Banded {
        /// Biome for `x < boundary_x`.
        west: String,
        /// Biome for `x >= boundary_x`.
        east: String,
        /// Block x of the split.
        boundary_x: i32,
    },
    /// Stripes along x cycling through `biomes`.
    Striped {
        /// Biome names, in stripe order.
        biomes: Vec<String>,
        /// Stripe width in blocks.
        width: i32,
    },
}

fn biome_id(name: &str) -> Result<BiomeId, LoadError> {
    by_name(name)
        .map(|definition| definition.id)
        .ok_or_else(|| LoadError::UnknownBiome(name.to_string()))
}

impl BiomeLayout {
    /// Builds the biome source this layout describes.
    pub fn to_source(&self) -> Result<Arc<dyn BiomeSource>, LoadError> {
        Ok(match self {
            Self::Uniform { biome } => Arc::new(UniformBiomeSource::new(biome_id(biome)?)),
            Self::Banded {
                west,
                east,
                boundary_x,
            } => Arc::new(BandedBiomeSource::new(
                biome_id(west)?,
                biome_id(east)?,
                *boundary_x,
            )),
            Self::Striped { biomes, width } => {
                let ids = biomes
                    .iter()
                    .map(|name| biome_id(name))
                    .collect::<Result<Vec<_>, _>>()?;
                let source = StripedBiomeSource::new(ids, *width)
                    .map_err(|_| LoadError::Invalid("Stripes need a biome and a positive width"))?;
                Arc::new(source)
            }
        })
    }
}

/// Settings for one driver run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrataConfig {
    /// World seed as typed by the user.
    pub seed: String,
    /// Chunks generated in each direction around the center.
    pub radius: u32,
    /// Center chunk x.
    pub center_x: i32,
    /// Center chunk z.
    pub center_z: i32,
    /// Biome assignment.
    pub biome_layout: BiomeLayout,
    /// Terrain settings handed to the generator.
    pub generation: WorldGenSettings,
}

impl Default for StrataConfig {
    fn default() -> Self {
        Self {
            seed: String::new(),
            radius: 4,
            center_x: 0,
            center_z: 0,
            biome_layout: BiomeLayout::Uniform {
                biome: "plains".to_string(),
            },
            generation: WorldGenSettings::default(),
        }
    }
}

impl StrataConfig {
    /// Reads the config at `path`, writing the default file first if it is missing.
    pub fn load_or_create(path: &Path) -> Result<Self, LoadError> {
        let io_error = |source: io::Error| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(io_error)?;
            }
            fs::write(path, DEFAULT_CONFIG).map_err(io_error)?;
            log::info!("Wrote default config to {}", path.display());
        }

        let source = fs::read_to_string(path).map_err(io_error)?;
        Self::parse(&source)
    }

    /// Parses and validates a config string.
    pub fn parse(source: &str) -> Result<Self, LoadError> {
        let config: Self = serde_json5::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks ranges and that every named biome exists.
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.radius > MAX_RADIUS {
            return Err(LoadError::Invalid("Radius must be at most 64 chunks"));
        }
        let radius = self.radius as i32;
        for center in [self.center_x, self.center_z] {
            if center.checked_sub(radius).is_none() || center.checked_add(radius).is_none() {
                return Err(LoadError::Invalid("Center is too close to the coordinate limit"));
            }
        }
        self.generation.validate().map_err(LoadError::Invalid)?;
        self.biome_layout.to_source()?;
        Ok(())
    }

    /// The numeric world seed.
    #[must_use]
    pub fn world_seed(&self) -> u64 {
        parse_seed(&self.seed)
    }

    /// Every chunk in the square around the center, x-major.
    #[must_use]
    pub fn chunk_positions(&self) -> Vec<(i32, i32)> {
        let radius = self.radius as i32;
        let xs = self.center_x.saturating_sub(radius)..=self.center_x.saturating_add(radius);
        let zs = self.center_z.saturating_sub(radius)..=self.center_z.saturating_add(radius);
        xs.flat_map(|x| zs.clone().map(move |z| (x, z))).collect()
    }
}

/// Turns user seed text into a world seed.
///
/// Integers are taken as-is, other text is hashed the way legacy worlds hash
/// seed strings, and blank text gives 0.
#[must_use]
pub fn parse_seed(seed: &str) -> u64 {
    let seed = seed.trim();
    if seed.is_empty() {
        return 0;
    }
    match seed.parse::<i64>() {
        Ok(value) => value as u64,
        Err(_) => i64::from(string_hash(seed)) as u64,
    }
}

/// 31-based polynomial hash over UTF-16 code units.
fn string_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0_i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
