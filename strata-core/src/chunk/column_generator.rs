//! Drives the terrain pipeline for one chunk at a time.
//!
//! A [`ColumnGenerator`] owns every seeded noise field. After construction
//! it is read-only, so a single generator can be shared between threads and
//! asked for any chunk in any order.

use std::{fmt, sync::Arc};

use strata_utils::{
    noise::{LateralNoise, OctaveNoise, SurfaceNoise},
    random::LegacyRandom,
};

use crate::{
    biome::{BiomeId, BiomeSource, BiomeTable},
    chunk::{
        column::{CHUNK_WIDTH, VoxelColumn},
        random_config::WorldRandomConfig,
    },
    config::WorldGenSettings,
    error::TerrainError,
    terrain::{
        blender::{BiomeBlender, BlendOverride},
        density::{DensityFieldBuilder, DensityNoises},
        expander::VoxelExpander,
    },
};

const LIMIT_OCTAVES: usize = 16;
const BALANCE_OCTAVES: usize = 8;
const SURFACE_OCTAVES: usize = 4;
const SURFACE_NOISE_SCALE: f64 = 0.0625;
const BLOCK_BIOMES: usize = CHUNK_WIDTH * CHUNK_WIDTH;

/// Everything a [`SurfaceDecorator`] may read or change for one chunk.
pub struct SurfaceContext<'a> {
    /// Chunk x coordinate.
    pub chunk_x: i32,
    /// Chunk z coordinate.
    pub chunk_z: i32,
    /// The expanded voxels, to be modified in place.
    pub voxels: &'a mut VoxelColumn,
    /// Block biomes, `index = x + z * 16`.
    pub biomes: &'a [BiomeId],
    /// Surface depth noise, `index = x * 16 + z`.
    pub surface_noise: &'a [f64],
    /// The chunk random, already seeded for this chunk.
    pub random: &'a mut LegacyRandom,
}

/// Replaces the top layers of a freshly expanded column, per biome.
pub trait SurfaceDecorator: Send + Sync {
    /// Decorates the column in `context`.
    fn decorate(&self, context: &mut SurfaceContext<'_>);
}

/// A finished chunk: voxels plus the biome of every block column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedColumn {
    /// The voxel buffer.
    pub voxels: VoxelColumn,
    /// 256 block biomes, `index = x + z * 16`.
    pub biomes: Vec<BiomeId>,
}

impl GeneratedColumn {
    /// The biome of block column `(x, z)`.
    #[must_use]
    pub fn biome_at(&self, x: usize, z: usize) -> BiomeId {
        self.biomes[x + z * CHUNK_WIDTH]
    }
}

/// Generates voxel columns for a seeded world.
pub struct ColumnGenerator {
    seed: u64,
    random_config: WorldRandomConfig,
    density: DensityFieldBuilder,
    expander: VoxelExpander,
    surface_noise: SurfaceNoise,
    biomes: Arc<dyn BiomeSource>,
    decorator: Option<Arc<dyn SurfaceDecorator>>,
}

impl fmt::Debug for ColumnGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnGenerator")
            .field("seed", &self.seed)
            .field("blender", self.density.blender())
            .field("sea_level", &self.expander.sea_level())
            .field("decorator", &self.decorator.is_some())
            .finish_non_exhaustive()
    }
}

impl ColumnGenerator {
    /// Creates a generator for `seed`.
    ///
    /// All noise fields are drawn from one random seeded with `seed`, in a
    /// fixed order, so the same seed always yields the same world.
    #[must_use]
    pub fn new(seed: u64, settings: &WorldGenSettings, biomes: Arc<dyn BiomeSource>) -> Self {
        let mut random = LegacyRandom::from_seed(seed);
        let noise_a = OctaveNoise::new(&mut random, LIMIT_OCTAVES);
        let noise_b = OctaveNoise::new(&mut random, LIMIT_OCTAVES);
        let balance = OctaveNoise::new(&mut random, BALANCE_OCTAVES);
        let surface_noise = SurfaceNoise::new(&mut random, SURFACE_OCTAVES);
        let lateral = LateralNoise::new(&mut random);

        let noises = DensityNoises {
            noise_a,
            noise_b,
            balance,
            lateral,
        };
        let table = BiomeTable::legacy(&settings.custom_biomes);
        let blender = BiomeBlender::new(table, settings.blend_kernel);

        log::info!("Terrain generator for seed {seed} using settings {}", settings.to_json());

        Self {
            seed,
            random_config: WorldRandomConfig::new(seed),
            density: DensityFieldBuilder::new(noises, blender, settings.amplitude),
            expander: VoxelExpander::default(),
            surface_noise,
            biomes,
            decorator: None,
        }
    }

    /// Installs a hook that may replace blended parameters per lattice column.
    #[must_use]
    pub fn with_blend_override(mut self, override_fn: BlendOverride) -> Self {
        self.density = self.density.with_blend_override(override_fn);
        self
    }

    /// Installs a surface decorator, run on every column after expansion.
    #[must_use]
    pub fn with_decorator(mut self, decorator: Arc<dyn SurfaceDecorator>) -> Self {
        self.decorator = Some(decorator);
        self
    }

    /// The world seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Per-chunk random derivation for this world.
    #[must_use]
    pub fn random_config(&self) -> &WorldRandomConfig {
        &self.random_config
    }

    /// The density lattice builder.
    #[must_use]
    pub fn density(&self) -> &DensityFieldBuilder {
        &self.density
    }

    /// Generates the column at `(chunk_x, chunk_z)`.
    ///
    /// Fails only when the biome source fails or returns ids with no terrain
    /// parameters. Nothing partial is returned.
    pub fn generate_column(
        &self,
        chunk_x: i32,
        chunk_z: i32,
    ) -> Result<GeneratedColumn, TerrainError> {
        let mut random = self.random_config.chunk_random(chunk_x, chunk_z);

        let lattice = self.density.build(chunk_x, chunk_z, self.biomes.as_ref())?;
        let mut voxels = self.expander.expand(&lattice);

        let block_x = chunk_x.wrapping_mul(CHUNK_WIDTH as i32);
        let block_z = chunk_z.wrapping_mul(CHUNK_WIDTH as i32);
        let biomes = self
            .biomes
            .block_biomes(block_x, block_z, CHUNK_WIDTH, CHUNK_WIDTH)?;
        if biomes.len() != BLOCK_BIOMES {
            return Err(TerrainError::MalformedBiomeGrid {
                expected: BLOCK_BIOMES,
                actual: biomes.len(),
            });
        }

        if let Some(decorator) = &self.decorator {
            let surface_noise = self.surface_noise.sample(
                f64::from(block_x),
                f64::from(block_z),
                CHUNK_WIDTH,
                CHUNK_WIDTH,
                SURFACE_NOISE_SCALE,
                SURFACE_NOISE_SCALE,
            );
            decorator.decorate(&mut SurfaceContext {
                chunk_x,
                chunk_z,
                voxels: &mut voxels,
                biomes: &biomes,
                surface_noise: &surface_noise,
                random: &mut random,
            });
        }

        log::debug!("Generated column ({chunk_x}, {chunk_z})");
        Ok(GeneratedColumn { voxels, biomes })
    }
}
