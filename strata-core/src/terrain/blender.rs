//! Weighted blending of biome terrain parameters over a 5×5 neighborhood.

use std::{fmt, sync::Arc, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::{
    biome::{BiomeId, BiomeTable},
    error::TerrainError,
    terrain::parameters::TerrainParameters,
};

/// Width of the biome neighborhood queried per chunk.
pub const NEIGHBORHOOD_WIDTH: usize = 10;
/// Number of ids in one neighborhood.
pub const NEIGHBORHOOD_SIZE: usize = NEIGHBORHOOD_WIDTH * NEIGHBORHOOD_WIDTH;
/// Radius of the blend window around each column.
pub const BLEND_RADIUS: i32 = 2;
const WINDOW: usize = 5;

/// Which falloff kernel the blender weighs neighbors with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelKind {
    /// `1 / sqrt(d² + 0.2)`.
    #[default]
    Radial,
    /// `1 / (d² + 0.2)`, giving the center more weight.
    RadialStrong,
}

impl KernelKind {
    /// The normalized kernel for this kind.
    #[must_use]
    pub fn kernel(self) -> &'static FalloffKernel {
        match self {
            Self::Radial => &RADIAL_FALLOFF,
            Self::RadialStrong => &RADIAL_STRONG_FALLOFF,
        }
    }
}

/// A 5×5 weight table summing to one, indexed `i + 2 + (j + 2) * 5`.
#[derive(Debug, Clone, PartialEq)]
pub struct FalloffKernel {
    weights: [f64; WINDOW * WINDOW],
}

impl FalloffKernel {
    fn normalized(falloff: impl Fn(f64) -> f64) -> Self {
        let mut weights = [0.0; WINDOW * WINDOW];
        for j in -BLEND_RADIUS..=BLEND_RADIUS {
            for i in -BLEND_RADIUS..=BLEND_RADIUS {
                let distance_sq = f64::from(i * i + j * j);
                weights[Self::index(i, j)] = falloff(distance_sq + 0.2);
            }
        }
        let total: f64 = weights.iter().sum();
        for weight in &mut weights {
            *weight /= total;
        }
        Self { weights }
    }

    #[inline]
    fn index(i: i32, j: i32) -> usize {
        (i + BLEND_RADIUS) as usize + (j + BLEND_RADIUS) as usize * WINDOW
    }

    /// Weight for the neighbor at offset `(i, j)`, both in `-2..=2`.
    #[must_use]
    pub fn weight(&self, i: i32, j: i32) -> f64 {
        self.weights[Self::index(i, j)]
    }

    /// All 25 weights.
    #[must_use]
    pub fn weights(&self) -> &[f64; WINDOW * WINDOW] {
        &self.weights
    }
}

/// Gentle falloff used for terrain blending.
pub static RADIAL_FALLOFF: LazyLock<FalloffKernel> =
    LazyLock::new(|| FalloffKernel::normalized(|d| 1.0 / d.sqrt()));

/// Steeper falloff favoring the center biome.
pub static RADIAL_STRONG_FALLOFF: LazyLock<FalloffKernel> =
    LazyLock::new(|| FalloffKernel::normalized(|d| 1.0 / d));

/// What a blend override gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct BlendContext<'a> {
    /// Lattice column, `0..5`.
    pub column_x: usize,
    /// Lattice column, `0..5`.
    pub column_z: usize,
    /// Biome at the center of the window.
    pub center: BiomeId,
    /// The full 10×10 neighborhood, x-fastest.
    pub neighborhood: &'a [BiomeId],
}

/// Hook that may replace the blended parameters of a column.
pub type BlendOverride = Arc<dyn Fn(&BlendContext<'_>) -> Option<TerrainParameters> + Send + Sync>;

/// Blends biome parameters around each lattice column.
#[derive(Clone)]
pub struct BiomeBlender {
    table: BiomeTable,
    kernel: &'static FalloffKernel,
    override_fn: Option<BlendOverride>,
}

impl fmt::Debug for BiomeBlender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiomeBlender")
            .field("biomes", &self.table.len())
            .field("kernel", &self.kernel)
            .field("override", &self.override_fn.is_some())
            .finish()
    }
}

impl BiomeBlender {
    /// Creates a blender over `table` using the given kernel.
    #[must_use]
    pub fn new(table: BiomeTable, kernel: KernelKind) -> Self {
        Self {
            table,
            kernel: kernel.kernel(),
            override_fn: None,
        }
    }

    /// Installs a hook consulted before blending. Returning `Some` replaces
    /// the result for that column.
    #[must_use]
    pub fn with_override(mut self, override_fn: BlendOverride) -> Self {
        self.override_fn = Some(override_fn);
        self
    }

    /// The biome table this blender reads.
    #[must_use]
    pub fn table(&self) -> &BiomeTable {
        &self.table
    }

    /// Blended parameters for lattice column `(column_x, column_z)`.
    ///
    /// `neighborhood` is the 10×10 generation grid around the chunk, offset
    /// by two cells, so the column's own biome sits at
    /// `(column_x + 2) + (column_z + 2) * 10`.
    pub fn blend(
        &self,
        column_x: usize,
        column_z: usize,
        neighborhood: &[BiomeId],
    ) -> Result<TerrainParameters, TerrainError> {
        if neighborhood.len() != NEIGHBORHOOD_SIZE {
            return Err(TerrainError::MalformedBiomeGrid {
                expected: NEIGHBORHOOD_SIZE,
                actual: neighborhood.len(),
            });
        }

        let offset = BLEND_RADIUS as usize;
        let center = neighborhood[column_x + offset + (column_z + offset) * NEIGHBORHOOD_WIDTH];

        if let Some(override_fn) = &self.override_fn {
            let context = BlendContext {
                column_x,
                column_z,
                center,
                neighborhood,
            };
            if let Some(parameters) = override_fn(&context) {
                return Ok(parameters);
            }
        }

        let center_entry = self.table.get(center)?;
        if center_entry.neighbor_independent {
            return Ok(center_entry.parameters);
        }

        let mut blended = TerrainParameters::ZERO;
        for i in -BLEND_RADIUS..=BLEND_RADIUS {
            for j in -BLEND_RADIUS..=BLEND_RADIUS {
                let x = (column_x as i32 + i + BLEND_RADIUS) as usize;
                let z = (column_z as i32 + j + BLEND_RADIUS) as usize;
                let neighbor = self.table.get(neighborhood[x + z * NEIGHBORHOOD_WIDTH])?;
                blended.add_weighted(self.kernel.weight(i, j), &neighbor.parameters);
            }
        }

        Ok(blended)
    }
}
