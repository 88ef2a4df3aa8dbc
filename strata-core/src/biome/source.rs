//! Biome grid providers.
//!
//! The terrain generator does not place biomes itself. It asks a
//! [`BiomeSource`] for the biomes around a chunk at two resolutions.

use crate::{biome::BiomeId, error::BiomeQueryError};

/// Blocks per cell of the generation grid.
pub const GENERATION_CELL: i32 = 4;

/// Supplies biome ids for rectangular areas of the world.
///
/// Both queries return `width * depth` ids, x-fastest: `index = x + z * width`.
pub trait BiomeSource: Send + Sync {
    /// Biomes on the coarse generation grid, one cell per 4×4 blocks.
    fn generation_biomes(
        &self,
        x: i32,
        z: i32,
        width: usize,
        depth: usize,
    ) -> Result<Vec<BiomeId>, BiomeQueryError>;

    /// Biomes per block.
    fn block_biomes(
        &self,
        x: i32,
        z: i32,
        width: usize,
        depth: usize,
    ) -> Result<Vec<BiomeId>, BiomeQueryError>;
}

/// Fills a `width * depth` grid by evaluating `biome_at` per block coordinate.
fn fill_grid(
    x: i32,
    z: i32,
    width: usize,
    depth: usize,
    scale: i32,
    biome_at: impl Fn(i32, i32) -> BiomeId,
) -> Vec<BiomeId> {
    let mut grid = Vec::with_capacity(width * depth);
    for dz in 0..depth as i32 {
        for dx in 0..width as i32 {
            grid.push(biome_at(
                x.wrapping_add(dx).wrapping_mul(scale),
                z.wrapping_add(dz).wrapping_mul(scale),
            ));
        }
    }
    grid
}

/// The same biome everywhere.
#[derive(Debug, Clone, Copy)]
pub struct UniformBiomeSource {
    biome: BiomeId,
}

impl UniformBiomeSource {
    /// Creates a source that only ever returns `biome`.
    #[must_use]
    pub fn new(biome: BiomeId) -> Self {
        Self { biome }
    }
}

impl BiomeSource for UniformBiomeSource {
    fn generation_biomes(
        &self,
        _x: i32,
        _z: i32,
        width: usize,
        depth: usize,
    ) -> Result<Vec<BiomeId>, BiomeQueryError> {
        Ok(vec![self.biome; width * depth])
    }

    fn block_biomes(
        &self,
        _x: i32,
        _z: i32,
        width: usize,
        depth: usize,
    ) -> Result<Vec<BiomeId>, BiomeQueryError> {
        Ok(vec![self.biome; width * depth])
    }
}

/// Two biomes split by a north-south line at `boundary_x`.
#[derive(Debug, Clone, Copy)]
pub struct BandedBiomeSource {
    west: BiomeId,
    east: BiomeId,
    boundary_x: i32,
}

impl BandedBiomeSource {
    /// Blocks with `x < boundary_x` are `west`, the rest `east`.
    #[must_use]
    pub fn new(west: BiomeId, east: BiomeId, boundary_x: i32) -> Self {
        Self {
            west,
            east,
            boundary_x,
        }
    }

    fn biome_at(&self, x: i32) -> BiomeId {
        if x < self.boundary_x {
            self.west
        } else {
            self.east
        }
    }
}

impl BiomeSource for BandedBiomeSource {
    fn generation_biomes(
        &self,
        x: i32,
        z: i32,
        width: usize,
        depth: usize,
    ) -> Result<Vec<BiomeId>, BiomeQueryError> {
        Ok(fill_grid(x, z, width, depth, GENERATION_CELL, |x, _| {
            self.biome_at(x)
        }))
    }

    fn block_biomes(
        &self,
        x: i32,
        z: i32,
        width: usize,
        depth: usize,
    ) -> Result<Vec<BiomeId>, BiomeQueryError> {
        Ok(fill_grid(x, z, width, depth, 1, |x, _| self.biome_at(x)))
    }
}

/// Repeating stripes of biomes along the x axis.
#[derive(Debug, Clone)]
pub struct StripedBiomeSource {
    biomes: Vec<BiomeId>,
    stripe_width: i32,
}

impl StripedBiomeSource {
    /// Creates stripes `stripe_width` blocks wide cycling through `biomes`.
    pub fn new(biomes: Vec<BiomeId>, stripe_width: i32) -> Result<Self, BiomeQueryError> {
        if biomes.is_empty() || stripe_width <= 0 {
            return Err(BiomeQueryError {
                x: 0,
                z: 0,
                reason: "stripes need at least one biome and a positive width".to_string(),
            });
        }
        Ok(Self {
            biomes,
            stripe_width,
        })
    }

    fn biome_at(&self, x: i32) -> BiomeId {
        let stripe = x.div_euclid(self.stripe_width);
        self.biomes[stripe.rem_euclid(self.biomes.len() as i32) as usize]
    }
}

impl BiomeSource for StripedBiomeSource {
    fn generation_biomes(
        &self,
        x: i32,
        z: i32,
        width: usize,
        depth: usize,
    ) -> Result<Vec<BiomeId>, BiomeQueryError> {
        Ok(fill_grid(x, z, width, depth, GENERATION_CELL, |x, _| {
            self.biome_at(x)
        }))
    }

    fn block_biomes(
        &self,
        x: i32,
        z: i32,
        width: usize,
        depth: usize,
    ) -> Result<Vec<BiomeId>, BiomeQueryError> {
        Ok(fill_grid(x, z, width, depth, 1, |x, _| self.biome_at(x)))
    }
}
