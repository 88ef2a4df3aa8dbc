//! The full-resolution voxel buffer of one chunk.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Width of a chunk on both horizontal axes.
pub const CHUNK_WIDTH: usize = 16;
/// Height of a chunk.
pub const CHUNK_HEIGHT: usize = 256;
/// Voxels in one chunk.
pub const CHUNK_VOLUME: usize = CHUNK_WIDTH * CHUNK_HEIGHT * CHUNK_WIDTH;

/// What fills a voxel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Voxel {
    /// Empty space.
    #[default]
    Air = 0,
    /// Solid terrain.
    Stone = 1,
    /// Liquid below sea level.
    Water = 2,
    /// Indestructible floor.
    Bedrock = 3,
}

impl Voxel {
    /// Whether the voxel is solid ground.
    #[must_use]
    pub fn is_solid(self) -> bool {
        matches!(self, Self::Stone | Self::Bedrock)
    }
}

/// A 16×256×16 voxel buffer, stored `(x * 16 + z) * 256 + y`.
///
/// Each vertical line of 256 voxels is contiguous.
#[derive(Clone, PartialEq, Eq)]
pub struct VoxelColumn {
    voxels: Box<[Voxel]>,
}

impl Default for VoxelColumn {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VoxelColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoxelColumn")
            .field("digest", &self.digest())
            .finish()
    }
}

impl VoxelColumn {
    /// A column of air.
    #[must_use]
    pub fn new() -> Self {
        Self {
            voxels: vec![Voxel::Air; CHUNK_VOLUME].into_boxed_slice(),
        }
    }

    /// Flat index of a voxel.
    #[inline]
    #[must_use]
    pub const fn index(x: usize, y: usize, z: usize) -> usize {
        (x * CHUNK_WIDTH + z) * CHUNK_HEIGHT + y
    }

    /// The voxel at a local position.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Voxel {
        self.voxels[Self::index(x, y, z)]
    }

    /// Replaces the voxel at a local position.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, voxel: Voxel) {
        self.voxels[Self::index(x, y, z)] = voxel;
    }

    /// The 256 voxels above `(x, z)`, bottom first.
    #[must_use]
    pub fn line(&self, x: usize, z: usize) -> &[Voxel] {
        let start = Self::index(x, 0, z);
        &self.voxels[start..start + CHUNK_HEIGHT]
    }

    /// Mutable access to the voxels above `(x, z)`.
    pub fn line_mut(&mut self, x: usize, z: usize) -> &mut [Voxel] {
        let start = Self::index(x, 0, z);
        &mut self.voxels[start..start + CHUNK_HEIGHT]
    }

    /// Highest solid voxel above `(x, z)`.
    #[must_use]
    pub fn surface_height(&self, x: usize, z: usize) -> Option<usize> {
        self.line(x, z).iter().rposition(|voxel| voxel.is_solid())
    }

    /// How many voxels of the given kind the column holds.
    #[must_use]
    pub fn count(&self, voxel: Voxel) -> usize {
        self.voxels.iter().filter(|&&v| v == voxel).count()
    }

    /// All voxels in storage order.
    #[must_use]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// The buffer as one byte per voxel.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.voxels.iter().map(|&voxel| voxel as u8).collect()
    }

    /// Hex md5 of [`Self::to_bytes`], for comparing generated columns.
    #[must_use]
    pub fn digest(&self) -> String {
        format!("{:x}", md5::compute(self.to_bytes()))
    }
}
