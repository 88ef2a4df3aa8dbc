//! Expansion of the coarse density lattice into a full voxel column.
//!
//! The chunk is split into 4×32×4 cells of 4×8×4 voxels. Inside a cell the
//! eight corner densities are interpolated along y first, then x, then z,
//! stepping by 1/8 and 1/4. Cells whose corners all agree in sign skip the
//! interpolation.

// Uses cell and corner names (cell_x, c000, c001, ...)
#![allow(clippy::similar_names, clippy::many_single_char_names)]

use crate::{
    chunk::column::{CHUNK_HEIGHT, Voxel, VoxelColumn},
    terrain::density::{DensityLattice, HORIZONTAL_STEP, LATTICE_HEIGHT, VERTICAL_STEP},
};

/// Water fills every non-solid voxel below this height.
pub const SEA_LEVEL: usize = 63;

const CELL_WIDTH: usize = HORIZONTAL_STEP as usize;
const CELL_HEIGHT: usize = VERTICAL_STEP as usize;
const CELLS_XZ: usize = 4;
const CELLS_Y: usize = LATTICE_HEIGHT - 1;
const Y_STEP: f64 = 1.0 / CELL_HEIGHT as f64;
const XZ_STEP: f64 = 1.0 / CELL_WIDTH as f64;

/// Cell homogeneity, checked before interpolating.
#[derive(Clone, Copy, PartialEq, Eq)]
enum CellState {
    /// All 8 corners are positive (solid).
    AllSolid,
    /// All 8 corners are zero or negative.
    AllEmpty,
    /// Mixed corners, needs per-voxel interpolation.
    Mixed,
}

impl CellState {
    fn of(corners: &[f64; 8]) -> Self {
        if corners.iter().all(|&c| c > 0.0) {
            Self::AllSolid
        } else if corners.iter().all(|&c| c <= 0.0) {
            Self::AllEmpty
        } else {
            Self::Mixed
        }
    }
}

/// Turns density lattices into voxel columns.
#[derive(Debug, Clone, Copy)]
pub struct VoxelExpander {
    sea_level: usize,
}

impl Default for VoxelExpander {
    fn default() -> Self {
        Self::new(SEA_LEVEL)
    }
}

impl VoxelExpander {
    /// Creates an expander with water below `sea_level`.
    #[must_use]
    pub fn new(sea_level: usize) -> Self {
        Self { sea_level }
    }

    /// The configured sea level.
    #[must_use]
    pub fn sea_level(&self) -> usize {
        self.sea_level
    }

    /// Chooses the voxel for a density at height `y`, ignoring the floor.
    #[inline]
    #[must_use]
    pub fn classify(&self, density: f64, y: usize) -> Voxel {
        if density > 0.0 {
            Voxel::Stone
        } else if y < self.sea_level {
            Voxel::Water
        } else {
            Voxel::Air
        }
    }

    /// Interpolates and thresholds `lattice` into a fresh column.
    ///
    /// The bottom layer is bedrock whatever the density says.
    #[must_use]
    pub fn expand(&self, lattice: &DensityLattice) -> VoxelColumn {
        let mut column = VoxelColumn::new();

        for cell_x in 0..CELLS_XZ {
            for cell_z in 0..CELLS_XZ {
                for cell_y in 0..CELLS_Y {
                    let corners = [
                        lattice.get(cell_x, cell_y, cell_z),
                        lattice.get(cell_x, cell_y, cell_z + 1),
                        lattice.get(cell_x + 1, cell_y, cell_z),
                        lattice.get(cell_x + 1, cell_y, cell_z + 1),
                        lattice.get(cell_x, cell_y + 1, cell_z),
                        lattice.get(cell_x, cell_y + 1, cell_z + 1),
                        lattice.get(cell_x + 1, cell_y + 1, cell_z),
                        lattice.get(cell_x + 1, cell_y + 1, cell_z + 1),
                    ];

                    match CellState::of(&corners) {
                        CellState::Mixed => {
                            self.fill_mixed_cell(&mut column, cell_x, cell_y, cell_z, &corners);
                        }
                        state => {
                            let density = if state == CellState::AllSolid { 1.0 } else { 0.0 };
                            self.fill_uniform_cell(&mut column, cell_x, cell_y, cell_z, density);
                        }
                    }
                }
            }
        }

        for x in 0..CELLS_XZ * CELL_WIDTH {
            for z in 0..CELLS_XZ * CELL_WIDTH {
                column.set(x, 0, z, Voxel::Bedrock);
            }
        }

        column
    }

    fn fill_uniform_cell(
        &self,
        column: &mut VoxelColumn,
        cell_x: usize,
        cell_y: usize,
        cell_z: usize,
        density: f64,
    ) {
        for dx in 0..CELL_WIDTH {
            for dz in 0..CELL_WIDTH {
                let line = column.line_mut(cell_x * CELL_WIDTH + dx, cell_z * CELL_WIDTH + dz);
                for dy in 0..CELL_HEIGHT {
                    let y = cell_y * CELL_HEIGHT + dy;
                    line[y] = self.classify(density, y);
                }
            }
        }
    }

    fn fill_mixed_cell(
        &self,
        column: &mut VoxelColumn,
        cell_x: usize,
        cell_y: usize,
        cell_z: usize,
        corners: &[f64; 8],
    ) {
        let [mut d00, mut d01, mut d10, mut d11, u00, u01, u10, u11] = *corners;
        let step00 = (u00 - d00) * Y_STEP;
        let step01 = (u01 - d01) * Y_STEP;
        let step10 = (u10 - d10) * Y_STEP;
        let step11 = (u11 - d11) * Y_STEP;

        for dy in 0..CELL_HEIGHT {
            let y = cell_y * CELL_HEIGHT + dy;
            debug_assert!(y < CHUNK_HEIGHT);

            let mut near = d00;
            let mut far = d01;
            let near_step = (d10 - d00) * XZ_STEP;
            let far_step = (d11 - d01) * XZ_STEP;

            for dx in 0..CELL_WIDTH {
                let x = cell_x * CELL_WIDTH + dx;
                let mut density = near;
                let z_step = (far - near) * XZ_STEP;

                for dz in 0..CELL_WIDTH {
                    let z = cell_z * CELL_WIDTH + dz;
                    column.set(x, y, z, self.classify(density, y));
                    density += z_step;
                }

                near += near_step;
                far += far_step;
            }

            d00 += step00;
            d01 += step01;
            d10 += step10;
            d11 += step11;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::column::CHUNK_WIDTH;

    /// A lattice with a flat surface at `height` blocks.
    fn flat(height: f64) -> DensityLattice {
        DensityLattice::from_fn(|_, iy, _| height - (iy as i32 * VERTICAL_STEP) as f64)
    }

    #[test]
    fn test_flat_surface() {
        let column = VoxelExpander::default().expand(&flat(80.5));

        for x in 0..CHUNK_WIDTH {
            for z in 0..CHUNK_WIDTH {
                assert_eq!(column.get(x, 0, z), Voxel::Bedrock);
                assert_eq!(column.get(x, 1, z), Voxel::Stone);
                assert_eq!(column.get(x, 80, z), Voxel::Stone);
                assert_eq!(column.get(x, 81, z), Voxel::Air);
                assert_eq!(column.surface_height(x, z), Some(80));
            }
        }
    }

    #[test]
    fn test_water_below_sea_level() {
        let column = VoxelExpander::default().expand(&flat(40.5));

        assert_eq!(column.get(5, 40, 5), Voxel::Stone);
        assert_eq!(column.get(5, 41, 5), Voxel::Water);
        assert_eq!(column.get(5, 62, 5), Voxel::Water);
        assert_eq!(column.get(5, 63, 5), Voxel::Air);
        assert_eq!(column.count(Voxel::Water), 22 * 256);
    }

    #[test]
    fn test_floor_is_bedrock_even_in_air() {
        let lattice = DensityLattice::from_fn(|_, _, _| -5.0);
        let expander = VoxelExpander::new(0);
        let column = expander.expand(&lattice);

        assert_eq!(column.count(Voxel::Bedrock), 256);
        assert_eq!(column.count(Voxel::Air), 256 * 255);
    }

    #[test]
    fn test_corners_are_reproduced() {
        // Sign pattern that changes at every lattice point.
        let lattice = DensityLattice::from_fn(|ix, iy, iz| {
            if (ix + iy + iz) % 2 == 0 { 3.0 } else { -3.0 }
        });
        let column = VoxelExpander::new(0).expand(&lattice);

        for ix in 0..4 {
            for iz in 0..4 {
                for iy in 1..32 {
                    let expected = if (ix + iy + iz) % 2 == 0 {
                        Voxel::Stone
                    } else {
                        Voxel::Air
                    };
                    assert_eq!(column.get(ix * 4, iy * 8, iz * 4), expected);
                }
            }
        }
    }

    #[test]
    fn test_interpolation_is_monotonic_between_corners() {
        // Density falls from +1 at x = 0 to -1 at x = 16, so solid stops mid-chunk.
        let lattice = DensityLattice::from_fn(|ix, _, _| 1.0 - ix as f64 * 0.5);
        let column = VoxelExpander::new(0).expand(&lattice);

        for y in 1..CHUNK_HEIGHT {
            for x in 0..CHUNK_WIDTH {
                let expected = if x < 8 { Voxel::Stone } else { Voxel::Air };
                assert_eq!(column.get(x, y, 3), expected, "at x = {x}, y = {y}");
            }
        }
    }

    #[test]
    fn test_classify() {
        let expander = VoxelExpander::default();
        assert_eq!(expander.classify(0.1, 200), Voxel::Stone);
        assert_eq!(expander.classify(0.0, 62), Voxel::Water);
        assert_eq!(expander.classify(-1.0, 63), Voxel::Air);
    }
}
