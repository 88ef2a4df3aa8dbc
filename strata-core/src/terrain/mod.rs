//! The terrain shaping pipeline: parameters, blending, density and expansion.

pub mod blender;
pub mod density;
pub mod expander;
pub mod parameters;

pub use blender::{BiomeBlender, BlendContext, BlendOverride, KernelKind};
pub use density::{DensityFieldBuilder, DensityLattice, DensityNoises};
pub use expander::{SEA_LEVEL, VoxelExpander};
pub use parameters::TerrainParameters;
