//! Coherent noise generators used by the terrain pipeline.
//!
//! All generators are seeded once from a [`crate::random::Random`] source and
//! are read-only afterwards.

mod improved_noise;
mod lateral_noise;
mod math;
mod octave_noise;
mod permutation;
mod simplex_noise;
mod surface_noise;

pub use improved_noise::ImprovedNoise;
pub use lateral_noise::{
    LATERAL_COLUMNS, LATERAL_GRID, LATERAL_OCTAVES, LateralNoise, LateralSample,
};
pub use math::{clamped_lerp, floor, lerp, lerp2, lerp3, lfloor, smoothstep};
pub use octave_noise::{OctaveNoise, wrap_lateral};
pub use simplex_noise::SimplexNoise;
pub use surface_noise::SurfaceNoise;
