//! # Strata Core
//!
//! Biome-blended terrain generation: biome records and parameter tables,
//! world settings, the coarse density lattice and its expansion into a full
//! voxel column.
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    clippy::unwrap_used
)]
#![allow(clippy::unreadable_literal)]

pub mod biome;
pub mod chunk;
pub mod config;
pub mod error;
pub mod terrain;

pub use chunk::column_generator::{ColumnGenerator, GeneratedColumn};
pub use config::WorldGenSettings;
pub use error::TerrainError;
