//! Errors raised while generating a column.

use thiserror::Error;

use crate::biome::BiomeId;

/// A failure reported by a [`crate::biome::source::BiomeSource`].
#[derive(Debug, Clone, Error)]
#[error("biome query at ({x}, {z}) failed: {reason}")]
pub struct BiomeQueryError {
    /// X coordinate of the rejected query.
    pub x: i32,
    /// Z coordinate of the rejected query.
    pub z: i32,
    /// Human readable cause.
    pub reason: String,
}

/// Invariant violations hit during terrain generation.
///
/// None of these are recovered from; a column is either produced whole or
/// not at all.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// The biome grid contains an id with no terrain parameters.
    #[error("unknown biome id {0}")]
    UnknownBiome(BiomeId),
    /// The biome source returned a grid of the wrong size.
    #[error("biome grid has {actual} entries, expected {expected}")]
    MalformedBiomeGrid {
        /// Number of entries requested.
        expected: usize,
        /// Number of entries returned.
        actual: usize,
    },
    /// The biome source itself failed.
    #[error(transparent)]
    BiomeQuery(#[from] BiomeQueryError),
}
