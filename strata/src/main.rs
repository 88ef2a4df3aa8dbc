//! # Strata
//!
//! Generates a square region of terrain columns from a config file and logs
//! a digest per column.
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    clippy::unwrap_used
)]

use std::{env, path::PathBuf, time::Instant};

use anyhow::Context;
use rayon::prelude::*;
use strata_core::{ColumnGenerator, chunk::Voxel};

use crate::config::StrataConfig;

mod config;
mod logger;

const DEFAULT_CONFIG_PATH: &str = "strata_config.json5";

fn main() -> anyhow::Result<()> {
    logger::init().context("failed to install the logger")?;

    let path = env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = StrataConfig::load_or_create(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let seed = config.world_seed();
    let biomes = config
        .biome_layout
        .to_source()
        .context("failed to build the biome layout")?;
    let generator = ColumnGenerator::new(seed, &config.generation, biomes);

    let positions = config.chunk_positions();
    let _span = tracing::info_span!("generate", seed, chunks = positions.len()).entered();
    let start = Instant::now();

    let columns = positions
        .par_iter()
        .map(|&(chunk_x, chunk_z)| {
            generator
                .generate_column(chunk_x, chunk_z)
                .map(|column| (chunk_x, chunk_z, column))
        })
        .collect::<Result<Vec<_>, _>>()
        .context("terrain generation failed")?;

    let random_config = generator.random_config();
    let mut stone = 0;
    let mut water = 0;
    for (chunk_x, chunk_z, column) in &columns {
        stone += column.voxels.count(Voxel::Stone);
        water += column.voxels.count(Voxel::Water);
        tracing::info!(
            chunk_x,
            chunk_z,
            digest = %column.voxels.digest(),
            population_seed = random_config.population_seed(*chunk_x, *chunk_z),
            "generated column"
        );
    }

    tracing::info!(
        columns = columns.len(),
        stone,
        water,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "finished region"
    );
    Ok(())
}
