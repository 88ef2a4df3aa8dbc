//! Chunk-level data and the generator that produces it.

pub mod column;
pub mod column_generator;
pub mod random_config;

pub use column::{CHUNK_HEIGHT, CHUNK_WIDTH, Voxel, VoxelColumn};
pub use column_generator::{ColumnGenerator, GeneratedColumn, SurfaceContext, SurfaceDecorator};
pub use random_config::WorldRandomConfig;
