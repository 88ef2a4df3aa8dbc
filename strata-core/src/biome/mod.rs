//! Biome ids, the built-in legacy biome records and biome lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod source;
pub mod table;

pub use source::BiomeSource;
pub use table::{BiomeEntry, BiomeTable};

/// Numeric biome id, as stored in biome grids and column biome tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BiomeId(pub u8);

impl fmt::Display for BiomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[allow(missing_docs)]
impl BiomeId {
    pub const OCEAN: Self = Self(0);
    pub const PLAINS: Self = Self(1);
    pub const DESERT: Self = Self(2);
    pub const EXTREME_HILLS: Self = Self(3);
    pub const FOREST: Self = Self(4);
    pub const TAIGA: Self = Self(5);
    pub const SWAMPLAND: Self = Self(6);
    pub const RIVER: Self = Self(7);
    pub const FROZEN_OCEAN: Self = Self(10);
    pub const FROZEN_RIVER: Self = Self(11);
    pub const ICE_PLAINS: Self = Self(12);
    pub const ICE_MOUNTAINS: Self = Self(13);
    pub const MUSHROOM_ISLAND: Self = Self(14);
    pub const MUSHROOM_ISLAND_SHORE: Self = Self(15);
    pub const BEACH: Self = Self(16);
    pub const DESERT_HILLS: Self = Self(17);
    pub const FOREST_HILLS: Self = Self(18);
    pub const TAIGA_HILLS: Self = Self(19);
    pub const EXTREME_HILLS_EDGE: Self = Self(20);
    pub const JUNGLE: Self = Self(21);
    pub const JUNGLE_HILLS: Self = Self(22);
    pub const JUNGLE_EDGE: Self = Self(23);
    pub const DEEP_OCEAN: Self = Self(24);
    pub const STONE_BEACH: Self = Self(25);
    pub const COLD_BEACH: Self = Self(26);
    pub const BIRCH_FOREST: Self = Self(27);
    pub const BIRCH_FOREST_HILLS: Self = Self(28);
    pub const ROOFED_FOREST: Self = Self(29);
    pub const COLD_TAIGA: Self = Self(30);
    pub const COLD_TAIGA_HILLS: Self = Self(31);
    pub const MEGA_TAIGA: Self = Self(32);
    pub const MEGA_TAIGA_HILLS: Self = Self(33);
    pub const EXTREME_HILLS_PLUS: Self = Self(34);
    pub const SAVANNA: Self = Self(35);
    pub const SAVANNA_PLATEAU: Self = Self(36);
    pub const MESA: Self = Self(37);
    pub const MESA_PLATEAU_F: Self = Self(38);
    pub const MESA_PLATEAU: Self = Self(39);
}

/// A biome as the terrain generator sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiomeDefinition {
    /// Id used in biome grids.
    pub id: BiomeId,
    /// Registry name, also the key for custom terrain settings.
    pub name: &'static str,
    /// Legacy base height, roughly `-2..2`.
    pub base_height: f32,
    /// Legacy height variation.
    pub height_variation: f32,
    /// Skips neighbor blending when this biome is the center of the window.
    pub neighbor_independent: bool,
}

// (base height, height variation) presets
const DEFAULT: (f32, f32) = (0.1, 0.2);
const SHALLOW_WATERS: (f32, f32) = (-0.5, 0.0);
const OCEANS: (f32, f32) = (-1.0, 0.1);
const DEEP_OCEANS: (f32, f32) = (-1.8, 0.1);
const LOW_PLAINS: (f32, f32) = (0.125, 0.05);
const MID_PLAINS: (f32, f32) = (0.2, 0.2);
const LOW_HILLS: (f32, f32) = (0.45, 0.3);
const HIGH_PLATEAUS: (f32, f32) = (1.5, 0.025);
const MID_HILLS: (f32, f32) = (1.0, 0.5);
const MID_HILLS_EDGE: (f32, f32) = (0.8, 0.4);
const SHORES: (f32, f32) = (0.0, 0.025);
const ROCKY_WATERS: (f32, f32) = (0.1, 0.8);
const LOW_ISLANDS: (f32, f32) = (0.2, 0.3);
const PARTIALLY_SUBMERGED: (f32, f32) = (-0.2, 0.1);

const fn biome(id: BiomeId, name: &'static str, heights: (f32, f32)) -> BiomeDefinition {
    BiomeDefinition {
        id,
        name,
        base_height: heights.0,
        height_variation: heights.1,
        neighbor_independent: false,
    }
}

const fn unblended(id: BiomeId, name: &'static str, heights: (f32, f32)) -> BiomeDefinition {
    BiomeDefinition {
        neighbor_independent: true,
        ..biome(id, name, heights)
    }
}

/// The overworld biomes known to the legacy generator.
pub static LEGACY_BIOMES: [BiomeDefinition; 38] = [
    biome(BiomeId::OCEAN, "ocean", OCEANS),
    biome(BiomeId::PLAINS, "plains", LOW_PLAINS),
    biome(BiomeId::DESERT, "desert", LOW_PLAINS),
    biome(BiomeId::EXTREME_HILLS, "extreme_hills", MID_HILLS),
    biome(BiomeId::FOREST, "forest", DEFAULT),
    biome(BiomeId::TAIGA, "taiga", MID_PLAINS),
    biome(BiomeId::SWAMPLAND, "swampland", PARTIALLY_SUBMERGED),
    unblended(BiomeId::RIVER, "river", SHALLOW_WATERS),
    biome(BiomeId::FROZEN_OCEAN, "frozen_ocean", OCEANS),
    unblended(BiomeId::FROZEN_RIVER, "frozen_river", SHALLOW_WATERS),
    biome(BiomeId::ICE_PLAINS, "ice_plains", LOW_PLAINS),
    biome(BiomeId::ICE_MOUNTAINS, "ice_mountains", LOW_HILLS),
    biome(BiomeId::MUSHROOM_ISLAND, "mushroom_island", LOW_ISLANDS),
    biome(BiomeId::MUSHROOM_ISLAND_SHORE, "mushroom_island_shore", SHORES),
    biome(BiomeId::BEACH, "beach", SHORES),
    biome(BiomeId::DESERT_HILLS, "desert_hills", LOW_HILLS),
    biome(BiomeId::FOREST_HILLS, "forest_hills", LOW_HILLS),
    biome(BiomeId::TAIGA_HILLS, "taiga_hills", LOW_HILLS),
    biome(BiomeId::EXTREME_HILLS_EDGE, "extreme_hills_edge", MID_HILLS_EDGE),
    biome(BiomeId::JUNGLE, "jungle", DEFAULT),
    biome(BiomeId::JUNGLE_HILLS, "jungle_hills", LOW_HILLS),
    biome(BiomeId::JUNGLE_EDGE, "jungle_edge", DEFAULT),
    biome(BiomeId::DEEP_OCEAN, "deep_ocean", DEEP_OCEANS),
    biome(BiomeId::STONE_BEACH, "stone_beach", ROCKY_WATERS),
    biome(BiomeId::COLD_BEACH, "cold_beach", SHORES),
    biome(BiomeId::BIRCH_FOREST, "birch_forest", DEFAULT),
    biome(BiomeId::BIRCH_FOREST_HILLS, "birch_forest_hills", LOW_HILLS),
    biome(BiomeId::ROOFED_FOREST, "roofed_forest", DEFAULT),
    biome(BiomeId::COLD_TAIGA, "cold_taiga", MID_PLAINS),
    biome(BiomeId::COLD_TAIGA_HILLS, "cold_taiga_hills", LOW_HILLS),
    biome(BiomeId::MEGA_TAIGA, "mega_taiga", MID_PLAINS),
    biome(BiomeId::MEGA_TAIGA_HILLS, "mega_taiga_hills", LOW_HILLS),
    biome(BiomeId::EXTREME_HILLS_PLUS, "extreme_hills_plus", MID_HILLS),
    biome(BiomeId::SAVANNA, "savanna", LOW_PLAINS),
    biome(BiomeId::SAVANNA_PLATEAU, "savanna_plateau", HIGH_PLATEAUS),
    biome(BiomeId::MESA, "mesa", DEFAULT),
    biome(BiomeId::MESA_PLATEAU_F, "mesa_plateau_f", HIGH_PLATEAUS),
    biome(BiomeId::MESA_PLATEAU, "mesa_plateau", HIGH_PLATEAUS),
];

/// Looks up a built-in biome by registry name.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static BiomeDefinition> {
    LEGACY_BIOMES.iter().find(|biome| biome.name == name)
}

/// Looks up a built-in biome by id.
#[must_use]
pub fn by_id(id: BiomeId) -> Option<&'static BiomeDefinition> {
    LEGACY_BIOMES.iter().find(|biome| biome.id == id)
}
