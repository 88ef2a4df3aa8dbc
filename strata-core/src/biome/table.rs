//! Terrain parameters per biome, resolved once per generator.

use rustc_hash::FxHashMap;

use crate::{
    biome::{BiomeDefinition, BiomeId, LEGACY_BIOMES, by_name},
    config::CustomBiomeTerrain,
    error::TerrainError,
    terrain::parameters::TerrainParameters,
};

/// Resolved terrain data for one biome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiomeEntry {
    /// The biome's own shape parameters.
    pub parameters: TerrainParameters,
    /// Skips neighbor blending when this biome is the center of the window.
    pub neighbor_independent: bool,
}

/// Lookup from biome id to terrain data.
#[derive(Debug, Clone, Default)]
pub struct BiomeTable {
    entries: FxHashMap<BiomeId, BiomeEntry>,
}

impl BiomeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table for `definitions`, applying any matching entry of
    /// `custom` on top of the derived parameters.
    ///
    /// A custom entry that produces invalid parameters is dropped with a
    /// warning and the biome keeps its derived parameters. Custom entries for
    /// names that are not in `definitions` are ignored with a warning.
    #[must_use]
    pub fn build(
        definitions: &[BiomeDefinition],
        custom: &FxHashMap<String, CustomBiomeTerrain>,
    ) -> Self {
        let mut table = Self::new();

        for definition in definitions {
            let derived =
                TerrainParameters::derived(definition.base_height, definition.height_variation);
            let mut entry = BiomeEntry {
                parameters: derived,
                neighbor_independent: definition.neighbor_independent,
            };

            if let Some(overrides) = custom.get(definition.name) {
                let parameters = overrides.apply_to(derived);
                match parameters.validate() {
                    Ok(()) => {
                        entry.parameters = parameters;
                        if let Some(independent) = overrides.neighbor_independent {
                            entry.neighbor_independent = independent;
                        }
                    }
                    Err(reason) => log::warn!(
                        "Ignoring custom terrain for biome {}: {reason}",
                        definition.name
                    ),
                }
            }

            table.insert(definition.id, entry);
        }

        for name in custom.keys() {
            if !definitions.iter().any(|definition| definition.name == name.as_str()) {
                log::warn!("Ignoring custom terrain for unknown biome {name}");
            }
        }

        log::debug!("Built terrain parameters for {} biomes", table.len());
        table
    }

    /// Builds the table for the built-in legacy biomes.
    #[must_use]
    pub fn legacy(custom: &FxHashMap<String, CustomBiomeTerrain>) -> Self {
        Self::build(&LEGACY_BIOMES, custom)
    }

    /// Adds or replaces the entry for `id`.
    pub fn insert(&mut self, id: BiomeId, entry: BiomeEntry) {
        self.entries.insert(id, entry);
    }

    /// Returns the entry for `id`.
    pub fn get(&self, id: BiomeId) -> Result<&BiomeEntry, TerrainError> {
        self.entries.get(&id).ok_or(TerrainError::UnknownBiome(id))
    }

    /// Returns the entry for a built-in biome name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&BiomeEntry> {
        by_name(name).and_then(|definition| self.entries.get(&definition.id))
    }

    /// Number of biomes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no biomes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
