//! End-to-end terrain generation scenarios.

use std::sync::Arc;

use strata_core::{
    ColumnGenerator, WorldGenSettings,
    biome::{
        BiomeId, BiomeSource, LEGACY_BIOMES,
        source::{BandedBiomeSource, UniformBiomeSource},
    },
    chunk::{CHUNK_HEIGHT, CHUNK_WIDTH, Voxel},
    terrain::{BlendContext, KernelKind, TerrainParameters, blender::NEIGHBORHOOD_SIZE},
};
use strata_utils::random::{LegacyRandom, Random};

fn settings(source: &str) -> WorldGenSettings {
    WorldGenSettings::from_json5(source).expect("test settings parse")
}

fn generator(
    seed: u64,
    settings: &WorldGenSettings,
    source: impl BiomeSource + 'static,
) -> ColumnGenerator {
    ColumnGenerator::new(seed, settings, Arc::new(source))
}

const FLAT_PLAINS: &str = r"{
    custom_biomes: {
        plains: {
            avg_height: 64,
            variation_above: 16,
            variation_below: 16,
            min_height: 0,
            max_height: 256,
            sideways_noise_amount: 0,
            neighbor_independent: true,
        },
    },
}";

#[test]
fn test_same_seed_same_digest() {
    let settings = WorldGenSettings::default();
    let a = generator(0, &settings, UniformBiomeSource::new(BiomeId::FOREST));
    let b = generator(0, &settings, UniformBiomeSource::new(BiomeId::FOREST));

    for (chunk_x, chunk_z) in [(0, 0), (-1, 3), (1_000, -1_000)] {
        let first = a.generate_column(chunk_x, chunk_z).expect("column");
        let second = b.generate_column(chunk_x, chunk_z).expect("column");
        assert_eq!(first.voxels.digest(), second.voxels.digest());
    }
}

#[test]
fn test_uniform_biome_scenario() {
    let generator = generator(0, &settings(FLAT_PLAINS), UniformBiomeSource::new(BiomeId::PLAINS));
    let column = generator.generate_column(0, 0).expect("column");

    for x in 0..CHUNK_WIDTH {
        for z in 0..CHUNK_WIDTH {
            let surface = column.voxels.surface_height(x, z).expect("solid ground");
            // Only the lateral noise moves the surface, by at most 16 blocks.
            assert!((47..=80).contains(&surface), "surface {surface} at ({x}, {z})");

            let line = column.voxels.line(x, z);
            assert_eq!(line[0], Voxel::Bedrock);
            assert!(line[1..=surface].iter().all(|&voxel| voxel == Voxel::Stone));
            for (y, &voxel) in line.iter().enumerate().skip(surface + 1) {
                let expected = if y < 63 { Voxel::Water } else { Voxel::Air };
                assert_eq!(voxel, expected, "at ({x}, {y}, {z})");
            }
        }
    }
}

#[test]
fn test_override_matches_custom_settings() {
    let flat = TerrainParameters::derived(0.0, 0.0)
        .with_avg_height(64.0)
        .with_variation(16.0)
        .with_height_range(0.0, 256.0)
        .with_sideways_noise(0.0);

    let by_settings =
        generator(0, &settings(FLAT_PLAINS), UniformBiomeSource::new(BiomeId::PLAINS));
    let by_override = generator(
        0,
        &WorldGenSettings::default(),
        UniformBiomeSource::new(BiomeId::PLAINS),
    )
    .with_blend_override(Arc::new(move |_: &BlendContext<'_>| Some(flat)));

    let a = by_settings.generate_column(0, 0).expect("column");
    let b = by_override.generate_column(0, 0).expect("column");
    assert_eq!(a.voxels.digest(), b.voxels.digest());
}

#[test]
fn test_taper_caps_every_lattice_column() {
    let source = UniformBiomeSource::new(BiomeId::EXTREME_HILLS);
    let generator = generator(8, &WorldGenSettings::default(), source);

    for (chunk_x, chunk_z) in [(0, 0), (5, -5)] {
        let lattice = generator
            .density()
            .build(chunk_x, chunk_z, &source)
            .expect("lattice");
        for ix in 0..5 {
            for iz in 0..5 {
                assert_eq!(lattice.get(ix, 32, iz).to_bits(), (-10.0_f64).to_bits());
            }
        }
    }
}

#[test]
fn test_height_clamp() {
    let settings = settings(
        r"{
        custom_biomes: {
            desert: { min_height: 40, max_height: 100, neighbor_independent: true },
        },
    }",
    );
    let source = UniformBiomeSource::new(BiomeId::DESERT);
    let generator = generator(3, &settings, source);
    let lattice = generator.density().build(2, 2, &source).expect("lattice");

    for ix in 0..5 {
        for iz in 0..5 {
            assert_eq!(lattice.get(ix, 2, iz).to_bits(), 24.0_f64.to_bits());
            assert_eq!(lattice.get(ix, 13, iz).to_bits(), (-4.0_f64).to_bits());
            assert_eq!(lattice.get(ix, 32, iz).to_bits(), (-156.0_f64).to_bits());
        }
    }

    let column = generator.generate_column(2, 2).expect("column");
    for x in 0..CHUNK_WIDTH {
        for z in 0..CHUNK_WIDTH {
            assert_eq!(column.voxels.get(x, 39, z), Voxel::Stone);
            assert_eq!(column.voxels.get(x, 101, z), Voxel::Air);
        }
    }
}

#[test]
fn test_two_biome_boundary_is_a_smooth_slope() {
    let settings = settings(
        r"{
        custom_biomes: {
            desert: { avg_height: 40, variation_above: 0, variation_below: 0, sideways_noise_amount: 0 },
            forest: { avg_height: 120, variation_above: 0, variation_below: 0, sideways_noise_amount: 0 },
        },
    }",
    );
    let generator = generator(
        0,
        &settings,
        BandedBiomeSource::new(BiomeId::DESERT, BiomeId::FOREST, 0),
    );

    let mut heights = Vec::new();
    for chunk_x in -3..3 {
        let column = generator.generate_column(chunk_x, 0).expect("column");
        for x in 0..CHUNK_WIDTH {
            let total: usize = (0..CHUNK_WIDTH)
                .map(|z| column.voxels.surface_height(x, z).expect("solid ground"))
                .sum();
            heights.push(total as f64 / CHUNK_WIDTH as f64);
        }
    }

    let first = heights[0];
    let last = heights[heights.len() - 1];
    assert!((39.0..=40.0).contains(&first), "west surface {first}");
    assert!((119.0..=120.0).contains(&last), "east surface {last}");

    for pair in heights.windows(2) {
        assert!(pair[1] >= pair[0], "surface drops from {} to {}", pair[0], pair[1]);
        assert!(pair[1] - pair[0] <= 10.0, "cliff from {} to {}", pair[0], pair[1]);
    }
    assert!(heights.iter().any(|&h| h > 50.0 && h < 110.0));
}

#[test]
fn test_river_ignores_neighbors() {
    let settings = settings(
        r"{
        custom_biomes: {
            river: { avg_height: 50, variation_above: 0, variation_below: 0, sideways_noise_amount: 0 },
            plains: { avg_height: 100, variation_above: 0, variation_below: 0, sideways_noise_amount: 0 },
        },
    }",
    );
    let source = BandedBiomeSource::new(BiomeId::RIVER, BiomeId::PLAINS, 8);
    let generator = generator(11, &settings, source);
    let lattice = generator.density().build(0, 0, &source).expect("lattice");

    // Lattice columns at x = 0 and x = 4 sit in the river.
    for ix in 0..2 {
        for iz in 0..5 {
            for iy in 0..29 {
                let expected = 50.0 - (iy * 8) as f64;
                assert_eq!(lattice.get(ix, iy, iz).to_bits(), expected.to_bits());
            }
        }
    }
    // The first plains column blends in the river to its west.
    let mixed = lattice.get(2, 0, 2);
    assert!(mixed > 50.0 && mixed < 100.0, "blended base {mixed}");
}

#[test]
fn test_kernels_are_normalized() {
    for kind in [KernelKind::Radial, KernelKind::RadialStrong] {
        let kernel = kind.kernel();
        let total: f64 = kernel.weights().iter().sum();
        assert!((total - 1.0).abs() < 1e-12, "{kind:?} sums to {total}");
        assert!(kernel.weights().iter().all(|&weight| weight > 0.0));
        assert!(kernel.weight(0, 0) > kernel.weight(1, 0));
        assert_eq!(kernel.weight(2, -1).to_bits(), kernel.weight(-1, 2).to_bits());
    }
}

const VARIED_BIOMES: &str = r"{
    blend_kernel: 'radial_strong',
    custom_biomes: {
        desert: {
            min_height: 20,
            max_height: 180,
            sideways_noise_amount: 0.9,
            octave_weights: [0.6, 0.0, 0.1, 0.1, 0.1, 0.1],
        },
        forest: {
            variation_below: 30,
            min_height: 5,
            sideways_noise_amount: 0.2,
            octave_weights: [0.0, 0.5, 0.0, 0.2, 0.2, 0.1],
        },
        swampland: {
            max_height: 96,
            sideways_noise_amount: 0.0,
            octave_weights: [0.1, 0.1, 0.5, 0.0, 0.3, 0.0],
        },
    },
}";

#[test]
fn test_blend_is_convex() {
    let generator = generator(
        0,
        &settings(VARIED_BIOMES),
        UniformBiomeSource::new(BiomeId::PLAINS),
    );
    let blender = generator.density().blender();
    let mut random = LegacyRandom::from_seed(2024);

    for _ in 0..32 {
        let neighborhood: Vec<BiomeId> = (0..NEIGHBORHOOD_SIZE)
            .map(|_| LEGACY_BIOMES[random.next_i32_bounded(LEGACY_BIOMES.len() as i32) as usize].id)
            .collect();
        let entries: Vec<TerrainParameters> = neighborhood
            .iter()
            .map(|&id| blender.table().get(id).expect("known biome").parameters)
            .collect();

        for column_x in 0..5 {
            for column_z in 0..5 {
                let window: Vec<_> = (column_z..column_z + 5)
                    .flat_map(|z| (column_x..column_x + 5).map(move |x| x + z * 10))
                    .map(|cell| entries[cell].values())
                    .collect();
                let blended = blender
                    .blend(column_x, column_z, &neighborhood)
                    .expect("blend")
                    .values();

                for (field, value) in blended.iter().enumerate() {
                    let lowest = window.iter().map(|v| v[field]).fold(f64::INFINITY, f64::min);
                    let highest = window.iter().map(|v| v[field]).fold(f64::NEG_INFINITY, f64::max);
                    assert!(
                        (lowest - 1e-9..=highest + 1e-9).contains(value),
                        "field {field} at ({column_x}, {column_z}): {value} not in {lowest}..={highest}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_columns_stay_inside_the_chunk_height() {
    let generator = generator(
        77,
        &WorldGenSettings::from_json5("{ amplitude: 3.5 }").expect("settings"),
        BandedBiomeSource::new(BiomeId::DEEP_OCEAN, BiomeId::EXTREME_HILLS_PLUS, 24),
    );
    for chunk_x in 0..3 {
        let column = generator.generate_column(chunk_x, 0).expect("column");
        assert_eq!(column.voxels.voxels().len(), CHUNK_WIDTH * CHUNK_WIDTH * CHUNK_HEIGHT);
        for x in 0..CHUNK_WIDTH {
            for z in 0..CHUNK_WIDTH {
                assert_eq!(column.voxels.get(x, 0, z), Voxel::Bedrock);
                assert_ne!(column.voxels.get(x, CHUNK_HEIGHT - 1, z), Voxel::Stone);
            }
        }
    }
}
