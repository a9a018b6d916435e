//! Benchmark profiles for the Vita cellular automaton.
//!
//! - [`reference_profile`]: 4x4 mesh of 32x32 tiles (16K cells)
//! - [`stress_profile`]: 8x8 mesh of 64x64 tiles (~262K cells)
//! - [`seeded_grid`]: a single reproducibly filled grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vita_engine::TopologyConfig;
use vita_grid::Grid;
use vita_rules::Rule;

/// 4x4 tiles of 32x32 cells at the default 45 % density.
pub fn reference_profile(seed: u64) -> TopologyConfig {
    TopologyConfig {
        seed: Some(seed),
        ..TopologyConfig::square(4)
    }
}

/// 8x8 tiles of 64x64 cells: 16x the reference cell count.
pub fn stress_profile(seed: u64) -> TopologyConfig {
    TopologyConfig {
        tile_height: 64,
        tile_width: 64,
        seed: Some(seed),
        ..TopologyConfig::square(8)
    }
}

/// A `size` x `size` grid under `rule`, filled from `seed` at 45 % density.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn seeded_grid(size: u32, rule: Rule, seed: u64) -> Grid {
    let mut grid = Grid::with_rule(size, size, rule).expect("benchmark grid size must be non-zero");
    grid.randomize_seeded(seed, 45);
    grid
}
