//! Test utilities for Vita development.
//!
//! Pattern fixtures live in [`fixtures`]. The helpers here place patterns,
//! compare live-cell sets, and stand in for a real resolver.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use vita_core::{Cell, TileId};
use vita_engine::{DistributedTile, MemoryStore, Resolver, SharedGrid};
use vita_grid::Grid;

/// Coordinates of every live cell, ordered.
pub type LiveSet = BTreeSet<(u32, u32)>;

/// Build an all-dead grid and stamp `pattern` at `(row, col)`.
pub fn grid_with<R: AsRef<[Cell]>>(
    height: u32,
    width: u32,
    row: u32,
    col: u32,
    pattern: &[R],
) -> Grid {
    let mut grid = Grid::new(height, width).expect("valid test grid");
    grid.set_rectangle(row, col, pattern);
    grid
}

/// Parse a `0`/`1` text block, panicking on malformed input.
pub fn grid_from_text(height: u32, width: u32, text: &str) -> Grid {
    Grid::parse(height, width, text).expect("valid grid text")
}

/// Toggle each listed cell alive on an all-dead grid region.
pub fn set_alive(grid: &mut Grid, cells: &[(u32, u32)]) {
    for &(row, col) in cells {
        if grid.cell(row, col) == Some(Cell::Dead) {
            grid.toggle_cell_at(row, col);
        }
    }
}

/// Live cells of `grid`.
pub fn live_cells(grid: &Grid) -> LiveSet {
    let mut set = LiveSet::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.cell(row, col) == Some(Cell::Alive) {
                set.insert((row, col));
            }
        }
    }
    set
}

/// `cells` shifted by `(dr, dc)` on a `height` x `width` torus.
pub fn translate(cells: &LiveSet, dr: u32, dc: u32, height: u32, width: u32) -> LiveSet {
    cells
        .iter()
        .map(|&(r, c)| ((r + dr) % height, (c + dc) % width))
        .collect()
}

/// A [`MemoryStore`] plus `count` registered tiles resolving through it.
pub fn stored_tiles(
    count: usize,
    height: u32,
    width: u32,
) -> (Arc<MemoryStore>, Vec<DistributedTile>) {
    let store = Arc::new(MemoryStore::new());
    let tiles = (0..count)
        .map(|_| {
            let mut tile = DistributedTile::generate(height, width).expect("valid test tile");
            tile.set_resolver(store.clone());
            store.register(&tile);
            tile
        })
        .collect();
    (store, tiles)
}

/// Resolver test double that forwards to a [`MemoryStore`] and counts
/// lookups.
#[derive(Debug, Default)]
pub struct CountingResolver {
    pub store: MemoryStore,
    calls: AtomicUsize,
}

impl CountingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `resolve` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Resolver for CountingResolver {
    fn resolve(&self, id: &TileId) -> Option<SharedGrid> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.store.get(id)
    }
}
