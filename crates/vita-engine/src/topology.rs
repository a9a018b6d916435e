//! Rectangular tile meshes and their round drivers.
//!
//! Both drivers lay tiles out row-major: tile `(r, c)` is linked to
//! `(r - 1, c)` above and `(r, c - 1)` to its left, and through those links
//! to the tiles below and to the right. Adjacency stops at the mesh border;
//! the mesh does not wrap.
//!
//! A round runs one scoped worker thread per tile and returns only after
//! every worker finished, so no tile starts round `n + 1` from the driver
//! before every tile completed round `n`.

use std::ops::Deref;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use tracing::{debug, trace};

use crate::config::{ConfigError, TopologyConfig};
use crate::distributed::DistributedTile;
use crate::metrics::RoundMetrics;
use crate::parallel::ParallelTile;
use crate::store::MemoryStore;
use vita_core::{Direction, GridError, TileId};
use vita_grid::Grid;
use vita_rules::Rule;
use vita_space::EdgeBehavior;

// ── Shared helpers ─────────────────────────────────────────────────

/// Build tile `index`'s initial grid.
fn seeded_grid(config: &TopologyConfig, index: usize) -> Result<Grid, GridError> {
    let mut grid = Grid::with_rule(config.tile_height, config.tile_width, config.rule)?;
    match config.seed {
        Some(seed) => grid.randomize_seeded(seed.wrapping_add(index as u64), config.density),
        None => grid.randomize(config.density),
    }
    Ok(grid)
}

/// Mutable references to two distinct elements, `lo < hi`.
fn pair_mut<T>(items: &mut [T], lo: usize, hi: usize) -> (&mut T, &mut T) {
    debug_assert!(lo < hi);
    let (head, tail) = items.split_at_mut(hi);
    (&mut head[lo], &mut tail[0])
}

/// Run `work` on every item, one scoped thread per item, and collect the
/// results in item order. Every worker is joined before returning; the
/// first panicked worker is reported by index.
fn run_workers<T, R, F>(items: &mut [T], work: F) -> Result<Vec<R>, ConfigError>
where
    T: Send,
    R: Send,
    F: Fn(usize, &mut T) -> R + Sync,
{
    thread::scope(|s| {
        let work = &work;
        let handles: Vec<_> = items
            .iter_mut()
            .enumerate()
            .map(|(index, item)| s.spawn(move || work(index, item)))
            .collect();
        let joined: Vec<_> = handles.into_iter().map(|h| h.join()).collect();
        joined
            .into_iter()
            .enumerate()
            .map(|(tile, result)| result.map_err(|_| ConfigError::WorkerPanicked { tile }))
            .collect()
    })
}

/// Stitch per-tile grids (row-major) into one grid covering the mesh.
///
/// Life rules get absorbing edges, matching the unlinked border of a mesh.
fn assemble<G>(
    config: &TopologyConfig,
    grids: impl IntoIterator<Item = G>,
) -> Result<Grid, GridError>
where
    G: Deref<Target = Grid>,
{
    let rule = match config.rule {
        Rule::Life { table, .. } => Rule::life(table, EdgeBehavior::Absorb),
        other => other,
    };
    let height = config.tile_height.saturating_mul(config.tile_rows);
    let width = config.tile_width.saturating_mul(config.tile_cols);
    let mut world = Grid::with_rule(height, width, rule)?;
    let cols = config.tile_cols as usize;
    for (index, grid) in grids.into_iter().enumerate() {
        let view = grid.view();
        let rows: Vec<_> = (0..grid.height()).map(|row| view.row(row)).collect();
        let tile_row = (index / cols) as u32;
        let tile_col = (index % cols) as u32;
        world.set_rectangle(tile_row * config.tile_height, tile_col * config.tile_width, &rows);
    }
    Ok(world)
}

fn position(config: &TopologyConfig, row: u32, col: u32) -> Option<usize> {
    (row < config.tile_rows && col < config.tile_cols)
        .then(|| row as usize * config.tile_cols as usize + col as usize)
}

fn elapsed_us(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

// ── Topology ───────────────────────────────────────────────────────

/// A mesh of channel-synchronized [`ParallelTile`]s.
///
/// # Examples
///
/// ```
/// use vita_engine::{Topology, TopologyConfig};
///
/// let config = TopologyConfig {
///     seed: Some(7),
///     ..TopologyConfig::square(2)
/// };
/// let mut topology = Topology::new(config).unwrap();
/// let metrics = topology.run().unwrap();
/// assert_eq!(metrics.generation, 3);
/// assert_eq!(metrics.tiles, 4);
/// ```
#[derive(Debug)]
pub struct Topology {
    config: TopologyConfig,
    tiles: Vec<ParallelTile>,
    last_metrics: RoundMetrics,
}

impl Topology {
    /// Validate `config`, create and seed every tile, and link neighbours.
    pub fn new(config: TopologyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut tiles = (0..config.tile_count())
            .map(|index| seeded_grid(&config, index).map(ParallelTile::from_grid))
            .collect::<Result<Vec<_>, _>>()?;

        let cols = config.tile_cols as usize;
        for index in 0..tiles.len() {
            if index >= cols {
                let (above, here) = pair_mut(&mut tiles, index - cols, index);
                here.set_top_neighbour(above);
            }
            if index % cols > 0 {
                let (left, here) = pair_mut(&mut tiles, index - 1, index);
                here.set_left_neighbour(left);
            }
        }
        debug!(
            rows = config.tile_rows,
            cols = config.tile_cols,
            tile_height = config.tile_height,
            tile_width = config.tile_width,
            "parallel topology built"
        );

        Ok(Self {
            config,
            tiles,
            last_metrics: RoundMetrics::default(),
        })
    }

    /// The configuration the mesh was built from.
    pub fn config(&self) -> &TopologyConfig {
        &self.config
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[ParallelTile] {
        &self.tiles
    }

    /// The tile at mesh position `(row, col)`.
    pub fn tile(&self, row: u32, col: u32) -> Option<&ParallelTile> {
        position(&self.config, row, col).map(|i| &self.tiles[i])
    }

    /// Mutable access to the tile at `(row, col)`, e.g. to stamp a pattern
    /// before the first round.
    pub fn tile_mut(&mut self, row: u32, col: u32) -> Option<&mut ParallelTile> {
        position(&self.config, row, col).map(|i| &mut self.tiles[i])
    }

    /// Generation every tile has reached.
    pub fn generation(&self) -> u64 {
        self.tiles.first().map_or(0, |t| t.grid().generation().0)
    }

    /// Metrics of the most recent round (all zero before the first).
    pub fn last_metrics(&self) -> &RoundMetrics {
        &self.last_metrics
    }

    /// Live cells across the mesh.
    pub fn alive_count(&self) -> usize {
        self.tiles.iter().map(|t| t.grid().alive_count()).sum()
    }

    /// One round: every tile sends, receives and computes on its own worker.
    ///
    /// A panicking worker is reported as [`ConfigError::WorkerPanicked`]
    /// only if its linked neighbours still complete the round; a neighbour
    /// left waiting in its receive phase blocks the round.
    pub fn step_round(&mut self) -> Result<&RoundMetrics, ConfigError> {
        let start = Instant::now();
        run_workers(&mut self.tiles, |index, tile| {
            trace!(tile = index, "worker start");
            tile.multi_tick();
        })?;

        self.last_metrics = RoundMetrics {
            generation: self.generation(),
            total_us: elapsed_us(start),
            alive_cells: self.alive_count(),
            stable_tiles: self.tiles.iter().filter(|t| t.grid().is_stable()).count(),
            tiles: self.tiles.len(),
        };
        debug!(
            generation = self.last_metrics.generation,
            alive = self.last_metrics.alive_cells,
            stable = self.last_metrics.stable_tiles,
            us = self.last_metrics.total_us,
            "round complete"
        );
        Ok(&self.last_metrics)
    }

    /// Run [`generations`](TopologyConfig::generations) rounds and return the
    /// metrics of the last one.
    pub fn run(&mut self) -> Result<RoundMetrics, ConfigError> {
        for _ in 0..self.config.generations {
            self.step_round()?;
        }
        Ok(self.last_metrics.clone())
    }

    /// The whole mesh as one grid.
    pub fn to_grid(&self) -> Result<Grid, GridError> {
        assemble(&self.config, self.tiles.iter().map(ParallelTile::grid))
    }
}

// ── DistributedMesh ────────────────────────────────────────────────

/// A mesh of [`DistributedTile`]s resolved through a shared
/// [`MemoryStore`].
///
/// A round is fenced: every tile first copies its neighbours' boundaries,
/// and only once all copies are taken does any tile tick. Every tile
/// therefore computes generation `n + 1` from its neighbours' generation
/// `n`.
#[derive(Debug)]
pub struct DistributedMesh {
    config: TopologyConfig,
    store: Arc<MemoryStore>,
    tiles: Vec<DistributedTile>,
    last_metrics: RoundMetrics,
}

impl DistributedMesh {
    /// Validate `config`, create, seed and register every tile, and bind
    /// neighbour ids.
    pub fn new(config: TopologyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = Arc::new(MemoryStore::new());
        let mut tiles = Vec::with_capacity(config.tile_count());
        for index in 0..config.tile_count() {
            let grid = seeded_grid(&config, index)?;
            let mut tile = DistributedTile::from_grid(TileId::generate(), grid);
            tile.set_resolver(store.clone());
            store.register(&tile);
            tiles.push(tile);
        }

        let ids: Vec<TileId> = tiles.iter().map(DistributedTile::id).collect();
        for (index, tile) in tiles.iter_mut().enumerate() {
            let row = (index / config.tile_cols as usize) as u32;
            let col = (index % config.tile_cols as usize) as u32;
            for direction in Direction::ALL {
                let (dr, dc) = direction.offset();
                let neighbour = row
                    .checked_add_signed(dr)
                    .zip(col.checked_add_signed(dc))
                    .and_then(|(r, c)| position(&config, r, c));
                if let Some(n) = neighbour {
                    tile.set_neighbour_id(direction, ids[n])?;
                }
            }
        }
        debug!(
            rows = config.tile_rows,
            cols = config.tile_cols,
            tiles = tiles.len(),
            "distributed mesh built"
        );

        Ok(Self {
            config,
            store,
            tiles,
            last_metrics: RoundMetrics::default(),
        })
    }

    /// The configuration the mesh was built from.
    pub fn config(&self) -> &TopologyConfig {
        &self.config
    }

    /// The store every tile resolves its neighbours through.
    pub fn store(&self) -> &Arc<MemoryStore> {
        &self.store
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[DistributedTile] {
        &self.tiles
    }

    /// The tile at mesh position `(row, col)`.
    pub fn tile(&self, row: u32, col: u32) -> Option<&DistributedTile> {
        position(&self.config, row, col).map(|i| &self.tiles[i])
    }

    /// Generation every tile has reached.
    pub fn generation(&self) -> u64 {
        self.tiles.first().map_or(0, |t| t.grid().generation().0)
    }

    /// Metrics of the most recent round (all zero before the first).
    pub fn last_metrics(&self) -> &RoundMetrics {
        &self.last_metrics
    }

    /// Live cells across the mesh.
    pub fn alive_count(&self) -> usize {
        self.tiles.iter().map(|t| t.grid().alive_count()).sum()
    }

    /// One fenced round: collect every boundary, then tick every tile.
    pub fn step_round(&mut self) -> Result<&RoundMetrics, ConfigError> {
        let start = Instant::now();
        let sides = run_workers(&mut self.tiles, |_, tile| tile.collect_boundary())?;
        trace!(tiles = sides.len(), "boundaries collected");
        let sides = &sides;
        run_workers(&mut self.tiles, |index, tile| tile.apply_boundary(&sides[index]))?;

        self.last_metrics = RoundMetrics {
            generation: self.generation(),
            total_us: elapsed_us(start),
            alive_cells: self.alive_count(),
            stable_tiles: self.tiles.iter().filter(|t| t.grid().is_stable()).count(),
            tiles: self.tiles.len(),
        };
        debug!(
            generation = self.last_metrics.generation,
            alive = self.last_metrics.alive_cells,
            stable = self.last_metrics.stable_tiles,
            us = self.last_metrics.total_us,
            "round complete"
        );
        Ok(&self.last_metrics)
    }

    /// Run [`generations`](TopologyConfig::generations) rounds and return the
    /// metrics of the last one.
    pub fn run(&mut self) -> Result<RoundMetrics, ConfigError> {
        for _ in 0..self.config.generations {
            self.step_round()?;
        }
        Ok(self.last_metrics.clone())
    }

    /// The whole mesh as one grid.
    pub fn to_grid(&self) -> Result<Grid, GridError> {
        assemble(&self.config, self.tiles.iter().map(DistributedTile::grid))
    }
}
