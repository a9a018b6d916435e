//! Resolver-synchronized tiles.
//!
//! A [`DistributedTile`] knows its neighbours only by [`TileId`]. Linking
//! records the id; the neighbour's grid is looked up through the tile's
//! [`Resolver`] the first time it is needed and cached until the id is
//! rebound or the resolver replaced.
//!
//! A tick reads each neighbour's *live* grid under a short read lock, then
//! ticks the tile's own grid under a write lock. No two locks are ever held
//! at once. Nothing fences those reads to a generation, though: if a
//! neighbour ticks concurrently the tile may see either its old or its new
//! cells. [`DistributedMesh`](crate::DistributedMesh) avoids this by
//! collecting every tile's boundary before any tile computes.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use crate::boundary::{halo_from, NeighbourData};
use crate::codec::{self, TileRecord};
use vita_core::{Direction, GridError, TileError, TileId};
use vita_grid::Grid;

/// A grid shared between its tile and any tile that resolves it.
pub type SharedGrid = Arc<RwLock<Grid>>;

/// Maps a tile id to the live grid of that tile.
///
/// Implemented by whatever holds the tiles: an in-process
/// [`MemoryStore`](crate::MemoryStore), a cache in front of a key-value
/// store, a test double.
pub trait Resolver: Send + Sync {
    /// The grid of tile `id`, or `None` if it is unknown.
    fn resolve(&self, id: &TileId) -> Option<SharedGrid>;
}

/// The resolver of a freshly created tile: resolves nothing, so every
/// bound neighbour reads as empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyResolver;

impl Resolver for EmptyResolver {
    fn resolve(&self, _id: &TileId) -> Option<SharedGrid> {
        None
    }
}

fn read_grid(grid: &RwLock<Grid>) -> RwLockReadGuard<'_, Grid> {
    grid.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_grid(grid: &RwLock<Grid>) -> RwLockWriteGuard<'_, Grid> {
    grid.write().unwrap_or_else(PoisonError::into_inner)
}

/// A grid whose neighbours are named by id and resolved on demand.
pub struct DistributedTile {
    id: TileId,
    neighbour_ids: [TileId; 4],
    cache: [Option<SharedGrid>; 4],
    grid: SharedGrid,
    resolver: Arc<dyn Resolver>,
}

impl DistributedTile {
    /// An all-dead tile with no neighbours and an [`EmptyResolver`].
    pub fn new(id: TileId, height: u32, width: u32) -> Result<Self, GridError> {
        Ok(Self::from_grid(id, Grid::new(height, width)?))
    }

    /// [`new`](Self::new) with a freshly generated id.
    pub fn generate(height: u32, width: u32) -> Result<Self, GridError> {
        Self::new(TileId::generate(), height, width)
    }

    /// Wrap an existing grid.
    pub fn from_grid(id: TileId, grid: Grid) -> Self {
        Self {
            id,
            neighbour_ids: [TileId::NULL; 4],
            cache: Default::default(),
            grid: Arc::new(RwLock::new(grid)),
            resolver: Arc::new(EmptyResolver),
        }
    }

    /// This tile's id.
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Id of the neighbour on one side ([`TileId::NULL`] if none).
    pub fn neighbour_id(&self, direction: Direction) -> TileId {
        self.neighbour_ids[direction.index()]
    }

    /// Read access to the grid.
    pub fn grid(&self) -> RwLockReadGuard<'_, Grid> {
        read_grid(&self.grid)
    }

    /// Write access to the grid.
    pub fn grid_mut(&self) -> RwLockWriteGuard<'_, Grid> {
        write_grid(&self.grid)
    }

    /// A shared handle to the grid, for registering with a resolver.
    pub fn shared(&self) -> SharedGrid {
        Arc::clone(&self.grid)
    }

    /// Replace the resolver. Drops every cached neighbour.
    pub fn set_resolver(&mut self, resolver: Arc<dyn Resolver>) {
        self.resolver = resolver;
        self.cache = Default::default();
    }

    // ── Linking ─────────────────────────────────────────────────

    /// Bind `direction` to `id`.
    ///
    /// Fails with [`TileError::InvalidNeighbor`] if `id` is this tile's own
    /// id, leaving the binding unchanged. Rebinding to a different id drops
    /// that side's cached neighbour.
    pub fn set_neighbour_id(&mut self, direction: Direction, id: TileId) -> Result<(), TileError> {
        if id == self.id {
            return Err(TileError::InvalidNeighbor { id });
        }
        let slot = direction.index();
        if self.neighbour_ids[slot] != id {
            self.neighbour_ids[slot] = id;
            self.cache[slot] = None;
        }
        Ok(())
    }

    /// Bind `direction` to `other`'s id.
    pub fn set_neighbour(
        &mut self,
        direction: Direction,
        other: &DistributedTile,
    ) -> Result<(), TileError> {
        self.set_neighbour_id(direction, other.id)
    }

    /// `other` becomes the tile above this one.
    pub fn set_top_neighbour(&mut self, other: &DistributedTile) -> Result<(), TileError> {
        self.set_neighbour(Direction::Top, other)
    }

    /// `other` becomes the tile below this one.
    pub fn set_bottom_neighbour(&mut self, other: &DistributedTile) -> Result<(), TileError> {
        self.set_neighbour(Direction::Bottom, other)
    }

    /// `other` becomes the tile left of this one.
    pub fn set_left_neighbour(&mut self, other: &DistributedTile) -> Result<(), TileError> {
        self.set_neighbour(Direction::Left, other)
    }

    /// `other` becomes the tile right of this one.
    pub fn set_right_neighbour(&mut self, other: &DistributedTile) -> Result<(), TileError> {
        self.set_neighbour(Direction::Right, other)
    }

    /// Unbind `direction`.
    pub fn clear_neighbour(&mut self, direction: Direction) {
        let slot = direction.index();
        self.neighbour_ids[slot] = TileId::NULL;
        self.cache[slot] = None;
    }

    // ── Resolution ──────────────────────────────────────────────

    /// The neighbour grid on one side, resolving and caching it on first
    /// use. `None` if the side is unbound or the resolver does not know the
    /// id.
    pub fn neighbour(&mut self, direction: Direction) -> Option<SharedGrid> {
        let slot = direction.index();
        let id = self.neighbour_ids[slot];
        if id.is_null() {
            return None;
        }
        if let Some(grid) = &self.cache[slot] {
            return Some(Arc::clone(grid));
        }
        match self.resolver.resolve(&id) {
            Some(grid) => {
                trace!(tile = %self.id, %direction, neighbour = %id, "resolved neighbour");
                self.cache[slot] = Some(Arc::clone(&grid));
                Some(grid)
            }
            None => {
                debug!(tile = %self.id, %direction, neighbour = %id, "neighbour not resolved");
                None
            }
        }
    }

    /// Whether a resolved neighbour is cached for `direction`.
    pub fn is_cached(&self, direction: Direction) -> bool {
        self.cache[direction.index()].is_some()
    }

    // ── Tick ────────────────────────────────────────────────────

    /// Copy the current cells of every resolvable neighbour, indexed by
    /// [`Direction::index`].
    pub fn collect_boundary(&mut self) -> [Option<NeighbourData>; 4] {
        let mut sides: [Option<NeighbourData>; 4] = Default::default();
        for direction in Direction::ALL {
            if let Some(grid) = self.neighbour(direction) {
                let snapshot = NeighbourData::snapshot(&read_grid(&grid));
                sides[direction.index()] = Some(snapshot);
            }
        }
        sides
    }

    /// Tick the grid reading off-grid cells from `sides`.
    pub fn apply_boundary(&mut self, sides: &[Option<NeighbourData>; 4]) {
        let halo = halo_from(sides);
        self.grid_mut().tick_with_halo(&halo);
    }

    /// One generation: [`collect_boundary`](Self::collect_boundary) then
    /// [`apply_boundary`](Self::apply_boundary).
    pub fn tick(&mut self) {
        let sides = self.collect_boundary();
        self.apply_boundary(&sides);
    }

    // ── Wire format ─────────────────────────────────────────────

    /// Size of this tile's encoding: `160 + height * width`.
    pub fn encoded_len(&self) -> usize {
        codec::encoded_len(self.grid().len())
    }

    /// Encode the tile into `buf`, which must be exactly
    /// [`encoded_len`](Self::encoded_len) bytes.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, TileError> {
        let cells = self.grid().to_bytes();
        self.record(&cells).encode_into(buf)
    }

    /// The tile's encoding as a new buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let cells = self.grid().to_bytes();
        self.record(&cells).to_bytes()
    }

    fn record<'a>(&self, cells: &'a [u8]) -> TileRecord<'a> {
        TileRecord {
            id: self.id,
            neighbours: self.neighbour_ids,
            cells,
        }
    }

    /// Overwrite the tile's id, neighbour ids and cells from `buf`.
    ///
    /// Fails without modifying the tile if `buf` is not exactly
    /// [`encoded_len`](Self::encoded_len) bytes, or if it names the tile as
    /// its own neighbour. Changed neighbour ids drop their cached
    /// neighbours. Any non-zero cell byte decodes as alive.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, TileError> {
        let record = TileRecord::decode(buf, self.grid().len())?;
        if let Some(&id) = record
            .neighbours
            .iter()
            .find(|n| !n.is_null() && **n == record.id)
        {
            return Err(TileError::InvalidNeighbor { id });
        }

        self.grid_mut().write(record.cells)?;
        self.id = record.id;
        for direction in Direction::ALL {
            let slot = direction.index();
            if self.neighbour_ids[slot] != record.neighbours[slot] {
                self.neighbour_ids[slot] = record.neighbours[slot];
                self.cache[slot] = None;
            }
        }
        Ok(buf.len())
    }
}

impl fmt::Debug for DistributedTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistributedTile")
            .field("id", &self.id)
            .field("neighbour_ids", &self.neighbour_ids)
            .finish_non_exhaustive()
    }
}
