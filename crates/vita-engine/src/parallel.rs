//! Channel-synchronized tiles.
//!
//! Each generation a [`ParallelTile`] runs three phases on its own worker:
//!
//! 1. **Send**: snapshot the grid and push it to every linked neighbour.
//! 2. **Receive**: block until every linked neighbour's snapshot arrived.
//! 3. **Compute**: tick, reading off-grid cells from the latest snapshots.
//!
//! Two linked tiles share one [`BoundaryLink`] holding a bounded one-slot
//! channel per direction of travel. A tile cannot push a second snapshot
//! until its neighbour consumed the first, so tiles run at most one round
//! apart.
//!
//! Every linked tile must run every round. A tile whose neighbour never
//! sends blocks in the receive phase indefinitely.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver, Select, Sender};
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::boundary::{halo_from, NeighbourData};
use vita_core::{Direction, GridError};
use vita_grid::Grid;

static LINK_COUNTER: AtomicU64 = AtomicU64::new(1);

/// The edge between two linked tiles.
///
/// Created once when two tiles are linked and shared by both of them. Holds
/// one bounded(1) channel per direction of travel: `first` to `second`, and
/// back.
#[derive(Debug)]
pub struct BoundaryLink {
    id: u64,
    forward: (Sender<NeighbourData>, Receiver<NeighbourData>),
    backward: (Sender<NeighbourData>, Receiver<NeighbourData>),
}

impl BoundaryLink {
    fn new() -> Self {
        Self {
            id: LINK_COUNTER.fetch_add(1, Ordering::Relaxed),
            forward: bounded(1),
            backward: bounded(1),
        }
    }

    /// Process-unique identifier of this link.
    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum End {
    First,
    Second,
}

/// One tile's side of a [`BoundaryLink`].
#[derive(Debug)]
pub struct NeighbourConnection {
    link: Arc<BoundaryLink>,
    end: End,
    last_received: Option<NeighbourData>,
}

impl NeighbourConnection {
    fn outgoing(&self) -> &Sender<NeighbourData> {
        match self.end {
            End::First => &self.link.forward.0,
            End::Second => &self.link.backward.0,
        }
    }

    fn incoming(&self) -> &Receiver<NeighbourData> {
        match self.end {
            End::First => &self.link.backward.1,
            End::Second => &self.link.forward.1,
        }
    }

    /// The shared link.
    pub fn link(&self) -> &Arc<BoundaryLink> {
        &self.link
    }

    /// The most recent snapshot received from the neighbour, if any.
    pub fn last_received(&self) -> Option<&NeighbourData> {
        self.last_received.as_ref()
    }

    /// Whether a snapshot is waiting in the incoming slot.
    pub fn has_pending(&self) -> bool {
        !self.incoming().is_empty()
    }

    /// Whether `self` and `other` are the two ends of the same link.
    pub fn is_paired_with(&self, other: &NeighbourConnection) -> bool {
        Arc::ptr_eq(&self.link, &other.link) && self.end != other.end
    }
}

/// A grid that exchanges boundary snapshots with up to four neighbours
/// over channels.
#[derive(Debug)]
pub struct ParallelTile {
    grid: Grid,
    connections: [Option<NeighbourConnection>; 4],
}

impl ParallelTile {
    /// An all-dead tile with no neighbours.
    pub fn new(height: u32, width: u32) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::new(height, width)?))
    }

    /// Wrap an existing grid.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            connections: Default::default(),
        }
    }

    /// The wrapped grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the wrapped grid.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The connection on one side, if linked.
    pub fn connection(&self, direction: Direction) -> Option<&NeighbourConnection> {
        self.connections[direction.index()].as_ref()
    }

    /// Number of linked sides.
    pub fn neighbour_count(&self) -> usize {
        self.connections.iter().flatten().count()
    }

    // ── Linking ─────────────────────────────────────────────────

    /// Make `other` this tile's neighbour on `direction` (and this tile
    /// `other`'s neighbour on the opposite side).
    ///
    /// Linking an already-linked pair again is a no-op. Linking a side that
    /// is connected to a different tile replaces that connection; the
    /// previous neighbour keeps a dangling connection and must be relinked
    /// or dropped before the next round.
    pub fn set_neighbour(&mut self, direction: Direction, other: &mut ParallelTile) {
        let here = direction.index();
        let there = direction.opposite().index();
        if let (Some(a), Some(b)) = (&self.connections[here], &other.connections[there]) {
            if a.is_paired_with(b) {
                return;
            }
        }

        let link = Arc::new(BoundaryLink::new());
        trace!(link = link.id(), %direction, "linking parallel tiles");
        self.connections[here] = Some(NeighbourConnection {
            link: Arc::clone(&link),
            end: End::First,
            last_received: None,
        });
        other.connections[there] = Some(NeighbourConnection {
            link,
            end: End::Second,
            last_received: None,
        });
    }

    /// `other` becomes the tile above this one.
    pub fn set_top_neighbour(&mut self, other: &mut ParallelTile) {
        self.set_neighbour(Direction::Top, other);
    }

    /// `other` becomes the tile below this one.
    pub fn set_bottom_neighbour(&mut self, other: &mut ParallelTile) {
        self.set_neighbour(Direction::Bottom, other);
    }

    /// `other` becomes the tile left of this one.
    pub fn set_left_neighbour(&mut self, other: &mut ParallelTile) {
        self.set_neighbour(Direction::Left, other);
    }

    /// `other` becomes the tile right of this one.
    pub fn set_right_neighbour(&mut self, other: &mut ParallelTile) {
        self.set_neighbour(Direction::Right, other);
    }

    // ── Round phases ────────────────────────────────────────────

    /// Send phase: push a snapshot of the current cells to every linked
    /// neighbour.
    ///
    /// Sends are multiplexed, so a neighbour with a full slot does not hold
    /// up delivery to the others. Blocks until every send completed.
    pub fn send_to_neighbours(&self) {
        let links: SmallVec<[(Direction, &Sender<NeighbourData>); 4]> = Direction::ALL
            .into_iter()
            .filter_map(|d| self.connection(d).map(|c| (d, c.outgoing())))
            .collect();
        if links.is_empty() {
            return;
        }

        let data = NeighbourData::snapshot(&self.grid);
        trace!(generation = %data.generation, sides = links.len(), "send phase");

        let mut sel = Select::new();
        for &(_, tx) in &links {
            sel.send(tx);
        }
        for _ in 0..links.len() {
            let oper = sel.select();
            let index = oper.index();
            let (direction, tx) = links[index];
            if oper.send(tx, data.clone()).is_err() {
                warn!(%direction, "neighbour channel disconnected");
            }
            sel.remove(index);
        }
    }

    /// Receive phase: wait for one snapshot from every linked neighbour and
    /// store it as that side's last received data.
    pub fn receive_from_neighbours(&mut self) {
        let generation = self.grid.generation();
        let mut received: [Option<NeighbourData>; 4] = Default::default();
        {
            let links: SmallVec<[(Direction, &Receiver<NeighbourData>); 4]> = Direction::ALL
                .into_iter()
                .filter_map(|d| self.connection(d).map(|c| (d, c.incoming())))
                .collect();
            if links.is_empty() {
                return;
            }

            let mut sel = Select::new();
            for &(_, rx) in &links {
                sel.recv(rx);
            }
            for _ in 0..links.len() {
                let oper = sel.select();
                let index = oper.index();
                let (direction, rx) = links[index];
                match oper.recv(rx) {
                    Ok(data) => {
                        if data.generation != generation {
                            warn!(
                                %direction,
                                expected = %generation,
                                received = %data.generation,
                                "neighbour generation skew"
                            );
                        }
                        received[direction.index()] = Some(data);
                    }
                    Err(_) => warn!(%direction, "neighbour channel disconnected"),
                }
                sel.remove(index);
            }
        }

        for (slot, data) in self.connections.iter_mut().zip(received) {
            if let (Some(conn), Some(data)) = (slot.as_mut(), data) {
                conn.last_received = Some(data);
            }
        }
        trace!(%generation, "receive phase complete");
    }

    /// Compute phase: tick, reading cells beyond each linked edge from the
    /// last snapshot received on that side.
    pub fn compute(&mut self) {
        let sides: [Option<NeighbourData>; 4] = std::array::from_fn(|i| {
            self.connections[i]
                .as_ref()
                .and_then(|c| c.last_received.clone())
        });
        let halo = halo_from(&sides);
        self.grid.tick_with_halo(&halo);
    }

    /// One full round: send, receive, compute.
    pub fn multi_tick(&mut self) {
        self.send_to_neighbours();
        self.receive_from_neighbours();
        self.compute();
    }
}

// Compile-time assertion: tiles are moved to worker threads.
const _: () = {
    fn _assert_send<T: Send>() {}
    fn _check() {
        _assert_send::<ParallelTile>();
    }
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use vita_core::Cell;

    fn t_tetromino(tile: &mut ParallelTile) {
        for (r, c) in [(10, 12), (11, 12), (12, 12), (11, 13)] {
            tile.grid_mut().toggle_cell_at(r, c);
        }
    }

    // ── Linking ─────────────────────────────────────────────────

    #[test]
    fn link_is_symmetric() {
        let mut a = ParallelTile::new(4, 4).unwrap();
        let mut b = ParallelTile::new(4, 4).unwrap();
        a.set_top_neighbour(&mut b);
        let up = a.connection(Direction::Top).unwrap();
        let down = b.connection(Direction::Bottom).unwrap();
        assert!(up.is_paired_with(down));
        assert_eq!(a.neighbour_count(), 1);
        assert_eq!(b.neighbour_count(), 1);
        assert!(b.connection(Direction::Top).is_none());
    }

    #[test]
    fn relinking_same_pair_keeps_link() {
        let mut a = ParallelTile::new(4, 4).unwrap();
        let mut b = ParallelTile::new(4, 4).unwrap();
        a.set_right_neighbour(&mut b);
        let first = a.connection(Direction::Right).unwrap().link().id();
        b.set_left_neighbour(&mut a);
        let second = a.connection(Direction::Right).unwrap().link().id();
        assert_eq!(first, second);
    }

    // ── Phases ──────────────────────────────────────────────────

    #[test]
    fn unlinked_tile_ticks_like_absorbing_grid() {
        let mut tile = ParallelTile::new(24, 32).unwrap();
        t_tetromino(&mut tile);
        tile.multi_tick();
        assert!(!tile.grid().is_stable());
        tile.multi_tick();
        assert_eq!(tile.grid().cell(11, 12), Some(Cell::Dead));
        assert_eq!(tile.grid().cell(11, 13), Some(Cell::Dead));
        assert_eq!(tile.grid().alive_count(), 6);
    }

    #[test]
    fn receive_stores_neighbour_snapshot() {
        let mut a = ParallelTile::new(24, 32).unwrap();
        let mut b = ParallelTile::new(24, 32).unwrap();
        t_tetromino(&mut b);
        a.set_top_neighbour(&mut b);

        b.send_to_neighbours();
        assert!(a.connection(Direction::Top).unwrap().has_pending());
        a.receive_from_neighbours();

        let got = a.connection(Direction::Top).unwrap().last_received().unwrap();
        assert_eq!(&*got.cells, b.grid().cells());
        assert_eq!(got.generation, b.grid().generation());
    }

    #[test]
    fn snapshot_does_not_alias_live_cells() {
        let mut a = ParallelTile::new(4, 4).unwrap();
        let mut b = ParallelTile::new(4, 4).unwrap();
        a.set_left_neighbour(&mut b);
        b.grid_mut().toggle_cell_at(0, 3);
        b.send_to_neighbours();
        b.grid_mut().toggle_cell_at(0, 3);
        a.receive_from_neighbours();
        let got = a.connection(Direction::Left).unwrap().last_received().unwrap();
        assert_eq!(got.cells[3], Cell::Alive);
        assert_eq!(b.grid().cell(0, 3), Some(Cell::Dead));
    }

    #[test]
    fn star_of_five_tiles_runs_a_round() {
        let mut centre = ParallelTile::new(24, 32).unwrap();
        let mut around: Vec<ParallelTile> =
            (0..4).map(|_| ParallelTile::new(24, 32).unwrap()).collect();
        t_tetromino(&mut centre);
        for tile in &mut around {
            t_tetromino(tile);
        }
        for (tile, direction) in around.iter_mut().zip(Direction::ALL) {
            centre.set_neighbour(direction, tile);
        }

        thread::scope(|s| {
            s.spawn(|| centre.multi_tick());
            for tile in &mut around {
                s.spawn(move || tile.multi_tick());
            }
        });

        for direction in Direction::ALL {
            let conn = centre.connection(direction).unwrap();
            let data = conn.last_received().unwrap();
            assert_eq!(data.cells.len(), 24 * 32);
            assert_eq!(data.cells[10 * 32 + 12], Cell::Alive);
        }
        for tile in &around {
            assert_eq!(tile.grid().generation().0, 1);
        }
    }

    #[test]
    fn halo_brings_neighbour_edge_into_tick() {
        // A row of three along b's bottom edge births a cell on a's top row.
        let mut a = ParallelTile::new(3, 3).unwrap();
        let mut b = ParallelTile::new(3, 3).unwrap();
        for c in 0..3 {
            b.grid_mut().toggle_cell_at(2, c);
        }
        a.set_top_neighbour(&mut b);

        thread::scope(|s| {
            s.spawn(|| a.multi_tick());
            s.spawn(|| b.multi_tick());
        });

        assert_eq!(a.grid().cell(0, 1), Some(Cell::Alive));
        assert_eq!(a.grid().alive_count(), 1);
        // b sees an empty tile below, so its row turns vertical inside b.
        assert_eq!(b.grid().cell(2, 1), Some(Cell::Alive));
        assert_eq!(b.grid().cell(1, 1), Some(Cell::Alive));
    }
}
