//! Boundary data handed from one tile to its neighbour.

use std::sync::Arc;

use vita_core::{Cell, Direction, Generation};
use vita_grid::Grid;
use vita_space::{CellView, Halo};

/// A snapshot of a tile's cells as seen by a neighbour.
///
/// The cells are copied out of the live grid, so the sender is free to tick
/// while receivers still hold the snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighbourData {
    /// Generation of the grid when the snapshot was taken.
    pub generation: Generation,
    /// Rows in `cells`.
    pub height: u32,
    /// Columns in `cells`.
    pub width: u32,
    /// Row-major cells.
    pub cells: Arc<[Cell]>,
}

impl NeighbourData {
    /// Copy the current state of `grid`.
    pub fn snapshot(grid: &Grid) -> Self {
        Self {
            generation: grid.generation(),
            height: grid.height(),
            width: grid.width(),
            cells: Arc::from(grid.cells()),
        }
    }

    /// Borrow the snapshot as a [`CellView`].
    pub fn view(&self) -> CellView<'_> {
        CellView::new(&self.cells, self.height, self.width)
    }
}

/// Build a [`Halo`] over per-direction boundary data, indexed by
/// [`Direction::index`].
pub fn halo_from(sides: &[Option<NeighbourData>; 4]) -> Halo<'_> {
    let mut halo = Halo::empty();
    for direction in Direction::ALL {
        halo.set(direction, sides[direction.index()].as_ref().map(NeighbourData::view));
    }
    halo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_copies_grid_state() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.toggle_cell_at(1, 2);
        grid.tick();
        let data = NeighbourData::snapshot(&grid);
        assert_eq!(data.generation, grid.generation());
        assert_eq!(&*data.cells, grid.cells());
        grid.toggle_cell_at(0, 0);
        assert_ne!(&*data.cells, grid.cells());
    }

    #[test]
    fn halo_maps_sides_by_direction() {
        let mut above = Grid::new(2, 2).unwrap();
        above.toggle_cell_at(1, 0);
        let mut sides: [Option<NeighbourData>; 4] = Default::default();
        sides[Direction::Top.index()] = Some(NeighbourData::snapshot(&above));
        let halo = halo_from(&sides);
        assert!(halo.side(Direction::Top).is_some());
        assert!(halo.side(Direction::Bottom).is_none());
        assert_eq!(halo.cell_beyond(-1, 0, 2, 2), Cell::Alive);
    }
}
