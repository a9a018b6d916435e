//! Edge-extended neighbourhood for tiles.
//!
//! A tile's grid only knows its own cells. Offsets that leave the grid
//! through one side are redirected into the boundary data of the tile on
//! that side: the row above row 0 is the top neighbour's last row, the
//! column right of the last column is the right neighbour's column 0, and
//! so on.
//!
//! Offsets that leave through two sides at once (the four diagonal corners)
//! would need a diagonal tile, which the topology does not link. They count
//! as dead. Sides with no data (no neighbour linked, or nothing received
//! yet) also count as dead.

use crate::moore::OFFSETS_8;
use crate::view::CellView;
use vita_core::{Cell, Direction};

/// Boundary data available to one tick, indexed by [`Direction`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Halo<'a> {
    sides: [Option<CellView<'a>>; 4],
}

impl<'a> Halo<'a> {
    /// A halo with no neighbour data on any side.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, direction: Direction, view: CellView<'a>) -> Self {
        self.set(direction, Some(view));
        self
    }

    /// Provide (or clear) the neighbour grid on one side.
    pub fn set(&mut self, direction: Direction, view: Option<CellView<'a>>) {
        self.sides[direction.index()] = view;
    }

    /// The neighbour grid on one side, if any.
    pub fn side(&self, direction: Direction) -> Option<&CellView<'a>> {
        self.sides[direction.index()].as_ref()
    }

    /// Returns `true` when no side carries data.
    pub fn is_empty(&self) -> bool {
        self.sides.iter().all(Option::is_none)
    }

    /// The cell seen at an off-grid `(row, col)` of a `height x width` grid.
    ///
    /// Neighbour grids of a different size are indexed from the facing edge;
    /// positions they do not cover read as dead.
    pub fn cell_beyond(&self, row: i32, col: i32, height: u32, width: u32) -> Cell {
        let (h, w) = (height as i32, width as i32);
        let row_out = row < 0 || row >= h;
        let col_out = col < 0 || col >= w;
        let lookup = match (row_out, col_out) {
            (true, true) | (false, false) => None,
            (true, false) => {
                if row < 0 {
                    self.side(Direction::Top)
                        .and_then(|v| v.try_get(v.height() as i32 + row, col))
                } else {
                    self.side(Direction::Bottom)
                        .and_then(|v| v.try_get(row - h, col))
                }
            }
            (false, true) => {
                if col < 0 {
                    self.side(Direction::Left)
                        .and_then(|v| v.try_get(row, v.width() as i32 + col))
                } else {
                    self.side(Direction::Right)
                        .and_then(|v| v.try_get(row, col - w))
                }
            }
        };
        lookup.unwrap_or(Cell::Dead)
    }
}

/// Live neighbours of `(row, col)`, reading off-grid offsets from `halo`.
pub fn count_alive(view: &CellView<'_>, halo: &Halo<'_>, row: i32, col: i32) -> u8 {
    let mut count = 0;
    for (dr, dc) in OFFSETS_8 {
        let (nr, nc) = (row + dr, col + dc);
        let cell = view
            .try_get(nr, nc)
            .unwrap_or_else(|| halo.cell_beyond(nr, nc, view.height(), view.width()));
        if cell.is_alive() {
            count += 1;
        }
    }
    count
}
