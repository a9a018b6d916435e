//! The four edge directions along which tiles are linked.

use std::fmt;

/// A side of a tile.
///
/// Tiles are laid out with row 0 at the top: the `Top` neighbour of a tile
/// supplies the row above its row 0, the `Left` neighbour the column left of
/// its column 0. Diagonal neighbours do not exist; cells that would need a
/// diagonal tile see no neighbour there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Row `-1` side.
    Top,
    /// Row `height` side.
    Bottom,
    /// Column `-1` side.
    Left,
    /// Column `width` side.
    Right,
}

impl Direction {
    /// All directions in slot order (`Top`, `Bottom`, `Left`, `Right`).
    ///
    /// This is also the order of the neighbour id fields in the tile wire
    /// format.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    /// The side facing this one on the adjacent tile.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    ///
    /// Used to index fixed `[T; 4]` per-direction slots.
    pub fn index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Bottom => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// `(row, col)` step from a tile to its neighbour in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
