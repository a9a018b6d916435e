//! The binary cell state.

use std::fmt;

/// State of a single cell.
///
/// Cells are stored one byte each (`0` = dead, `1` = alive). The same byte
/// layout is used by bulk grid reads/writes and by the tile wire format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Cell {
    /// Empty cell (byte `0`).
    #[default]
    Dead = 0,
    /// Live cell (byte `1`).
    Alive = 1,
}

impl Cell {
    /// Returns `true` for [`Cell::Alive`].
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    /// Byte encoding of this cell.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Decode a stored byte. Any non-zero byte reads as alive.
    pub fn from_byte(byte: u8) -> Self {
        if byte == 0 {
            Cell::Dead
        } else {
            Cell::Alive
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.as_byte()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Dead => f.write_str("0"),
            Cell::Alive => f.write_str("1"),
        }
    }
}
