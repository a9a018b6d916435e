//! Plain-text form of a grid: one line per row, `1` alive, `0` dead.

use std::fmt;

use crate::grid::Grid;
use vita_core::{Cell, GridError};

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() {
            for &cell in self.view().row(row) {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid {
    /// Parse the text form produced by `Display`.
    ///
    /// Whitespace (including line breaks) is ignored, so rows may be laid
    /// out freely. Any other character than `0`/`1` fails with
    /// [`GridError::InvalidCharacter`]; a digit count other than
    /// `height * width` fails with [`GridError::LengthMismatch`].
    pub fn parse(height: u32, width: u32, text: &str) -> Result<Grid, GridError> {
        let mut grid = Grid::new(height, width)?;
        let mut bytes = Vec::with_capacity(grid.len());
        for (offset, character) in text.char_indices() {
            match character {
                '0' => bytes.push(Cell::Dead.as_byte()),
                '1' => bytes.push(Cell::Alive.as_byte()),
                c if c.is_whitespace() => {}
                _ => return Err(GridError::InvalidCharacter { character, offset }),
            }
        }
        grid.write(&bytes)?;
        Ok(grid)
    }
}
