//! Error types for grids and tiles.
//!
//! Both kinds are local and synchronous: nothing in the core retries, and a
//! failed operation leaves the grid or tile unmodified.

use std::error::Error;
use std::fmt;

use crate::id::TileId;

/// Errors from grid construction and bulk cell I/O.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or columns.
    EmptyGrid,
    /// A dimension exceeds the maximum addressable size.
    DimensionTooLarge {
        /// Which dimension (`"height"` or `"width"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// A bulk read/write buffer does not have exactly one byte per cell.
    LengthMismatch {
        /// Number of bytes the grid holds.
        expected: usize,
        /// Length of the buffer that was passed in.
        actual: usize,
    },
    /// Text input contained a character that is neither a cell digit nor
    /// whitespace.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        offset: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer length {actual} does not match grid size {expected}"
                )
            }
            Self::InvalidCharacter { character, offset } => {
                write!(f, "cannot parse invalid character {character:?} at offset {offset}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from tile linking and the tile wire format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileError {
    /// A tile was asked to become its own neighbour.
    InvalidNeighbor {
        /// The id that was rejected (the tile's own id).
        id: TileId,
    },
    /// An encode/decode buffer is not exactly `160 + height * width` bytes.
    LengthMismatch {
        /// Encoded size of the tile.
        expected: usize,
        /// Length of the buffer that was passed in.
        actual: usize,
    },
    /// A tile id could not be parsed.
    InvalidId {
        /// What went wrong.
        reason: String,
    },
    /// The tile's grid rejected an operation.
    Grid(GridError),
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNeighbor { id } => {
                write!(f, "tile {id} cannot be its own neighbour")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer length {actual} does not match encoded tile size {expected}"
                )
            }
            Self::InvalidId { reason } => write!(f, "invalid tile id: {reason}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for TileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for TileError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_display_names_both_sizes() {
        let msg = GridError::LengthMismatch {
            expected: 768,
            actual: 10,
        }
        .to_string();
        assert!(msg.contains("768"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn invalid_character_display() {
        let msg = GridError::InvalidCharacter {
            character: 'x',
            offset: 4,
        }
        .to_string();
        assert!(msg.contains("'x'"));
        assert!(msg.contains("offset 4"));
    }

    #[test]
    fn tile_error_wraps_grid_error_as_source() {
        let err = TileError::from(GridError::EmptyGrid);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("grid: "));
    }

    #[test]
    fn invalid_neighbor_display_contains_id() {
        let err = TileError::InvalidNeighbor { id: TileId::NULL };
        assert!(err.to_string().contains(&"0".repeat(32)));
    }
}
