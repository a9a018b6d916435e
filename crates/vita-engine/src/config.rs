//! Topology configuration, validation, and error types.
//!
//! [`TopologyConfig`] is the input to [`Topology::new`](crate::Topology::new)
//! and [`DistributedMesh::new`](crate::DistributedMesh::new), both of which
//! call [`validate()`](TopologyConfig::validate) before building anything.

use std::error::Error;
use std::fmt;

use vita_core::{GridError, TileError};
use vita_rules::Rule;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating or running a topology.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The mesh has zero tile rows or zero tile columns.
    ZeroTiles {
        /// Configured tile rows.
        rows: u32,
        /// Configured tile columns.
        cols: u32,
    },
    /// Tile dimensions are not a valid grid.
    Grid(GridError),
    /// Neighbour binding failed while wiring a distributed mesh.
    Tile(TileError),
    /// Initial density is above 100 percent.
    InvalidDensity {
        /// The invalid value.
        value: u8,
    },
    /// A tile worker panicked during a round.
    WorkerPanicked {
        /// Row-major index of the tile whose worker panicked.
        tile: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTiles { rows, cols } => {
                write!(f, "mesh must have at least one tile, got {rows}x{cols}")
            }
            Self::Grid(e) => write!(f, "tile grid: {e}"),
            Self::Tile(e) => write!(f, "tile wiring: {e}"),
            Self::InvalidDensity { value } => {
                write!(f, "density must be in [0, 100], got {value}")
            }
            Self::WorkerPanicked { tile } => write!(f, "worker for tile {tile} panicked"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Tile(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<TileError> for ConfigError {
    fn from(e: TileError) -> Self {
        Self::Tile(e)
    }
}

// ── TopologyConfig ─────────────────────────────────────────────────

/// Shape and initial state of a tile mesh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopologyConfig {
    /// Tiles per column of the mesh. Default: 1.
    pub tile_rows: u32,
    /// Tiles per row of the mesh. Default: 1.
    pub tile_cols: u32,
    /// Rows per tile. Default: 32.
    pub tile_height: u32,
    /// Columns per tile. Default: 32.
    pub tile_width: u32,
    /// Percentage of cells initially alive, `0..=100`. Default: 45.
    pub density: u8,
    /// Seed for reproducible initial state. Tile `i` (row-major) is seeded
    /// with `seed + i`. `None` seeds from the thread RNG. Default: `None`.
    pub seed: Option<u64>,
    /// Rounds executed by `run()`. Default: 3.
    pub generations: u64,
    /// Rule every tile evolves under. With neighbours present the rule's
    /// edge behaviour is replaced by the halo. Default: Conway.
    pub rule: Rule,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            tile_rows: 1,
            tile_cols: 1,
            tile_height: 32,
            tile_width: 32,
            density: 45,
            seed: None,
            generations: 3,
            rule: Rule::conway(),
        }
    }
}

impl TopologyConfig {
    /// A square `tiles` x `tiles` mesh of default-sized tiles.
    pub fn square(tiles: u32) -> Self {
        Self {
            tile_rows: tiles,
            tile_cols: tiles,
            ..Self::default()
        }
    }

    /// Number of tiles in the mesh.
    pub fn tile_count(&self) -> usize {
        self.tile_rows as usize * self.tile_cols as usize
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_rows == 0 || self.tile_cols == 0 {
            return Err(ConfigError::ZeroTiles {
                rows: self.tile_rows,
                cols: self.tile_cols,
            });
        }
        if self.tile_height == 0 || self.tile_width == 0 {
            return Err(GridError::EmptyGrid.into());
        }
        if self.density > 100 {
            return Err(ConfigError::InvalidDensity {
                value: self.density,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_driver() {
        let c = TopologyConfig::default();
        assert_eq!((c.tile_rows, c.tile_cols), (1, 1));
        assert_eq!((c.tile_height, c.tile_width), (32, 32));
        assert_eq!(c.density, 45);
        assert_eq!(c.generations, 3);
        assert_eq!(c.seed, None);
        assert_eq!(c.rule, Rule::conway());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn square_sets_both_axes() {
        let c = TopologyConfig::square(3);
        assert_eq!(c.tile_count(), 9);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_tiles_rejected() {
        let c = TopologyConfig {
            tile_cols: 0,
            ..TopologyConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::ZeroTiles { rows: 1, cols: 0 })
        );
    }

    #[test]
    fn empty_tile_rejected() {
        let c = TopologyConfig {
            tile_height: 0,
            ..TopologyConfig::default()
        };
        let err = c.validate().unwrap_err();
        assert_eq!(err, ConfigError::Grid(GridError::EmptyGrid));
        assert!(err.source().is_some());
    }

    #[test]
    fn density_above_hundred_rejected() {
        let c = TopologyConfig {
            density: 101,
            ..TopologyConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::InvalidDensity { value: 101 })
        );
        let full = TopologyConfig {
            density: 100,
            ..TopologyConfig::default()
        };
        assert!(full.validate().is_ok());
    }

    #[test]
    fn display_names_offending_value() {
        let msg = ConfigError::InvalidDensity { value: 150 }.to_string();
        assert!(msg.contains("150"));
        let msg = ConfigError::WorkerPanicked { tile: 4 }.to_string();
        assert!(msg.contains('4'));
        let id = vita_core::TileId::NULL;
        let err = ConfigError::from(TileError::InvalidNeighbor { id });
        assert!(err.to_string().starts_with("tile wiring"));
        assert!(err.source().is_some());
    }
}
