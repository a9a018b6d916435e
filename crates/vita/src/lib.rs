//! Vita: a tiled Game of Life.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Vita sub-crates. For most users, adding `vita` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use vita::prelude::*;
//!
//! // A 2x2 mesh of 16x16 tiles, seeded for reproducibility.
//! let config = TopologyConfig {
//!     tile_height: 16,
//!     tile_width: 16,
//!     seed: Some(42),
//!     ..TopologyConfig::square(2)
//! };
//! let mut topology = Topology::new(config).unwrap();
//! let metrics = topology.step_round().unwrap();
//! assert_eq!(metrics.generation, 1);
//! assert_eq!(metrics.tiles, 4);
//!
//! // A single grid on its own.
//! let mut grid = Grid::parse(3, 3, "000 111 000").unwrap();
//! grid.set_rule(Rule::life(LifeRule::CONWAY, EdgeBehavior::Absorb));
//! grid.tick();
//! assert_eq!(grid.to_string(), "010\n010\n010\n");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vita-core` | Cells, ids, directions, error types |
//! | [`space`] | `vita-space` | Edge behaviour, Moore/halo/1-D neighbourhoods |
//! | [`rules`] | `vita-rules` | Life and elementary rule tables |
//! | [`grid`] | `vita-grid` | The double-buffered grid |
//! | [`engine`] | `vita-engine` | Parallel and distributed tiles, topology drivers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cells, ids, directions, and error types (`vita-core`).
pub use vita_core as types;

/// Neighbourhood counting (`vita-space`).
///
/// [`space::moore`] for single grids, [`space::halo`] for tiles reading
/// past their edges, [`space::line1d`] for elementary automata.
pub use vita_space as space;

/// Rule tables (`vita-rules`).
pub use vita_rules as rules;

/// The double-buffered grid (`vita-grid`).
pub use vita_grid as grid;

/// Tile backends and topology drivers (`vita-engine`).
///
/// [`engine::ParallelTile`] exchanges boundaries over channels,
/// [`engine::DistributedTile`] resolves neighbours by id, and
/// [`engine::Topology`] / [`engine::DistributedMesh`] drive whole meshes.
pub use vita_engine as engine;

/// Common imports for typical Vita usage.
///
/// ```rust
/// use vita::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use vita_core::{Cell, Direction, Generation, TileId};

    // Errors
    pub use vita_core::{GridError, TileError};
    pub use vita_engine::ConfigError;
    pub use vita_rules::RuleError;

    // Rules and space
    pub use vita_rules::{ElementaryRule, LifeRule, Rule};
    pub use vita_space::EdgeBehavior;

    // Grid
    pub use vita_grid::Grid;

    // Engine
    pub use vita_engine::{
        DistributedMesh, DistributedTile, MemoryStore, ParallelTile, Resolver, RoundMetrics,
        Topology, TopologyConfig,
    };
}
