//! Tile backends and the topology driver for Vita.
//!
//! A large world is split into tiles, each wrapping its own
//! [`Grid`](vita_grid::Grid). Before every generation a tile needs the
//! boundary cells of its four edge neighbours. Two backends provide them:
//!
//! - [`ParallelTile`]: neighbours exchange snapshots over bounded one-slot
//!   channels; one worker per tile per round
//! - [`DistributedTile`]: neighbours are named by [`TileId`](vita_core::TileId)
//!   and resolved lazily through an injected [`Resolver`]; tiles have a
//!   fixed-layout byte encoding for storage and transport
//!
//! [`Topology`] and [`DistributedMesh`] build rectangular meshes of either
//! kind from a [`TopologyConfig`] and step them round by round.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod codec;
pub mod config;
pub mod distributed;
pub mod metrics;
pub mod parallel;
pub mod store;
pub mod topology;

pub use boundary::NeighbourData;
pub use config::{ConfigError, TopologyConfig};
pub use distributed::{DistributedTile, EmptyResolver, Resolver, SharedGrid};
pub use metrics::RoundMetrics;
pub use parallel::{BoundaryLink, NeighbourConnection, ParallelTile};
pub use store::MemoryStore;
pub use topology::{DistributedMesh, Topology};
