//! Core types for the Vita tiled cellular automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: the binary
//! [`Cell`] state, tile identifiers ([`TileId`]), generation counters,
//! the four tile-adjacency [`Direction`]s, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod id;

pub use cell::Cell;
pub use direction::Direction;
pub use error::{GridError, TileError};
pub use id::{Generation, TileId, ID_LEN};
