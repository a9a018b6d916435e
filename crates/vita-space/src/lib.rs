//! Neighbourhood strategies for the Vita cellular automaton.
//!
//! Every strategy is a pure function over a borrowed [`CellView`]:
//!
//! - [`moore`]: live-neighbour counts over the eight surrounding cells, with
//!   either a hard edge ([`EdgeBehavior::Absorb`]) or a torus
//!   ([`EdgeBehavior::Wrap`])
//! - [`halo`]: edge-extended counts, where off-grid offsets are read from
//!   the boundary data of the adjacent tile
//! - [`line1d`]: left/right neighbour values for one-dimensional automata

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod halo;
pub mod line1d;
pub mod moore;
pub mod view;

pub use edge::EdgeBehavior;
pub use halo::Halo;
pub use view::CellView;
