//! The Vita generation engine.
//!
//! [`Grid`] is a rectangular array of [`Cell`](vita_core::Cell)s advanced one
//! generation at a time by its bound [`Rule`](vita_rules::Rule). It is the
//! building block wrapped by both tile backends in `vita-engine`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
mod text;

pub use grid::Grid;
