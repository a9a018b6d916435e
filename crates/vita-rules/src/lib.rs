//! Transition rules for the Vita cellular automaton.
//!
//! A grid holds exactly one [`Rule`], which pairs a transition table with
//! the neighbourhood strategy it reads:
//!
//! - [`LifeRule`]: Life-like birth/survival tables over Moore neighbour
//!   counts (`B3/S23`, `B34/S23`, `B2/S`, `B3678/S34678`, or any custom set)
//! - [`ElementaryRule`]: one-dimensional Wolfram codes over the
//!   `(left, cell, right)` pattern of each row
//!
//! Rules are pure: the same cell state and neighbourhood always yield the
//! same next state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod elementary;
pub mod error;
pub mod life;
pub mod rule;

pub use elementary::ElementaryRule;
pub use error::RuleError;
pub use life::LifeRule;
pub use rule::Rule;
