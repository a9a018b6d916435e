//! Classic Life patterns, as rows for [`Grid::set_rectangle`].
//!
//! [`Grid::set_rectangle`]: vita_grid::Grid::set_rectangle

use vita_core::Cell::{self, Alive as A, Dead as D};

/// Glider heading down and right; moves by `(1, 1)` every four
/// generations.
pub const GLIDER: [[Cell; 3]; 3] = [[D, A, D], [D, D, A], [A, A, A]];

/// Horizontal blinker (period 2).
pub const BLINKER: [[Cell; 3]; 1] = [[A, A, A]];

/// Block still life.
pub const BLOCK: [[Cell; 2]; 2] = [[A, A], [A, A]];

/// Beehive still life.
pub const BEEHIVE: [[Cell; 4]; 3] = [[D, A, A, D], [A, D, D, A], [D, A, A, D]];

/// Live cells of the T-tetromino used by the 24x32 tile scenario.
pub const T_TETROMINO: [(u32, u32); 4] = [(10, 12), (11, 12), (12, 12), (11, 13)];
