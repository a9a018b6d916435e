//! Directional neighbourhood for one-dimensional automata.
//!
//! Each row of a grid is treated as an independent line of cells. A cell's
//! neighbourhood is the single cell to its left and the single cell to its
//! right; beyond the ends of the row there is nothing, so those positions
//! read as dead.

use crate::view::CellView;
use vita_core::Cell;

/// The `(left, right)` neighbour values of `(row, col)` within its row.
pub fn neighbours(view: &CellView<'_>, row: i32, col: i32) -> (Cell, Cell) {
    let left = view.try_get(row, col - 1).unwrap_or(Cell::Dead);
    let right = view.try_get(row, col + 1).unwrap_or(Cell::Dead);
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vita_core::Cell::{Alive as A, Dead as D};

    #[test]
    fn interior_cell_sees_both_sides() {
        let cells = vec![A, D, A, D, D, D];
        let v = CellView::new(&cells, 2, 3);
        assert_eq!(neighbours(&v, 0, 1), (A, A));
    }

    #[test]
    fn row_ends_are_dead() {
        let cells = vec![A, D, A, A, D, A];
        let v = CellView::new(&cells, 2, 3);
        // Row 1 starts after row 0's last cell; rows do not leak into each other.
        assert_eq!(neighbours(&v, 1, 0), (D, D));
        assert_eq!(neighbours(&v, 0, 2), (D, D));
    }

    #[test]
    fn single_cell_row() {
        let cells = vec![A];
        let v = CellView::new(&cells, 1, 1);
        assert_eq!(neighbours(&v, 0, 0), (D, D));
    }
}
