//! Read-only row-major view over cell storage.

use vita_core::{Cell, Direction};

/// A borrowed `height x width` row-major cell array.
///
/// Views are how neighbourhood strategies see both a grid's own cells and
/// the boundary data received from other tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView<'a> {
    cells: &'a [Cell],
    height: u32,
    width: u32,
}

impl<'a> CellView<'a> {
    /// Wrap `cells`, which must hold exactly `height * width` entries.
    ///
    /// # Panics
    ///
    /// Panics if the slice length does not match the dimensions.
    pub fn new(cells: &'a [Cell], height: u32, width: u32) -> Self {
        assert_eq!(
            cells.len(),
            height as usize * width as usize,
            "cell slice does not match {height}x{width}"
        );
        Self {
            cells,
            height,
            width,
        }
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The underlying cells.
    pub fn cells(&self) -> &'a [Cell] {
        self.cells
    }

    /// Cell at an in-range `(row, col)`.
    pub fn get(&self, row: i32, col: i32) -> Cell {
        self.cells[row as usize * self.width as usize + col as usize]
    }

    /// Cell at `(row, col)`, or `None` when outside the view.
    pub fn try_get(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || col < 0 || row >= self.height as i32 || col >= self.width as i32 {
            return None;
        }
        Some(self.get(row, col))
    }

    /// One row as a contiguous slice.
    pub fn row(&self, row: u32) -> &'a [Cell] {
        let w = self.width as usize;
        let start = row as usize * w;
        &self.cells[start..start + w]
    }

    /// The cells along one side, top-to-bottom or left-to-right.
    pub fn edge(&self, direction: Direction) -> Vec<Cell> {
        match direction {
            Direction::Top => self.row(0).to_vec(),
            Direction::Bottom => self.row(self.height - 1).to_vec(),
            Direction::Left => (0..self.height as i32).map(|r| self.get(r, 0)).collect(),
            Direction::Right => {
                let last = self.width as i32 - 1;
                (0..self.height as i32).map(|r| self.get(r, last)).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vita_core::Cell::{Alive as A, Dead as D};

    fn sample() -> Vec<Cell> {
        // 2x3:
        // A D D
        // D D A
        vec![A, D, D, D, D, A]
    }

    #[test]
    fn get_is_row_major() {
        let cells = sample();
        let v = CellView::new(&cells, 2, 3);
        assert_eq!(v.get(0, 0), A);
        assert_eq!(v.get(1, 2), A);
        assert_eq!(v.get(1, 0), D);
    }

    #[test]
    fn try_get_outside_is_none() {
        let cells = sample();
        let v = CellView::new(&cells, 2, 3);
        assert_eq!(v.try_get(-1, 0), None);
        assert_eq!(v.try_get(0, 3), None);
        assert_eq!(v.try_get(2, 0), None);
        assert_eq!(v.try_get(1, 2), Some(A));
    }

    #[test]
    fn edges() {
        let cells = sample();
        let v = CellView::new(&cells, 2, 3);
        assert_eq!(v.edge(Direction::Top), vec![A, D, D]);
        assert_eq!(v.edge(Direction::Bottom), vec![D, D, A]);
        assert_eq!(v.edge(Direction::Left), vec![A, D]);
        assert_eq!(v.edge(Direction::Right), vec![D, A]);
    }

    #[test]
    #[should_panic]
    fn mismatched_length_panics() {
        let cells = sample();
        let _ = CellView::new(&cells, 3, 3);
    }
}
