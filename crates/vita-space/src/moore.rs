//! Moore (8-connected) neighbourhood over a single grid.

use crate::edge::{resolve_axis, EdgeBehavior};
use crate::view::CellView;
use smallvec::SmallVec;

/// The eight `(row, col)` offsets around a cell: orthogonal first, then
/// diagonal.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The in-grid 8-connected neighbours of `(row, col)` as `(row, col)` pairs.
///
/// Under [`EdgeBehavior::Wrap`] every cell has exactly eight entries; on
/// grids narrower than three cells the same neighbour can appear twice.
pub fn neighbours(
    row: i32,
    col: i32,
    height: u32,
    width: u32,
    edge: EdgeBehavior,
) -> SmallVec<[(i32, i32); 8]> {
    let mut result = SmallVec::new();
    for (dr, dc) in OFFSETS_8 {
        let nr = resolve_axis(row + dr, height, edge);
        let nc = resolve_axis(col + dc, width, edge);
        if let (Some(nr), Some(nc)) = (nr, nc) {
            result.push((nr, nc));
        }
    }
    result
}

/// Number of live cells among the neighbours of `(row, col)`.
pub fn count_alive(view: &CellView<'_>, row: i32, col: i32, edge: EdgeBehavior) -> u8 {
    neighbours(row, col, view.height(), view.width(), edge)
        .into_iter()
        .filter(|&(r, c)| view.get(r, c).is_alive())
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vita_core::Cell;

    fn all_alive(h: u32, w: u32) -> Vec<Cell> {
        vec![Cell::Alive; (h * w) as usize]
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn absorb_interior_has_eight() {
        assert_eq!(neighbours(2, 2, 5, 5, EdgeBehavior::Absorb).len(), 8);
    }

    #[test]
    fn absorb_corner_has_three() {
        let n = neighbours(0, 0, 5, 5, EdgeBehavior::Absorb);
        assert_eq!(n.len(), 3);
        assert!(n.contains(&(1, 0)));
        assert!(n.contains(&(0, 1)));
        assert!(n.contains(&(1, 1)));
    }

    #[test]
    fn absorb_edge_has_five() {
        assert_eq!(neighbours(0, 2, 5, 5, EdgeBehavior::Absorb).len(), 5);
    }

    #[test]
    fn wrap_corner_reaches_opposite_sides() {
        let n = neighbours(0, 0, 5, 5, EdgeBehavior::Wrap);
        assert_eq!(n.len(), 8);
        assert!(n.contains(&(4, 4)));
        assert!(n.contains(&(4, 0)));
        assert!(n.contains(&(0, 4)));
    }

    // ── Count tests ─────────────────────────────────────────────

    #[test]
    fn count_on_full_grid() {
        let cells = all_alive(4, 4);
        let v = CellView::new(&cells, 4, 4);
        assert_eq!(count_alive(&v, 0, 0, EdgeBehavior::Absorb), 3);
        assert_eq!(count_alive(&v, 0, 0, EdgeBehavior::Wrap), 8);
        assert_eq!(count_alive(&v, 1, 1, EdgeBehavior::Absorb), 8);
    }

    #[test]
    fn count_excludes_self() {
        let mut cells = vec![Cell::Dead; 9];
        cells[4] = Cell::Alive;
        let v = CellView::new(&cells, 3, 3);
        assert_eq!(count_alive(&v, 1, 1, EdgeBehavior::Absorb), 0);
        assert_eq!(count_alive(&v, 0, 0, EdgeBehavior::Absorb), 1);
    }

    proptest! {
        #[test]
        fn wrap_always_has_eight(h in 1u32..10, w in 1u32..10, r in 0i32..10, c in 0i32..10) {
            let r = r % h as i32;
            let c = c % w as i32;
            prop_assert_eq!(neighbours(r, c, h, w, EdgeBehavior::Wrap).len(), 8);
        }

        #[test]
        fn absorb_count_never_exceeds_wrap(h in 3u32..8, w in 3u32..8, seed in any::<u64>()) {
            let cells: Vec<Cell> = (0..h * w)
                .map(|i| Cell::from((seed >> (i % 64)) & 1 == 1))
                .collect();
            let v = CellView::new(&cells, h, w);
            for r in 0..h as i32 {
                for c in 0..w as i32 {
                    prop_assert!(
                        count_alive(&v, r, c, EdgeBehavior::Absorb)
                            <= count_alive(&v, r, c, EdgeBehavior::Wrap)
                    );
                }
            }
        }
    }
}
