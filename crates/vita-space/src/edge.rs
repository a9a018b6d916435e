//! Grid edge behaviour for the Moore neighbourhood.

/// How a grid treats neighbour offsets that fall outside it.
///
/// Tile backends do not use either variant: their off-grid offsets are
/// served by a [`Halo`](crate::Halo) instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbours are omitted (the grid has a hard edge).
    Absorb,
    /// Out-of-bounds neighbours wrap to the opposite side (torus).
    #[default]
    Wrap,
}

/// Resolve a single axis value under the given edge behavior.
/// Returns `Some(value)` in range, or `None` for Absorb out-of-bounds.
pub fn resolve_axis(val: i32, len: u32, edge: EdgeBehavior) -> Option<i32> {
    let n = len as i32;
    if val >= 0 && val < n {
        return Some(val);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some(val.rem_euclid(n)),
    }
}
