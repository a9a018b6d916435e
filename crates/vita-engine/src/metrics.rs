//! Per-round metrics for the topology drivers.

/// Timing and population figures for one round of a mesh.
///
/// Populated by [`Topology::step_round`](crate::Topology::step_round) and
/// [`DistributedMesh::step_round`](crate::DistributedMesh::step_round).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundMetrics {
    /// Generation every tile reached at the end of the round.
    pub generation: u64,
    /// Wall-clock time for the round, in microseconds.
    pub total_us: u64,
    /// Live cells across all tiles after the round.
    pub alive_cells: usize,
    /// Tiles whose last tick changed no cell.
    pub stable_tiles: usize,
    /// Tiles in the mesh.
    pub tiles: usize,
}

impl RoundMetrics {
    /// Whether every tile is stable.
    pub fn all_stable(&self) -> bool {
        self.tiles > 0 && self.stable_tiles == self.tiles
    }
}
