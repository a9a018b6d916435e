//! Integration test: whole-mesh rounds.
//!
//! A single row of tiles has no diagonal tile corners, so it must evolve
//! exactly like one absorbing grid of the same total size.

use vita_core::Cell;
use vita_engine::{ConfigError, DistributedMesh, Topology, TopologyConfig};
use vita_test_utils::fixtures::{BLOCK, GLIDER};
use vita_test_utils::live_cells;

fn strip(cols: u32) -> TopologyConfig {
    TopologyConfig {
        tile_rows: 1,
        tile_cols: cols,
        tile_height: 10,
        tile_width: 6,
        density: 0,
        seed: Some(0),
        generations: 20,
        ..TopologyConfig::default()
    }
}

#[test]
fn glider_crosses_parallel_tiles() {
    let mut topo = Topology::new(strip(3)).unwrap();
    topo.tile_mut(0, 0).unwrap().grid_mut().set_rectangle(1, 1, &GLIDER);
    let mut world = topo.to_grid().unwrap();

    for _ in 0..20 {
        world.tick();
        topo.step_round().unwrap();
        assert_eq!(topo.to_grid().unwrap().cells(), world.cells());
    }
    // The glider now straddles the first boundary.
    let live = live_cells(&world);
    assert_eq!(live.len(), 5);
    assert!(live.iter().any(|&(_, c)| c >= 6));
}

#[test]
fn glider_crosses_distributed_tiles() {
    let mut mesh = DistributedMesh::new(strip(3)).unwrap();
    mesh.tile(0, 0).unwrap().grid_mut().set_rectangle(1, 1, &GLIDER);
    let mut world = mesh.to_grid().unwrap();

    let metrics = mesh.run().unwrap();
    for _ in 0..20 {
        world.tick();
    }
    assert_eq!(metrics.generation, 20);
    assert_eq!(metrics.alive_cells, 5);
    assert_eq!(mesh.to_grid().unwrap().cells(), world.cells());
}

#[test]
fn diagonal_corners_do_not_contribute() {
    // An L-tromino around the junction of four tiles. On one grid, world
    // cell (3, 3) would be born and complete a block; across tiles it never
    // sees its diagonal neighbour at (4, 4).
    let config = TopologyConfig {
        tile_height: 4,
        tile_width: 4,
        density: 0,
        seed: Some(0),
        ..TopologyConfig::square(2)
    };
    let mut mesh = DistributedMesh::new(config).unwrap();
    for (tr, tc, r, c) in [(0, 1, 3, 0), (1, 0, 0, 3), (1, 1, 0, 0)] {
        mesh.tile(tr, tc).unwrap().grid_mut().toggle_cell_at(r, c);
    }
    let mut world = mesh.to_grid().unwrap();

    world.tick();
    mesh.step_round().unwrap();
    assert_eq!(world.alive_count(), 4);
    assert_eq!(mesh.alive_count(), 1);
    assert_eq!(mesh.to_grid().unwrap().cell(4, 4), Some(Cell::Alive));
}

#[test]
fn block_inside_one_tile_is_stable_everywhere() {
    let mut topo = Topology::new(TopologyConfig {
        tile_height: 6,
        tile_width: 6,
        density: 0,
        seed: Some(0),
        ..TopologyConfig::square(2)
    })
    .unwrap();
    topo.tile_mut(1, 1).unwrap().grid_mut().set_rectangle(2, 2, &BLOCK);

    let metrics = topo.step_round().unwrap();
    assert!(metrics.all_stable());
    assert_eq!(metrics.alive_cells, 4);
    let world = topo.to_grid().unwrap();
    assert_eq!(world.cell(8, 8), Some(Cell::Alive));
}

#[test]
fn invalid_density_is_rejected_before_building() {
    let config = TopologyConfig {
        density: 120,
        ..TopologyConfig::default()
    };
    assert_eq!(
        Topology::new(config.clone()).unwrap_err(),
        ConfigError::InvalidDensity { value: 120 }
    );
    assert!(DistributedMesh::new(config).is_err());
}
