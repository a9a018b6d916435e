//! Criterion micro-benchmarks for single-grid ticks and neighbour counting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vita_bench::seeded_grid;
use vita_core::Direction;
use vita_rules::{LifeRule, Rule};
use vita_space::{moore, CellView, EdgeBehavior, Halo};

/// Benchmark: one Conway tick of a 128x128 torus.
fn bench_tick_wrap_128(c: &mut Criterion) {
    let mut grid = seeded_grid(128, Rule::conway(), 42);
    c.bench_function("tick_wrap_128", |b| b.iter(|| grid.tick()));
}

/// Benchmark: one Conway tick of a 128x128 grid with absorbing edges.
fn bench_tick_absorb_128(c: &mut Criterion) {
    let rule = Rule::life(LifeRule::CONWAY, EdgeBehavior::Absorb);
    let mut grid = seeded_grid(128, rule, 42);
    c.bench_function("tick_absorb_128", |b| b.iter(|| grid.tick()));
}

/// Benchmark: one tick of a 128x128 grid reading all four sides from a halo.
fn bench_tick_halo_128(c: &mut Criterion) {
    let mut grid = seeded_grid(128, Rule::conway(), 42);
    let around = seeded_grid(128, Rule::conway(), 7);
    let view: CellView<'_> = around.view();
    let mut halo = Halo::empty();
    for direction in Direction::ALL {
        halo.set(direction, Some(view));
    }
    c.bench_function("tick_halo_128", |b| b.iter(|| grid.tick_with_halo(&halo)));
}

/// Benchmark: one Rule 110 tick over 128 rows of 128 cells.
fn bench_tick_elementary_128(c: &mut Criterion) {
    let mut grid = seeded_grid(128, Rule::elementary(110), 42);
    c.bench_function("tick_elementary_128", |b| b.iter(|| grid.tick()));
}

/// Benchmark: Moore counts for every cell of a 100x100 torus.
fn bench_count_alive_10k(c: &mut Criterion) {
    let grid = seeded_grid(100, Rule::conway(), 3);
    c.bench_function("count_alive_10k", |b| {
        b.iter(|| {
            let view = grid.view();
            for row in 0..100i32 {
                for col in 0..100i32 {
                    black_box(moore::count_alive(&view, row, col, EdgeBehavior::Wrap));
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_tick_wrap_128,
    bench_tick_absorb_128,
    bench_tick_halo_128,
    bench_tick_elementary_128,
    bench_count_alive_10k
);
criterion_main!(benches);
