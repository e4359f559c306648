use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use std::ffi::{CStr, CString};

use maze_core::bridge::*;
use maze_core::generation::backtracker::carve;
use maze_core::generation::MazeRng;
use maze_core::{build_maze_seeded, BuildRequest, Coord, Grid, PathOracle};

fn bench_carving(c: &mut Criterion) {
    c.bench_function("carve_20x20", |b| {
        let mut grid = Grid::new(20, 20);
        let mut rng = MazeRng::seed_from_u64(42);
        b.iter(|| carve(black_box(&mut grid), Coord::ORIGIN, &mut rng))
    });

    c.bench_function("carve_100x100", |b| {
        let mut grid = Grid::new(100, 100);
        let mut rng = MazeRng::seed_from_u64(42);
        b.iter(|| carve(black_box(&mut grid), Coord::ORIGIN, &mut rng))
    });
}

fn bench_oracle(c: &mut Criterion) {
    let build = build_maze_seeded(&BuildRequest::new(40, 40, 0.2), 7).unwrap();
    let mut oracle = PathOracle::new();

    c.bench_function("oracle_is_reachable_40x40", |b| {
        b.iter(|| oracle.is_reachable(&build.grid, black_box(build.start), black_box(build.exit)))
    });

    c.bench_function("oracle_shortest_path_40x40", |b| {
        b.iter(|| oracle.shortest_path(&build.grid, black_box(build.start), black_box(build.exit)))
    });
}

fn bench_full_build(c: &mut Criterion) {
    c.bench_function("build_maze_20x20_d15", |b| {
        let request = BuildRequest::new(20, 20, 0.15);
        b.iter(|| build_maze_seeded(black_box(&request), black_box(42)))
    });

    c.bench_function("build_maze_39x77_d25", |b| {
        let request = BuildRequest::new(39, 77, 0.25);
        b.iter(|| build_maze_seeded(black_box(&request), black_box(42)))
    });
}

fn bench_ffi(c: &mut Criterion) {
    c.bench_function("ffi_maze_build", |b| {
        b.iter(|| {
            let ptr = maze_build(black_box(42), black_box(20), black_box(20), black_box(0.2));
            maze_free_string(ptr);
        })
    });

    let build_ptr = maze_build(42, 20, 20, 0.2);
    let build_json = unsafe { CStr::from_ptr(build_ptr).to_str().unwrap().to_owned() };
    maze_free_string(build_ptr);
    let build: serde_json::Value = serde_json::from_str(&build_json).unwrap();
    let grid = CString::new(build["grid"].to_string()).unwrap();

    c.bench_function("ffi_maze_is_reachable", |b| {
        b.iter(|| maze_is_reachable(black_box(grid.as_ptr()), 0, 0, 19, 19))
    });
}

criterion_group!(benches, bench_carving, bench_oracle, bench_full_build, bench_ffi);
criterion_main!(benches);
