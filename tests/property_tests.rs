//! Property-based tests using proptest
//!
//! Invariants that must hold for every seed and grid size:
//! - Carving: spanning tree (R*C - 1 opened wall pairs), symmetric walls
//! - Connectivity: every cell reachable before obstacles
//! - Builds: exit reachable, exit far enough, start/exit never obstacles
//! - Injection: reachability holds after every placed obstacle
//! - Determinism: same seed, same maze

use proptest::prelude::*;
use rand::SeedableRng;

use maze_core::generation::backtracker::carve;
use maze_core::generation::exit::{min_exit_distance, place_exit};
use maze_core::generation::obstacles::inject_obstacles_with;
use maze_core::generation::MazeRng;
use maze_core::pathfinding::{reachable_cells, shortest_distance};
use maze_core::{build_maze_seeded, is_reachable, BuildRequest, Coord, Grid, PathOracle};

// ============================================================
// Generation Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_carving_yields_spanning_tree(seed in any::<u64>(), rows in 1usize..=24, cols in 1usize..=24) {
        let mut grid = Grid::new(rows, cols);
        let mut rng = MazeRng::seed_from_u64(seed);
        let opened = carve(&mut grid, Coord::ORIGIN, &mut rng);
        prop_assert_eq!(opened, rows * cols - 1);
        prop_assert_eq!(grid.open_wall_pairs(), rows * cols - 1);
        prop_assert!(grid.walls_symmetric());
    }

    #[test]
    fn prop_carved_grid_fully_connected(seed in any::<u64>(), rows in 1usize..=24, cols in 1usize..=24) {
        let mut grid = Grid::new(rows, cols);
        let mut rng = MazeRng::seed_from_u64(seed);
        carve(&mut grid, Coord::ORIGIN, &mut rng);
        prop_assert_eq!(reachable_cells(&grid, Coord::ORIGIN), rows * cols);
    }

    #[test]
    fn prop_carving_from_any_start(seed in any::<u64>(), rows in 2usize..=16, cols in 2usize..=16, sx in 0usize..16, sy in 0usize..16) {
        let start = Coord::new(sx % cols, sy % rows);
        let mut grid = Grid::new(rows, cols);
        let mut rng = MazeRng::seed_from_u64(seed);
        carve(&mut grid, start, &mut rng);
        prop_assert_eq!(grid.open_wall_pairs(), rows * cols - 1);
        prop_assert_eq!(reachable_cells(&grid, start), rows * cols);
    }
}

// ============================================================
// Build Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn prop_build_contract_holds(
        seed in any::<u64>(),
        rows in 2usize..=20,
        cols in 2usize..=20,
        density in 0.0f32..0.3,
    ) {
        let request = BuildRequest::new(rows, cols, density);
        let build = build_maze_seeded(&request, seed).unwrap();

        prop_assert!(is_reachable(&build.grid, build.start, build.exit));
        prop_assert!(!build.grid.is_obstacle(build.start));
        prop_assert!(!build.grid.is_obstacle(build.exit));
        prop_assert_ne!(build.start, build.exit);
        prop_assert!(build.start.manhattan(build.exit) >= min_exit_distance(rows, cols));
        prop_assert!(build.grid.obstacle_count() <= request.obstacle_target());
        prop_assert_eq!(build.grid.obstacle_count(), build.obstacles.placed);
        // Obstacles never change walls
        prop_assert_eq!(build.grid.open_wall_pairs(), rows * cols - 1);
        prop_assert!(build.grid.walls_symmetric());
    }

    #[test]
    fn prop_build_is_deterministic(seed in any::<u64>(), rows in 2usize..=16, cols in 2usize..=16) {
        let request = BuildRequest::new(rows, cols, 0.2);
        let a = build_maze_seeded(&request, seed).unwrap();
        let b = build_maze_seeded(&request, seed).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_reachable_after_every_injection_step(seed in any::<u64>(), rows in 3usize..=14, cols in 3usize..=14) {
        let mut grid = Grid::new(rows, cols);
        let mut rng = MazeRng::seed_from_u64(seed);
        let mut oracle = PathOracle::new();
        carve(&mut grid, Coord::ORIGIN, &mut rng);
        let exit = place_exit(&grid, Coord::ORIGIN, &mut oracle, &mut rng, rows * cols * 64).unwrap();

        let mut steps = 0usize;
        let mut broken = 0usize;
        let report = inject_obstacles_with(
            &mut grid,
            Coord::ORIGIN,
            exit,
            rows * cols / 3,
            &mut oracle,
            &mut rng,
            rows * cols * 32,
            |g, cell| {
                steps += 1;
                if !is_reachable(g, Coord::ORIGIN, exit) || cell == exit || cell == Coord::ORIGIN {
                    broken += 1;
                }
            },
        );
        prop_assert_eq!(broken, 0);
        prop_assert_eq!(steps, report.placed);
    }

    #[test]
    fn prop_path_length_at_least_manhattan(seed in any::<u64>(), rows in 2usize..=16, cols in 2usize..=16) {
        let build = build_maze_seeded(&BuildRequest::new(rows, cols, 0.1), seed).unwrap();
        let distance = shortest_distance(&build.grid, build.start, build.exit).unwrap();
        prop_assert!(distance >= build.start.manhattan(build.exit));
        let path = build.solution().unwrap();
        prop_assert_eq!(path.len(), distance + 1);
        prop_assert_eq!(path.first().copied(), Some(build.start));
        prop_assert_eq!(path.last().copied(), Some(build.exit));
    }
}
