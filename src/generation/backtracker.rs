//! Randomized depth-first backtracker.
//!
//! Carves a perfect maze (a spanning tree over every cell) using an explicit
//! LIFO frontier, so stack depth never depends on the grid size. Wall removal
//! is strictly sequential; there is nothing here to parallelize.

use rand::Rng;
use tracing::debug;

use crate::grid::{Coord, Direction, Grid};

/// Reset `grid` and carve a perfect maze starting at `start`.
/// Returns the number of wall pairs opened (rows * cols - 1 on success).
pub fn carve<R: Rng + ?Sized>(grid: &mut Grid, start: Coord, rng: &mut R) -> usize {
    grid.reset();
    if !grid.in_bounds(start) {
        return 0;
    }

    let mut frontier = Vec::with_capacity(grid.len());
    let mut candidates: Vec<(Direction, Coord)> = Vec::with_capacity(4);
    let mut opened = 0;

    grid.set_visited(start, true);
    frontier.push(start);

    while let Some(&current) = frontier.last() {
        candidates.clear();
        candidates.extend(
            grid.neighbors(current)
                .filter(|(_, next)| !grid.is_visited(*next)),
        );

        if candidates.is_empty() {
            frontier.pop();
            continue;
        }

        let (dir, next) = candidates[rng.gen_range(0..candidates.len())];
        grid.set_visited(next, true);
        grid.set_wall(current, dir, false);
        opened += 1;
        frontier.push(next);
    }

    debug!(rows = grid.rows(), cols = grid.cols(), opened, "maze carved");
    opened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding::reachable_cells;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_spanning_tree_edge_count() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for (rows, cols) in [(1, 1), (1, 8), (5, 1), (6, 9), (10, 10)] {
            let mut grid = Grid::new(rows, cols);
            let opened = carve(&mut grid, Coord::ORIGIN, &mut rng);
            assert_eq!(opened, rows * cols - 1);
            assert_eq!(grid.open_wall_pairs(), rows * cols - 1);
            assert!(grid.walls_symmetric());
        }
    }

    #[test]
    fn test_every_cell_visited_and_connected() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
        let mut grid = Grid::new(12, 7);
        carve(&mut grid, Coord::ORIGIN, &mut rng);
        assert!(grid.cells().iter().all(|c| c.visited));
        assert_eq!(reachable_cells(&grid, Coord::ORIGIN), 84);
    }

    #[test]
    fn test_carve_from_interior_start() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let mut grid = Grid::new(6, 6);
        let opened = carve(&mut grid, Coord::new(3, 4), &mut rng);
        assert_eq!(opened, 35);
        assert_eq!(reachable_cells(&grid, Coord::ORIGIN), 36);
    }

    #[test]
    fn test_carve_resets_previous_state() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let mut grid = Grid::new(4, 4);
        carve(&mut grid, Coord::ORIGIN, &mut rng);
        grid.set_obstacle(Coord::new(2, 2), true);
        carve(&mut grid, Coord::ORIGIN, &mut rng);
        assert_eq!(grid.obstacle_count(), 0);
        assert_eq!(grid.open_wall_pairs(), 15);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let mut a = Grid::new(9, 9);
        let mut b = Grid::new(9, 9);
        carve(&mut a, Coord::ORIGIN, &mut Xoshiro256PlusPlus::seed_from_u64(11));
        carve(&mut b, Coord::ORIGIN, &mut Xoshiro256PlusPlus::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_bounds_start_carves_nothing() {
        let mut grid = Grid::new(3, 3);
        let opened = carve(&mut grid, Coord::new(3, 3), &mut Xoshiro256PlusPlus::seed_from_u64(1));
        assert_eq!(opened, 0);
        assert_eq!(grid.open_wall_pairs(), 0);
    }
}
