//! Exit placement.
//!
//! Samples uniformly random cells until one is far enough from the start and
//! reachable from it. Sampling is capped; a grid where no cell can ever
//! satisfy the distance bound is rejected before the first sample.

use rand::Rng;
use tracing::debug;

use crate::error::{MazeError, MazeResult};
use crate::grid::{Coord, Grid};
use crate::pathfinding::PathOracle;

/// Minimum Manhattan distance from the start: max(rows, cols) / 2
pub fn min_exit_distance(rows: usize, cols: usize) -> usize {
    rows.max(cols) / 2
}

fn is_candidate(grid: &Grid, start: Coord, cell: Coord, min_distance: usize) -> bool {
    cell != start && !grid.is_obstacle(cell) && start.manhattan(cell) >= min_distance
}

/// Pick an exit cell for `grid`, trying at most `max_attempts` samples
pub fn place_exit<R: Rng + ?Sized>(
    grid: &Grid,
    start: Coord,
    oracle: &mut PathOracle,
    rng: &mut R,
    max_attempts: usize,
) -> MazeResult<Coord> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let min_distance = min_exit_distance(rows, cols);

    let feasible = grid
        .cells()
        .iter()
        .any(|c| is_candidate(grid, start, c.coord(), min_distance));
    if !feasible {
        return Err(MazeError::NoExitCandidate {
            rows,
            cols,
            min_distance,
        });
    }

    for attempt in 1..=max_attempts {
        let cell = Coord::new(rng.gen_range(0..cols), rng.gen_range(0..rows));
        if !is_candidate(grid, start, cell, min_distance) {
            continue;
        }
        if oracle.is_reachable(grid, start, cell) {
            debug!(exit = %cell, attempt, min_distance, "exit placed");
            return Ok(cell);
        }
    }

    Err(MazeError::ExitAttemptsExhausted {
        attempts: max_attempts,
    })
}
