//! Solvability-preserving obstacle injection.
//!
//! Each candidate is flagged tentatively, the start→exit query is re-run, and
//! the flag is kept only if the exit is still reachable. Reachability
//! therefore holds after every single step, not just at the end.
//!
//! Obstacles only ever accumulate, so a cell that once cut the path will cut
//! it again. Such cells are retired, which lets the loop notice when nothing
//! placeable is left and stop with a partial count.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::grid::{Coord, Grid};
use crate::pathfinding::PathOracle;

/// Outcome of an injection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleReport {
    pub target: usize,
    pub placed: usize,
    /// Random samples drawn, including skipped ones
    pub attempts: usize,
    /// Stopped because no free, non-blocking cell was left
    pub exhausted_candidates: bool,
}

impl ObstacleReport {
    pub fn is_partial(&self) -> bool {
        self.placed < self.target
    }
}

/// floor(rows * cols * density)
pub fn obstacle_target(rows: usize, cols: usize, density: f32) -> usize {
    if !density.is_finite() || density <= 0.0 {
        return 0;
    }
    // Snap the f32 to six decimals so 0.7f32 * 100 yields 70, not 69
    let density = (density as f64 * 1e6).round() / 1e6;
    (rows.saturating_mul(cols) as f64 * density + 1e-9).floor() as usize
}

/// Place up to `target` obstacles without cutting `start` off from `exit`
pub fn inject_obstacles<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Coord,
    exit: Coord,
    target: usize,
    oracle: &mut PathOracle,
    rng: &mut R,
    max_attempts: usize,
) -> ObstacleReport {
    inject_obstacles_with(grid, start, exit, target, oracle, rng, max_attempts, |_, _| {})
}

/// Same as [`inject_obstacles`], calling `on_placed` after every confirmed obstacle
#[allow(clippy::too_many_arguments)]
pub fn inject_obstacles_with<R, F>(
    grid: &mut Grid,
    start: Coord,
    exit: Coord,
    target: usize,
    oracle: &mut PathOracle,
    rng: &mut R,
    max_attempts: usize,
    mut on_placed: F,
) -> ObstacleReport
where
    R: Rng + ?Sized,
    F: FnMut(&Grid, Coord),
{
    let mut report = ObstacleReport {
        target,
        placed: 0,
        attempts: 0,
        exhausted_candidates: false,
    };
    if target == 0 || grid.is_empty() {
        return report;
    }
    if !oracle.is_reachable(grid, start, exit) {
        report.exhausted_candidates = true;
        return report;
    }

    let reserved = |c: Coord| c == start || c == exit;
    let mut retired = vec![false; grid.len()];
    let mut remaining = grid
        .cells()
        .iter()
        .filter(|c| !c.obstacle && !reserved(c.coord()))
        .count();

    while report.placed < target && report.attempts < max_attempts {
        if remaining == 0 {
            report.exhausted_candidates = true;
            break;
        }
        report.attempts += 1;

        let cell = Coord::new(rng.gen_range(0..grid.cols()), rng.gen_range(0..grid.rows()));
        let Some(index) = grid.index_of(cell) else {
            continue;
        };
        if reserved(cell) || retired[index] || grid.is_obstacle(cell) {
            continue;
        }

        grid.set_obstacle(cell, true);
        remaining -= 1;
        if oracle.is_reachable(grid, start, exit) {
            report.placed += 1;
            on_placed(grid, cell);
        } else {
            grid.set_obstacle(cell, false);
            retired[index] = true;
            trace!(cell = %cell, "candidate would cut the path, retired");
        }
    }

    debug!(
        wanted = target,
        placed = report.placed,
        attempts = report.attempts,
        exhausted = report.exhausted_candidates,
        "obstacle injection finished"
    );
    report
}
