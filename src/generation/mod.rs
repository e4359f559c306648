//! Maze build pipeline.
//!
//! `build_maze` runs the three phases in order on a freshly allocated grid:
//! carve a perfect maze, place the exit, inject obstacles. The grid is owned by
//! the pipeline until the build is `Ready`; callers never observe a partially
//! carved or partially obstructed grid.

pub mod backtracker;
pub mod exit;
pub mod obstacles;
pub mod session;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};
use tracing::{debug, info, info_span, warn};

use crate::constants::{
    DEFAULT_SEED, EXIT_ATTEMPTS_PER_CELL, MAX_GRID_CELLS, OBSTACLE_ATTEMPTS_PER_CELL,
};
use crate::error::{MazeError, MazeResult};
use crate::grid::{Coord, Grid};
use crate::pathfinding::PathOracle;

pub use obstacles::ObstacleReport;
pub use session::{MazeSession, Presentation};

/// RNG used for every build. Always injected, never global.
pub type MazeRng = Xoshiro256PlusPlus;

/// Root seed of a play session. Each rebuild ("round") gets its own
/// derived seed so that replays are reproducible round by round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSeed {
    pub seed: u64,
}

impl Default for MazeSeed {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

impl MazeSeed {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Deterministic round hash from the session seed and round number
    pub fn round_hash(&self, round: u64) -> u64 {
        let mut hasher = Sha3_256::new();
        hasher.update(self.seed.to_le_bytes());
        hasher.update(round.to_le_bytes());
        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[0..8]);
        u64::from_le_bytes(bytes)
    }

    pub fn rng_for_round(&self, round: u64) -> MazeRng {
        MazeRng::seed_from_u64(self.round_hash(round))
    }

    /// Separate stream for bonus and decor placement, so presentation draws
    /// never shift the maze a round produces
    pub fn presentation_rng(&self, round: u64) -> MazeRng {
        let mut hasher = Sha3_256::new();
        hasher.update(self.seed.to_le_bytes());
        hasher.update(round.to_le_bytes());
        hasher.update(b"presentation");
        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[0..8]);
        MazeRng::seed_from_u64(u64::from_le_bytes(bytes))
    }
}

/// Pipeline state. Only `Ready` is ever visible outside a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BuildPhase {
    #[default]
    Uninitialized,
    Generating,
    ExitPending,
    InjectingObstacles,
    Ready,
}

impl BuildPhase {
    /// The phase that follows this one in a successful build
    pub fn next(self) -> Self {
        match self {
            Self::Uninitialized => Self::Generating,
            Self::Generating => Self::ExitPending,
            Self::ExitPending => Self::InjectingObstacles,
            Self::InjectingObstacles | Self::Ready => Self::Ready,
        }
    }
}

/// Parameters of one maze build
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub rows: usize,
    pub cols: usize,
    pub obstacle_density: f32,
    pub start: Coord,
    pub exit_attempts_per_cell: usize,
    pub obstacle_attempts_per_cell: usize,
}

impl BuildRequest {
    pub fn new(rows: usize, cols: usize, obstacle_density: f32) -> Self {
        Self {
            rows,
            cols,
            obstacle_density,
            start: Coord::ORIGIN,
            exit_attempts_per_cell: EXIT_ATTEMPTS_PER_CELL,
            obstacle_attempts_per_cell: OBSTACLE_ATTEMPTS_PER_CELL,
        }
    }

    pub fn with_start(mut self, start: Coord) -> Self {
        self.start = start;
        self
    }

    pub fn cells(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Reject configurations that cannot produce a valid maze
    pub fn validate(&self) -> MazeResult<()> {
        let too_large = self
            .rows
            .checked_mul(self.cols)
            .map_or(true, |cells| cells > MAX_GRID_CELLS);
        if self.rows == 0 || self.cols == 0 || too_large {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.start.x >= self.cols || self.start.y >= self.rows {
            return Err(MazeError::StartOutOfBounds {
                start: self.start,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let density = self.obstacle_density;
        if !density.is_finite() || !(0.0..1.0).contains(&density) {
            return Err(MazeError::InvalidDensity(density));
        }
        let requested = self.obstacle_target();
        let capacity = self.cells().saturating_sub(2);
        if requested > capacity {
            return Err(MazeError::TooManyObstacles {
                requested,
                capacity,
            });
        }
        Ok(())
    }

    pub fn obstacle_target(&self) -> usize {
        obstacles::obstacle_target(self.rows, self.cols, self.obstacle_density)
    }

    fn exit_attempt_ceiling(&self) -> usize {
        self.cells().saturating_mul(self.exit_attempts_per_cell)
    }

    fn obstacle_attempt_ceiling(&self) -> usize {
        self.cells().saturating_mul(self.obstacle_attempts_per_cell)
    }
}

/// A finished maze: the grid plus its fixed start and exit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeBuild {
    pub grid: Grid,
    pub start: Coord,
    pub exit: Coord,
    pub obstacles: ObstacleReport,
}

impl MazeBuild {
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn is_reachable(&self, from: Coord, to: Coord) -> bool {
        PathOracle::new().is_reachable(&self.grid, from, to)
    }

    /// Fewest steps from start to exit
    pub fn solution_length(&self) -> Option<usize> {
        PathOracle::new().shortest_distance(&self.grid, self.start, self.exit)
    }

    pub fn solution(&self) -> Option<Vec<Coord>> {
        PathOracle::new().shortest_path(&self.grid, self.start, self.exit)
    }

    /// Cells that are neither start, exit nor obstacle, row-major
    pub fn free_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid
            .cells()
            .iter()
            .filter(|c| !c.obstacle)
            .map(|c| c.coord())
            .filter(move |c| *c != self.start && *c != self.exit)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> MazeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn advance(phase: BuildPhase) -> BuildPhase {
    let next = phase.next();
    debug!(from = ?phase, to = ?next, "build phase");
    next
}

/// Build a complete maze: generate, place the exit, inject obstacles
pub fn build_maze<R: Rng + ?Sized>(request: &BuildRequest, rng: &mut R) -> MazeResult<MazeBuild> {
    request.validate()?;

    let _span = info_span!("build_maze", rows = request.rows, cols = request.cols).entered();
    let mut phase = BuildPhase::Uninitialized;
    let mut oracle = PathOracle::new();

    phase = advance(phase);
    let mut grid = Grid::new(request.rows, request.cols);
    backtracker::carve(&mut grid, request.start, rng);

    phase = advance(phase);
    let exit = exit::place_exit(
        &grid,
        request.start,
        &mut oracle,
        rng,
        request.exit_attempt_ceiling(),
    )?;

    phase = advance(phase);
    let report = obstacles::inject_obstacles(
        &mut grid,
        request.start,
        exit,
        request.obstacle_target(),
        &mut oracle,
        rng,
        request.obstacle_attempt_ceiling(),
    );
    grid.clear_visited();

    phase = advance(phase);
    debug_assert_eq!(phase, BuildPhase::Ready);

    if report.is_partial() {
        warn!(
            wanted = report.target,
            placed = report.placed,
            attempts = report.attempts,
            "obstacle target not reached"
        );
    }
    info!(
        exit = %exit,
        obstacles = report.placed,
        oracle_queries = oracle.queries(),
        "maze ready"
    );

    Ok(MazeBuild {
        grid,
        start: request.start,
        exit,
        obstacles: report,
    })
}

/// Convenience: build with an RNG seeded from `seed`
pub fn build_maze_seeded(request: &BuildRequest, seed: u64) -> MazeResult<MazeBuild> {
    build_maze(request, &mut MazeRng::seed_from_u64(seed))
}
