//! Error taxonomy for maze builds.
//!
//! Only configuration problems are errors. A partial obstacle placement is a
//! normal outcome and is reported through `ObstacleReport` instead.

use crate::grid::Coord;

/// Error type for maze construction and configuration
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("start cell {start} is outside the {rows}x{cols} grid")]
    StartOutOfBounds {
        start: Coord,
        rows: usize,
        cols: usize,
    },

    #[error("obstacle density {0} must be a finite value in [0, 1)")]
    InvalidDensity(f32),

    #[error("{requested} obstacles requested but only {capacity} free cells exist")]
    TooManyObstacles { requested: usize, capacity: usize },

    #[error("no cell in the {rows}x{cols} grid is at least {min_distance} steps from the start")]
    NoExitCandidate {
        rows: usize,
        cols: usize,
        min_distance: usize,
    },

    #[error("exit placement gave up after {attempts} attempts")]
    ExitAttemptsExhausted { attempts: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MazeError {
    /// True for errors caused by the requested parameters rather than I/O
    pub fn is_configuration(&self) -> bool {
        !matches!(self, MazeError::Io(_) | MazeError::Json(_))
    }
}

pub type MazeResult<T> = Result<T, MazeError>;
