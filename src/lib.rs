//! Maze Core - Procedural Maze Library
//!
//! Deterministic maze generation for a grid-based maze game:
//! - Grid model (cells, symmetric walls, obstacles)
//! - Perfect-maze carving (randomized depth-first backtracker)
//! - Path oracle (A* reachability and shortest paths)
//! - Exit placement at a minimum distance from the start
//! - Obstacle injection that never cuts the start -> exit path
//! - Difficulty presets, bonuses and obstacle cosmetics
//! - FFI bridge for a non-Rust presentation layer

pub mod bonus;
pub mod bridge;
pub mod config;
pub mod constants;
pub mod cosmetics;
pub mod difficulty;
pub mod error;
pub mod generation;
pub mod grid;
pub mod logging;
pub mod pathfinding;
pub mod survey;

pub use config::MazeConfig;
pub use difficulty::{Difficulty, DifficultyProfile};
pub use error::{MazeError, MazeResult};
pub use generation::{build_maze, build_maze_seeded, BuildRequest, MazeBuild, MazeSession};
pub use grid::{Coord, Direction, Grid};
pub use pathfinding::{is_reachable, PathOracle};
