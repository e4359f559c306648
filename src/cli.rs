//! Command-line interface for maze-core.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Maze Core - deterministic maze builder
#[derive(Parser, Debug)]
#[command(name = "maze-core")]
#[command(about = "Build and survey procedural mazes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build one maze and print it as JSON
    Build {
        /// JSON config file; flags below are ignored when set
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Session seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Difficulty preset: easy, medium or hard
        #[arg(short, long, default_value = "easy")]
        difficulty: String,

        /// Grid rows (requires --cols; overrides the screen-derived size)
        #[arg(long, requires = "cols")]
        rows: Option<usize>,

        /// Grid columns
        #[arg(long, requires = "rows")]
        cols: Option<usize>,

        /// Obstacle density override in [0, 1)
        #[arg(long)]
        density: Option<f32>,

        /// Timed mode: also place time bonuses
        #[arg(long)]
        timed: bool,

        /// Obstacle theme: space, jungle or desert
        #[arg(long, default_value = "space")]
        theme: String,

        /// Print a compact summary instead of the full build
        #[arg(long)]
        summary: bool,
    },

    /// Build many mazes in parallel and report statistics
    Survey {
        /// Base seed for per-build seeds
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Number of builds
        #[arg(short = 'n', long, default_value = "200")]
        count: u64,

        /// Grid rows
        #[arg(long, default_value = "20")]
        rows: usize,

        /// Grid columns
        #[arg(long, default_value = "20")]
        cols: usize,

        /// Obstacle density in [0, 1)
        #[arg(long, default_value = "0.2")]
        density: f32,
    },
}
