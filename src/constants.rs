//! Centralized constants for the maze core.
//!
//! Difficulty presets, attempt ceilings and bonus parameters live here so the
//! generation phases, the config layer and the FFI bridge agree on one value.

// =====================================================
// Screen / grid derivation
// =====================================================

/// Default screen width in pixels
pub const DEFAULT_SCREEN_WIDTH: u32 = 1920;

/// Default screen height in pixels
pub const DEFAULT_SCREEN_HEIGHT: u32 = 1000;

/// Margin around the maze = screen width / MARGIN_DIVISOR
pub const MARGIN_DIVISOR: u32 = 64;

/// Cell size divisor (screen width / divisor) for Easy
pub const EASY_CELL_DIVISOR: u32 = 48;

/// Cell size divisor (screen width / divisor) for Medium
pub const MEDIUM_CELL_DIVISOR: u32 = 64;

/// Cell size divisor (screen width / divisor) for Hard
pub const HARD_CELL_DIVISOR: u32 = 80;

// =====================================================
// Obstacle density per difficulty
// =====================================================

pub const EASY_OBSTACLE_DENSITY: f32 = 0.15;
pub const MEDIUM_OBSTACLE_DENSITY: f32 = 0.20;
pub const HARD_OBSTACLE_DENSITY: f32 = 0.25;

// =====================================================
// Bonuses
// =====================================================

/// Seconds added per collected time bonus
pub const EASY_TIME_BONUS_SECS: f32 = 10.0;
pub const MEDIUM_TIME_BONUS_SECS: f32 = 8.0;
pub const HARD_TIME_BONUS_SECS: f32 = 5.0;

/// Time bonuses spawned per maze in timed mode
pub const MAX_TIME_BONUSES: usize = 5;

/// Speed boosts spawned per maze (non-Easy difficulties)
pub const MAX_SPEED_BOOSTS: usize = 5;

/// Speed boost duration in seconds
pub const SPEED_BOOST_DURATION_SECS: f32 = 5.0;

/// Speed multiplier while boosted (75% faster)
pub const SPEED_BOOST_MULTIPLIER: f32 = 1.75;

// =====================================================
// Attempt ceilings
// =====================================================

/// Exit placement gives up after this many samples per grid cell
pub const EXIT_ATTEMPTS_PER_CELL: usize = 64;

/// Obstacle injection gives up after this many samples per grid cell
pub const OBSTACLE_ATTEMPTS_PER_CELL: usize = 32;

/// Largest grid a build request may ask for (2000 x 2000)
pub const MAX_GRID_CELLS: usize = 4_000_000;

// =====================================================
// Seeds
// =====================================================

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;
