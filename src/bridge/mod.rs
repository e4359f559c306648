//! FFI bridge: maze core <-> presentation layer
//!
//! C-ABI functions for hosts that load the library dynamically. Data crosses
//! the boundary as JSON. Every returned string is heap-allocated and must be
//! released with `maze_free_string`. Null or malformed input yields a null
//! pointer (string functions) or -1 (integer functions); nothing panics
//! across the boundary.

use serde::{Deserialize, Serialize};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use rand::SeedableRng;
use tracing::warn;

use crate::bonus::{place_bonuses, Bonus, BonusPlan};
use crate::config::MazeConfig;
use crate::cosmetics::{ObstacleDecor, ObstacleTheme};
use crate::difficulty::{Difficulty, DifficultyProfile, ScreenLayout};
use crate::generation::{build_maze_seeded, BuildRequest, MazeBuild, MazeRng, MazeSession};
use crate::grid::{Coord, Direction, Grid};
use crate::pathfinding::PathOracle;

// ========================
// Data transfer types
// ========================

/// Bonus layout for a Ready build
#[derive(Debug, Serialize, Deserialize)]
pub struct BonusResponse {
    pub difficulty: Difficulty,
    pub timed: bool,
    pub bonuses: Vec<Bonus>,
}

// ========================
// Helpers
// ========================

fn json_to_cstring<T: Serialize>(value: &T) -> *mut c_char {
    match serde_json::to_string(value) {
        Ok(json) => CString::new(json).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

fn parse_cstr(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_owned()) }
}

fn parse_grid(ptr: *const c_char) -> Option<Grid> {
    let json = parse_cstr(ptr)?;
    match serde_json::from_str(&json) {
        Ok(grid) => Some(grid),
        Err(e) => {
            warn!(error = %e, "rejected grid json");
            None
        }
    }
}

fn parse_build(ptr: *const c_char) -> Option<MazeBuild> {
    let json = parse_cstr(ptr)?;
    match MazeBuild::from_json(&json) {
        Ok(build) => Some(build),
        Err(e) => {
            warn!(error = %e, "rejected build json");
            None
        }
    }
}

fn coord(x: u32, y: u32) -> Coord {
    Coord::new(x as usize, y as usize)
}

// ========================
// C-ABI: Core
// ========================

/// Version string
#[no_mangle]
pub extern "C" fn maze_version() -> *mut c_char {
    CString::new(env!("CARGO_PKG_VERSION"))
        .unwrap_or_default()
        .into_raw()
}

/// Free a string previously returned by this library
#[no_mangle]
pub extern "C" fn maze_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            drop(CString::from_raw(ptr));
        }
    }
}

// ========================
// C-ABI: Building
// ========================

/// Build a maze of explicit size and return the Ready build as JSON
#[no_mangle]
pub extern "C" fn maze_build(seed: u64, rows: u32, cols: u32, density: f32) -> *mut c_char {
    let request = BuildRequest::new(rows as usize, cols as usize, density);
    match build_maze_seeded(&request, seed) {
        Ok(build) => json_to_cstring(&build),
        Err(e) => {
            warn!(error = %e, "maze_build failed");
            std::ptr::null_mut()
        }
    }
}

/// Build the first round of a session for a difficulty preset and screen
#[no_mangle]
pub extern "C" fn maze_build_for_difficulty(
    seed: u64,
    difficulty_id: u32,
    screen_width: u32,
    screen_height: u32,
) -> *mut c_char {
    let config = MazeConfig {
        seed,
        difficulty: Difficulty::from_id(difficulty_id),
        screen: ScreenLayout {
            width: screen_width,
            height: screen_height,
        },
        ..MazeConfig::default()
    };
    let result = MazeSession::new(config).and_then(|mut session| session.play_again().cloned());
    match result {
        Ok(build) => json_to_cstring(&build),
        Err(e) => {
            warn!(error = %e, "maze_build_for_difficulty failed");
            std::ptr::null_mut()
        }
    }
}

/// Difficulty preset for a screen, as JSON
#[no_mangle]
pub extern "C" fn maze_difficulty_profile(
    difficulty_id: u32,
    screen_width: u32,
    screen_height: u32,
) -> *mut c_char {
    let screen = ScreenLayout {
        width: screen_width,
        height: screen_height,
    };
    json_to_cstring(&DifficultyProfile::for_difficulty(
        Difficulty::from_id(difficulty_id),
        &screen,
    ))
}

// ========================
// C-ABI: Queries
// ========================

/// 1 if `to` is reachable from `from`, 0 if not, -1 on bad input
#[no_mangle]
pub extern "C" fn maze_is_reachable(
    grid_json: *const c_char,
    from_x: u32,
    from_y: u32,
    to_x: u32,
    to_y: u32,
) -> i32 {
    let Some(grid) = parse_grid(grid_json) else {
        return -1;
    };
    let reachable =
        PathOracle::new().is_reachable(&grid, coord(from_x, from_y), coord(to_x, to_y));
    i32::from(reachable)
}

/// 1 if a player at (x, y) may step in `direction_id` (0 N, 1 E, 2 S, 3 W),
/// 0 if blocked, -1 on bad input
#[no_mangle]
pub extern "C" fn maze_can_move(grid_json: *const c_char, x: u32, y: u32, direction_id: u32) -> i32 {
    let Some(direction) = Direction::from_id(direction_id) else {
        return -1;
    };
    let Some(grid) = parse_grid(grid_json) else {
        return -1;
    };
    i32::from(grid.can_move(coord(x, y), direction))
}

/// Fewest steps between two cells; -1 when unreachable or on bad input
#[no_mangle]
pub extern "C" fn maze_shortest_distance(
    grid_json: *const c_char,
    from_x: u32,
    from_y: u32,
    to_x: u32,
    to_y: u32,
) -> i64 {
    let Some(grid) = parse_grid(grid_json) else {
        return -1;
    };
    PathOracle::new()
        .shortest_distance(&grid, coord(from_x, from_y), coord(to_x, to_y))
        .map_or(-1, |d| d as i64)
}

// ========================
// C-ABI: Presentation data
// ========================

/// Scatter bonuses over a Ready build
#[no_mangle]
pub extern "C" fn maze_place_bonuses(
    build_json: *const c_char,
    seed: u64,
    difficulty_id: u32,
    timed: bool,
) -> *mut c_char {
    let Some(build) = parse_build(build_json) else {
        return std::ptr::null_mut();
    };
    let difficulty = Difficulty::from_id(difficulty_id);
    let profile = DifficultyProfile::for_difficulty(difficulty, &ScreenLayout::default());
    let plan = BonusPlan::for_profile(&profile, timed);
    let mut rng = MazeRng::seed_from_u64(seed);
    json_to_cstring(&BonusResponse {
        difficulty,
        timed,
        bonuses: place_bonuses(&build, &plan, &mut rng),
    })
}

/// Assign a sprite variant to every obstacle of a Ready build
#[no_mangle]
pub extern "C" fn maze_decorate_obstacles(
    build_json: *const c_char,
    seed: u64,
    theme_id: u32,
) -> *mut c_char {
    let Some(build) = parse_build(build_json) else {
        return std::ptr::null_mut();
    };
    let mut rng = MazeRng::seed_from_u64(seed);
    json_to_cstring(&ObstacleDecor::decorate(
        &build.grid,
        ObstacleTheme::from_id(theme_id),
        &mut rng,
    ))
}
