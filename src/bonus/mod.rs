//! Bonus placement on a Ready maze.
//!
//! Time bonuses (timed mode only) and speed boosts (every difficulty above
//! Easy) are scattered over free cells, at most one bonus per cell. What a
//! bonus does once collected is up to the gameplay layer.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SPEED_BOOSTS, MAX_TIME_BONUSES};
use crate::difficulty::DifficultyProfile;
use crate::generation::MazeBuild;
use crate::grid::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    TimeBonus,
    SpeedBoost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bonus {
    pub kind: BonusKind,
    pub cell: Coord,
}

/// How many bonuses of each kind to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BonusPlan {
    pub time_bonuses: usize,
    pub speed_boosts: usize,
}

impl BonusPlan {
    pub fn for_profile(profile: &DifficultyProfile, timed: bool) -> Self {
        Self {
            time_bonuses: if timed { MAX_TIME_BONUSES } else { 0 },
            speed_boosts: if profile.speed_boosts.is_some() {
                MAX_SPEED_BOOSTS
            } else {
                0
            },
        }
    }

    pub fn total(&self) -> usize {
        self.time_bonuses + self.speed_boosts
    }
}

/// Place bonuses on distinct free cells. Time bonuses are drawn first; when
/// free cells run out, the remaining bonuses are simply not placed.
pub fn place_bonuses<R: Rng + ?Sized>(
    build: &MazeBuild,
    plan: &BonusPlan,
    rng: &mut R,
) -> Vec<Bonus> {
    let mut free: Vec<Coord> = build.free_cells().collect();
    let kinds = std::iter::repeat(BonusKind::TimeBonus)
        .take(plan.time_bonuses)
        .chain(std::iter::repeat(BonusKind::SpeedBoost).take(plan.speed_boosts));

    let mut placed = Vec::with_capacity(plan.total().min(free.len()));
    for kind in kinds {
        if free.is_empty() {
            break;
        }
        let cell = free.swap_remove(rng.gen_range(0..free.len()));
        placed.push(Bonus { kind, cell });
    }
    placed
}
