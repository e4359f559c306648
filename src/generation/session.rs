//! Maze session: owns the current build and its rebuild lifecycle.
//!
//! Difficulty changes, resets and "play again" all discard the current grid
//! and restart the pipeline from `Generating`. Each rebuild advances the round
//! counter, and the round's RNG is derived from the session seed, so a whole
//! session can be replayed from its seed alone.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{build_maze, BuildPhase, MazeBuild, MazeSeed};
use crate::bonus::{place_bonuses, Bonus, BonusPlan};
use crate::config::MazeConfig;
use crate::cosmetics::ObstacleDecor;
use crate::difficulty::{Difficulty, DifficultyProfile};
use crate::error::MazeResult;
use crate::logging::TimingSpan;

/// What the presentation layer draws on top of a Ready build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub bonuses: Vec<Bonus>,
    pub decor: ObstacleDecor,
}

#[derive(Debug)]
pub struct MazeSession {
    config: MazeConfig,
    seed: MazeSeed,
    round: u64,
    phase: BuildPhase,
    current: Option<MazeBuild>,
}

impl MazeSession {
    /// Validates the config; no maze is built until the first rebuild
    pub fn new(config: MazeConfig) -> MazeResult<Self> {
        config.validate()?;
        Ok(Self {
            seed: MazeSeed::new(config.seed),
            config,
            round: 0,
            phase: BuildPhase::Uninitialized,
            current: None,
        })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    /// Number of the round the current build belongs to (0 before the first build)
    pub fn round(&self) -> u64 {
        self.round
    }

    /// The current build, only present once `Ready`
    pub fn current(&self) -> Option<&MazeBuild> {
        self.current.as_ref()
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.config.profile()
    }

    /// Start a new round with the current settings
    pub fn play_again(&mut self) -> MazeResult<&MazeBuild> {
        self.round += 1;
        self.rebuild()
    }

    /// Explicit reset; also moves to a fresh round
    pub fn reset(&mut self) -> MazeResult<&MazeBuild> {
        self.play_again()
    }

    /// Switch difficulty and rebuild in a fresh round
    pub fn change_difficulty(&mut self, difficulty: Difficulty) -> MazeResult<&MazeBuild> {
        info!(from = ?self.config.difficulty, to = ?difficulty, "difficulty changed");
        self.config.difficulty = difficulty;
        self.play_again()
    }

    /// Rebuild the current round; yields the same maze as before
    pub fn replay(&mut self) -> MazeResult<&MazeBuild> {
        self.rebuild()
    }

    /// Bonuses (per the `timed` setting and difficulty) and obstacle
    /// variants (per the configured theme) for the current build
    pub fn presentation(&self) -> Option<Presentation> {
        let build = self.current.as_ref()?;
        let mut rng = self.seed.presentation_rng(self.round);
        let plan = BonusPlan::for_profile(&self.profile(), self.config.timed);
        let bonuses = place_bonuses(build, &plan, &mut rng);
        let decor = ObstacleDecor::decorate(&build.grid, self.config.theme, &mut rng);
        Some(Presentation { bonuses, decor })
    }

    fn rebuild(&mut self) -> MazeResult<&MazeBuild> {
        let _timing = TimingSpan::new("rebuild");
        self.current = None;
        self.phase = BuildPhase::Generating;

        let result = self.config.build_request().and_then(|request| {
            let mut rng = self.seed.rng_for_round(self.round);
            build_maze(&request, &mut rng)
        });

        match result {
            Ok(build) => {
                self.phase = BuildPhase::Ready;
                let build = self.current.insert(build);
                Ok(&*build)
            }
            Err(e) => {
                warn!(round = self.round, error = %e, "maze build failed");
                self.phase = BuildPhase::Uninitialized;
                Err(e)
            }
        }
    }
}
