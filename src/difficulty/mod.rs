//! Difficulty profiles and screen → grid dimension derivation.
//!
//! A profile is plain data. Cell size scales with the screen width, so harder
//! settings produce smaller cells and therefore larger grids.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{MazeError, MazeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Unknown ids fall back to Easy
    pub fn from_id(id: u32) -> Self {
        match id {
            1 => Self::Medium,
            2 => Self::Hard,
            _ => Self::Easy,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    pub fn cell_divisor(&self) -> u32 {
        match self {
            Self::Easy => EASY_CELL_DIVISOR,
            Self::Medium => MEDIUM_CELL_DIVISOR,
            Self::Hard => HARD_CELL_DIVISOR,
        }
    }

    pub fn obstacle_density(&self) -> f32 {
        match self {
            Self::Easy => EASY_OBSTACLE_DENSITY,
            Self::Medium => MEDIUM_OBSTACLE_DENSITY,
            Self::Hard => HARD_OBSTACLE_DENSITY,
        }
    }

    pub fn time_bonus_secs(&self) -> f32 {
        match self {
            Self::Easy => EASY_TIME_BONUS_SECS,
            Self::Medium => MEDIUM_TIME_BONUS_SECS,
            Self::Hard => HARD_TIME_BONUS_SECS,
        }
    }

    pub fn all() -> [Difficulty; 3] {
        [Self::Easy, Self::Medium, Self::Hard]
    }
}

/// Screen size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenLayout {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

impl ScreenLayout {
    pub fn margin(&self) -> u32 {
        self.width / MARGIN_DIVISOR
    }

    pub fn maze_width(&self) -> u32 {
        self.width.saturating_sub(2 * self.margin())
    }

    pub fn maze_height(&self) -> u32 {
        self.height.saturating_sub(2 * self.margin())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl GridDimensions {
    pub fn cells(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }
}

/// Speed boost parameters handed to the gameplay layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedBoostParams {
    pub duration_secs: f32,
    pub multiplier: f32,
}

impl Default for SpeedBoostParams {
    fn default() -> Self {
        Self {
            duration_secs: SPEED_BOOST_DURATION_SECS,
            multiplier: SPEED_BOOST_MULTIPLIER,
        }
    }
}

/// Configuration record consumed by a maze build
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub difficulty: Difficulty,
    /// Pixels per cell
    pub cell_size: u32,
    /// Fraction of cells to turn into obstacles
    pub obstacle_density: f32,
    /// Seconds granted per time bonus
    pub time_bonus_secs: f32,
    /// `None` when the difficulty spawns no speed boosts
    pub speed_boosts: Option<SpeedBoostParams>,
}

impl DifficultyProfile {
    pub fn for_difficulty(difficulty: Difficulty, screen: &ScreenLayout) -> Self {
        Self {
            difficulty,
            cell_size: screen.width / difficulty.cell_divisor(),
            obstacle_density: difficulty.obstacle_density(),
            time_bonus_secs: difficulty.time_bonus_secs(),
            speed_boosts: match difficulty {
                Difficulty::Easy => None,
                Difficulty::Medium | Difficulty::Hard => Some(SpeedBoostParams::default()),
            },
        }
    }

    /// rows/cols that fit the maze area of `screen`
    pub fn grid_dimensions(&self, screen: &ScreenLayout) -> MazeResult<GridDimensions> {
        if self.cell_size == 0 {
            return Err(MazeError::Config(format!(
                "cell size is zero for a {}px wide screen",
                screen.width
            )));
        }
        let dims = GridDimensions {
            rows: (screen.maze_height() / self.cell_size) as usize,
            cols: (screen.maze_width() / self.cell_size) as usize,
        };
        if dims.rows == 0 || dims.cols == 0 {
            return Err(MazeError::InvalidDimensions {
                rows: dims.rows,
                cols: dims.cols,
            });
        }
        Ok(dims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_ids() {
        for d in Difficulty::all() {
            assert_eq!(Difficulty::from_id(d.id()), d);
        }
        assert_eq!(Difficulty::from_id(99), Difficulty::Easy);
    }

    #[test]
    fn test_default_screen_easy_dimensions() {
        let screen = ScreenLayout::default();
        let profile = DifficultyProfile::for_difficulty(Difficulty::Easy, &screen);
        assert_eq!(profile.cell_size, 40);
        assert_eq!(screen.margin(), 30);
        let dims = profile.grid_dimensions(&screen).unwrap();
        // (1920 - 60) / 40 = 46, (1000 - 60) / 40 = 23
        assert_eq!(dims, GridDimensions { rows: 23, cols: 46 });
        assert!(profile.speed_boosts.is_none());
    }

    #[test]
    fn test_harder_means_bigger_grid() {
        let screen = ScreenLayout::default();
        let cells: Vec<usize> = Difficulty::all()
            .iter()
            .map(|d| {
                DifficultyProfile::for_difficulty(*d, &screen)
                    .grid_dimensions(&screen)
                    .unwrap()
                    .cells()
            })
            .collect();
        assert!(cells[0] < cells[1] && cells[1] < cells[2]);
    }

    #[test]
    fn test_profile_values() {
        let screen = ScreenLayout::default();
        let hard = DifficultyProfile::for_difficulty(Difficulty::Hard, &screen);
        assert_eq!(hard.cell_size, 24);
        assert_eq!(hard.obstacle_density, 0.25);
        assert_eq!(hard.time_bonus_secs, 5.0);
        let boost = hard.speed_boosts.unwrap();
        assert_eq!(boost.multiplier, 1.75);
        assert_eq!(boost.duration_secs, 5.0);
    }

    #[test]
    fn test_tiny_screen_is_rejected() {
        let screen = ScreenLayout { width: 40, height: 30 };
        let profile = DifficultyProfile::for_difficulty(Difficulty::Hard, &screen);
        assert_eq!(profile.cell_size, 0);
        assert!(profile.grid_dimensions(&screen).is_err());

        let screen = ScreenLayout { width: 480, height: 5 };
        let profile = DifficultyProfile::for_difficulty(Difficulty::Easy, &screen);
        assert!(matches!(
            profile.grid_dimensions(&screen),
            Err(MazeError::InvalidDimensions { rows: 0, .. })
        ));
    }
}
