//! Maze configuration (JSON).
//!
//! Every field has a default, so a config file only needs the values it
//! changes. A config is validated as a whole before anything is built; an
//! invalid file never replaces a working configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::constants::{DEFAULT_SEED, EXIT_ATTEMPTS_PER_CELL, OBSTACLE_ATTEMPTS_PER_CELL};
use crate::cosmetics::ObstacleTheme;
use crate::difficulty::{Difficulty, DifficultyProfile, GridDimensions, ScreenLayout};
use crate::error::{MazeError, MazeResult};
use crate::generation::BuildRequest;
use crate::grid::Coord;
use crate::logging::TracingConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub seed: u64,
    pub difficulty: Difficulty,
    pub screen: ScreenLayout,
    /// Explicit grid size; overrides the screen-derived value when both are set
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    /// Overrides the difficulty's density
    pub obstacle_density: Option<f32>,
    pub start: Coord,
    pub timed: bool,
    pub theme: ObstacleTheme,
    pub exit_attempts_per_cell: usize,
    pub obstacle_attempts_per_cell: usize,
    pub tracing: TracingConfig,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            difficulty: Difficulty::Easy,
            screen: ScreenLayout::default(),
            rows: None,
            cols: None,
            obstacle_density: None,
            start: Coord::ORIGIN,
            timed: false,
            theme: ObstacleTheme::Space,
            exit_attempts_per_cell: EXIT_ATTEMPTS_PER_CELL,
            obstacle_attempts_per_cell: OBSTACLE_ATTEMPTS_PER_CELL,
            tracing: TracingConfig::default(),
        }
    }
}

impl MazeConfig {
    pub fn from_json(json: &str) -> MazeResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Read, parse and validate a config file
    pub fn load(path: impl AsRef<Path>) -> MazeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!(path = %path.display(), difficulty = ?config.difficulty, "config loaded");
        Ok(config)
    }

    pub fn profile(&self) -> DifficultyProfile {
        let mut profile = DifficultyProfile::for_difficulty(self.difficulty, &self.screen);
        if let Some(density) = self.obstacle_density {
            profile.obstacle_density = density;
        }
        profile
    }

    pub fn dimensions(&self) -> MazeResult<GridDimensions> {
        match (self.rows, self.cols) {
            (Some(rows), Some(cols)) => Ok(GridDimensions { rows, cols }),
            (None, None) => self.profile().grid_dimensions(&self.screen),
            _ => Err(MazeError::Config(
                "rows and cols must be set together".to_string(),
            )),
        }
    }

    pub fn build_request(&self) -> MazeResult<BuildRequest> {
        let dims = self.dimensions()?;
        let mut request = BuildRequest::new(dims.rows, dims.cols, self.profile().obstacle_density)
            .with_start(self.start);
        request.exit_attempts_per_cell = self.exit_attempts_per_cell;
        request.obstacle_attempts_per_cell = self.obstacle_attempts_per_cell;
        Ok(request)
    }

    pub fn validate(&self) -> MazeResult<()> {
        if self.exit_attempts_per_cell == 0 || self.obstacle_attempts_per_cell == 0 {
            return Err(MazeError::Config(
                "attempt ceilings must be positive".to_string(),
            ));
        }
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(MazeError::Config(format!(
                "screen {}x{} has no area",
                self.screen.width, self.screen.height
            )));
        }
        self.build_request()?.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = MazeConfig::default();
        config.validate().unwrap();
        let request = config.build_request().unwrap();
        assert_eq!((request.rows, request.cols), (23, 46));
        assert_eq!(request.obstacle_density, 0.15);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MazeConfig::from_json(r#"{"seed": 7, "difficulty": "Hard"}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.screen, ScreenLayout::default());
        assert_eq!(config.profile().obstacle_density, 0.25);
    }

    #[test]
    fn test_explicit_dimensions_and_density() {
        let config = MazeConfig::from_json(
            r#"{"rows": 20, "cols": 20, "obstacle_density": 0.1, "start": {"x": 3, "y": 2}}"#,
        )
        .unwrap();
        let request = config.build_request().unwrap();
        assert_eq!((request.rows, request.cols), (20, 20));
        assert_eq!(request.obstacle_density, 0.1);
        assert_eq!(request.start, Coord::new(3, 2));
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(matches!(
            MazeConfig::from_json(r#"{"rows": 5}"#),
            Err(MazeError::Config(_))
        ));
        assert!(matches!(
            MazeConfig::from_json(r#"{"exit_attempts_per_cell": 0}"#),
            Err(MazeError::Config(_))
        ));
        assert!(matches!(
            MazeConfig::from_json(r#"{"rows": 4, "cols": 4, "start": {"x": 9, "y": 0}}"#),
            Err(MazeError::StartOutOfBounds { .. })
        ));
        assert!(matches!(
            MazeConfig::from_json(r#"{"obstacle_density": 1.5}"#),
            Err(MazeError::InvalidDensity(_))
        ));
        assert!(matches!(
            MazeConfig::from_json("{ broken"),
            Err(MazeError::Json(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"seed": 99, "timed": true, "theme": "Desert"}}"#).unwrap();
        let config = MazeConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, 99);
        assert!(config.timed);
        assert_eq!(config.theme, ObstacleTheme::Desert);
    }

    #[test]
    fn test_load_missing_file() {
        let err = MazeConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, MazeError::Io(_)));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = MazeConfig {
            seed: 5,
            rows: Some(9),
            cols: Some(11),
            ..MazeConfig::default()
        };
        let restored = MazeConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(restored, config);
    }
}
