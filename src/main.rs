//! Maze Core - CLI
//!
//! Builds a single maze from flags or a config file, or surveys many builds.

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use tracing::info;

use maze_core::cosmetics::ObstacleTheme;
use maze_core::generation::Presentation;
use maze_core::logging::{init_tracing, init_tracing_default};
use maze_core::survey::{run_survey, SurveyConfig};
use maze_core::{Difficulty, MazeBuild, MazeConfig, MazeSession};

/// Output of `build`: the maze plus its bonuses and obstacle variants
#[derive(Serialize)]
struct BuildOutput<'a> {
    build: &'a MazeBuild,
    presentation: Presentation,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            config,
            seed,
            difficulty,
            rows,
            cols,
            density,
            timed,
            theme,
            summary,
        } => {
            let config = match config {
                Some(path) => MazeConfig::load(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => MazeConfig {
                    seed,
                    difficulty: parse_difficulty(&difficulty)?,
                    rows,
                    cols,
                    obstacle_density: density,
                    timed,
                    theme: parse_theme(&theme)?,
                    ..MazeConfig::default()
                },
            };
            run_build(config, summary)
        }
        Command::Survey {
            seed,
            count,
            rows,
            cols,
            density,
        } => {
            init_tracing_default();
            let config = SurveyConfig {
                base_seed: seed,
                build_count: count,
                rows,
                cols,
                density,
            };
            let report = run_survey(&config).context("survey request rejected")?;
            println!("{}", report.to_json());
            Ok(())
        }
    }
}

fn parse_difficulty(name: &str) -> Result<Difficulty> {
    match name.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => bail!("unknown difficulty '{other}' (expected easy, medium or hard)"),
    }
}

fn parse_theme(name: &str) -> Result<ObstacleTheme> {
    match name.to_ascii_lowercase().as_str() {
        "space" => Ok(ObstacleTheme::Space),
        "jungle" => Ok(ObstacleTheme::Jungle),
        "desert" => Ok(ObstacleTheme::Desert),
        other => bail!("unknown theme '{other}' (expected space, jungle or desert)"),
    }
}

fn run_build(config: MazeConfig, summary: bool) -> Result<()> {
    init_tracing(&config.tracing);
    info!(seed = config.seed, difficulty = ?config.difficulty, "building maze");

    let mut session = MazeSession::new(config).context("invalid maze configuration")?;
    session.play_again().context("maze build failed")?;
    let (Some(build), Some(presentation)) = (session.current(), session.presentation()) else {
        bail!("session has no Ready build");
    };

    if summary {
        println!(
            "{}x{} start {} exit {} obstacles {}/{} solution {} bonuses {}",
            build.rows(),
            build.cols(),
            build.start,
            build.exit,
            build.obstacles.placed,
            build.obstacles.target,
            build
                .solution_length()
                .map_or_else(|| "none".to_string(), |n| n.to_string()),
            presentation.bonuses.len(),
        );
    } else {
        let output = BuildOutput {
            build,
            presentation,
        };
        println!("{}", serde_json::to_string(&output)?);
    }
    Ok(())
}
