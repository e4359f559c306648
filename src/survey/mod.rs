//! Batch maze survey
//!
//! Builds many independent mazes across CPU cores and aggregates obstacle
//! and path statistics. Used to check that a density/size combination
//! reliably reaches its obstacle target before shipping it as a preset.
//! Uses rayon; builds share no state.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::DEFAULT_SEED;
use crate::error::MazeResult;
use crate::generation::{build_maze_seeded, BuildRequest, MazeSeed};
use crate::logging::TimingSpan;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurveyConfig {
    pub base_seed: u64,
    pub build_count: u64,
    pub rows: usize,
    pub cols: usize,
    pub density: f32,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            base_seed: DEFAULT_SEED,
            build_count: 200,
            rows: 20,
            cols: 20,
            density: 0.2,
        }
    }
}

impl SurveyConfig {
    pub fn request(&self) -> BuildRequest {
        BuildRequest::new(self.rows, self.cols, self.density)
    }

    /// Seed of the `index`-th build; the same derivation a session uses per round
    pub fn build_seed(&self, index: u64) -> u64 {
        MazeSeed::new(self.base_seed).round_hash(index)
    }
}

/// Outcome of a single surveyed build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct BuildSample {
    obstacles: usize,
    partial: bool,
    solution_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub total_builds: u64,
    pub failures: u64,
    pub partial_builds: u64,
    pub obstacle_target: usize,
    pub min_obstacles: usize,
    pub max_obstacles: usize,
    pub avg_obstacles: f32,
    pub avg_solution_length: f32,
}

impl SurveyReport {
    /// Share of attempted builds that ended Ready with the full obstacle target
    pub fn success_rate(&self) -> f32 {
        if self.total_builds == 0 {
            return 0.0;
        }
        let complete = self.total_builds - self.failures - self.partial_builds;
        complete as f32 / self.total_builds as f32
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Run `build_count` builds in parallel. Rejects the request up front if it
/// could never build; individual build failures are counted, not returned.
pub fn run_survey(config: &SurveyConfig) -> MazeResult<SurveyReport> {
    let request = config.request();
    request.validate()?;
    let _timing = TimingSpan::new("survey");

    let seeds: Vec<u64> = (0..config.build_count)
        .map(|i| config.build_seed(i))
        .collect();

    let samples: Vec<Option<BuildSample>> = seeds
        .par_iter()
        .map(|seed| {
            let build = build_maze_seeded(&request, *seed).ok()?;
            Some(BuildSample {
                obstacles: build.obstacles.placed,
                partial: build.obstacles.is_partial(),
                solution_length: build.solution_length()?,
            })
        })
        .collect();

    let report = summarize(&samples, request.obstacle_target());
    info!(
        builds = report.total_builds,
        failures = report.failures,
        partial = report.partial_builds,
        avg_obstacles = report.avg_obstacles,
        "survey complete"
    );
    Ok(report)
}

fn summarize(samples: &[Option<BuildSample>], obstacle_target: usize) -> SurveyReport {
    let ok: Vec<&BuildSample> = samples.iter().flatten().collect();
    let total_builds = samples.len() as u64;
    let failures = total_builds - ok.len() as u64;

    if ok.is_empty() {
        return SurveyReport {
            total_builds,
            failures,
            partial_builds: 0,
            obstacle_target,
            min_obstacles: 0,
            max_obstacles: 0,
            avg_obstacles: 0.0,
            avg_solution_length: 0.0,
        };
    }

    let n = ok.len() as f32;
    SurveyReport {
        total_builds,
        failures,
        partial_builds: ok.iter().filter(|s| s.partial).count() as u64,
        obstacle_target,
        min_obstacles: ok.iter().map(|s| s.obstacles).min().unwrap_or(0),
        max_obstacles: ok.iter().map(|s| s.obstacles).max().unwrap_or(0),
        avg_obstacles: ok.iter().map(|s| s.obstacles as f32).sum::<f32>() / n,
        avg_solution_length: ok.iter().map(|s| s.solution_length as f32).sum::<f32>() / n,
    }
}
