//! Path oracle: A* reachability and shortest-path queries over a maze grid.
//!
//! Edges join orthogonal neighbours that are both in bounds, not obstacles and
//! not separated by a wall. Every edge costs 1 and the heuristic is Manhattan
//! distance, which is admissible and consistent on a 4-connected unit grid, so
//! the first time the goal is popped its cost is optimal.
//!
//! Equal-priority frontier entries are ordered by row-major cell index. Which
//! of several equally short paths is returned is therefore fixed for a given
//! grid, but callers must not treat that choice as meaningful.
//!
//! An unreachable goal is an ordinary answer (`None` / `false`), not an error.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::grid::{Coord, Grid};

const UNSEEN: usize = usize::MAX;

/// Reusable search state. The obstacle injector asks thousands of questions
/// against grids that differ by one cell, so the buffers are kept between
/// calls instead of being reallocated.
#[derive(Debug, Default)]
pub struct PathOracle {
    cost: Vec<usize>,
    parent: Vec<usize>,
    closed: Vec<bool>,
    frontier: BinaryHeap<Reverse<(usize, usize)>>,
    queries: u64,
}

impl PathOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of searches run by this oracle
    pub fn queries(&self) -> u64 {
        self.queries
    }

    pub fn is_reachable(&mut self, grid: &Grid, from: Coord, to: Coord) -> bool {
        self.search(grid, from, to).is_some()
    }

    /// Fewest steps from `from` to `to`, `None` when unreachable
    pub fn shortest_distance(&mut self, grid: &Grid, from: Coord, to: Coord) -> Option<usize> {
        self.search(grid, from, to)
    }

    /// One shortest path, both endpoints included
    pub fn shortest_path(&mut self, grid: &Grid, from: Coord, to: Coord) -> Option<Vec<Coord>> {
        self.search(grid, from, to)?;

        let mut path = Vec::new();
        let mut index = grid.index_of(to)?;
        let start = grid.index_of(from)?;
        path.push(to);
        while index != start {
            index = self.parent[index];
            path.push(grid.coord_of(index));
        }
        path.reverse();
        Some(path)
    }

    fn reset(&mut self, len: usize) {
        self.cost.clear();
        self.cost.resize(len, UNSEEN);
        self.parent.clear();
        self.parent.resize(len, UNSEEN);
        self.closed.clear();
        self.closed.resize(len, false);
        self.frontier.clear();
    }

    fn search(&mut self, grid: &Grid, from: Coord, to: Coord) -> Option<usize> {
        self.queries += 1;

        let start = grid.index_of(from)?;
        let goal = grid.index_of(to)?;
        if grid.is_obstacle(from) || grid.is_obstacle(to) {
            return None;
        }

        self.reset(grid.len());
        self.cost[start] = 0;
        self.frontier.push(Reverse((from.manhattan(to), start)));

        while let Some(Reverse((_, index))) = self.frontier.pop() {
            if index == goal {
                return Some(self.cost[goal]);
            }
            if self.closed[index] {
                continue;
            }
            self.closed[index] = true;

            let current = grid.coord_of(index);
            let next_cost = self.cost[index] + 1;
            for (dir, next) in grid.neighbors(current) {
                if !grid.can_move(current, dir) {
                    continue;
                }
                let Some(n) = grid.index_of(next) else {
                    continue;
                };
                if self.closed[n] || next_cost >= self.cost[n] {
                    continue;
                }
                self.cost[n] = next_cost;
                self.parent[n] = index;
                self.frontier
                    .push(Reverse((next_cost + next.manhattan(to), n)));
            }
        }

        None
    }
}

/// One-shot reachability query
pub fn is_reachable(grid: &Grid, from: Coord, to: Coord) -> bool {
    PathOracle::new().is_reachable(grid, from, to)
}

/// One-shot shortest step count
pub fn shortest_distance(grid: &Grid, from: Coord, to: Coord) -> Option<usize> {
    PathOracle::new().shortest_distance(grid, from, to)
}

/// One-shot shortest path
pub fn shortest_path(grid: &Grid, from: Coord, to: Coord) -> Option<Vec<Coord>> {
    PathOracle::new().shortest_path(grid, from, to)
}

/// Breadth-first flood fill; number of cells reachable from `from`
/// (including itself) under the current wall and obstacle state
pub fn reachable_cells(grid: &Grid, from: Coord) -> usize {
    let Some(start) = grid.index_of(from) else {
        return 0;
    };
    if grid.is_obstacle(from) {
        return 0;
    }

    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::from([from]);
    seen[start] = true;
    let mut count = 0;

    while let Some(current) = queue.pop_front() {
        count += 1;
        for (dir, next) in grid.neighbors(current) {
            if !grid.can_move(current, dir) {
                continue;
            }
            if let Some(n) = grid.index_of(next) {
                if !seen[n] {
                    seen[n] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    count
}
