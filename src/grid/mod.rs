//! Grid model: cells, walls and neighbour arithmetic.
//!
//! The grid is stored row-major. Every wall is recorded twice (once on each
//! cell that shares it) and every mutation goes through `set_wall`, which keeps
//! both copies in agreement.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid coordinate: `x` is the column, `y` is the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// |dx| + |dy|
    pub fn manhattan(&self, other: Coord) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned direction. The discriminant is the wall index in `Cell::walls`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(Self::North),
            1 => Some(Self::East),
            2 => Some(Self::South),
            3 => Some(Self::West),
            _ => None,
        }
    }

    /// (dx, dy) with y growing downwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

/// A single maze cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    /// North, East, South, West
    pub walls: [bool; 4],
    /// Generation bookkeeping only
    pub visited: bool,
    pub obstacle: bool,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            walls: [true; 4],
            visited: false,
            obstacle: false,
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }
}

/// rows x cols array of cells, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form; converted through `TryFrom` so a deserialized grid
/// always has one cell per coordinate in row-major order
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = String;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let expected = raw.rows.checked_mul(raw.cols).ok_or("grid too large")?;
        if raw.cells.len() != expected {
            return Err(format!(
                "{}x{} grid needs {} cells, got {}",
                raw.rows,
                raw.cols,
                expected,
                raw.cells.len()
            ));
        }
        let misplaced = raw
            .cells
            .iter()
            .enumerate()
            .any(|(i, c)| c.x != i % raw.cols || c.y != i / raw.cols);
        if misplaced {
            return Err("cells are not in row-major order".to_string());
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Allocate a grid of default cells (all walls up, unvisited, no obstacles)
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for y in 0..rows {
            for x in 0..cols {
                cells.push(Cell::new(x, y));
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Restore every cell to its freshly allocated state
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.walls = [true; 4];
            cell.visited = false;
            cell.obstacle = false;
        }
    }

    /// Bounds check on signed coordinates; off-grid neighbours return false
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.cols && coord.y < self.rows
    }

    /// Row-major index of an in-bounds coordinate
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord).then(|| coord.y * self.cols + coord.x)
    }

    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index % self.cols, index / self.cols)
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index_of(coord).map(|i| &self.cells[i])
    }

    pub fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index_of(coord).map(move |i| &mut self.cells[i])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The neighbour in `direction`, or `None` at the boundary
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        if !self.in_bounds(coord) {
            return None;
        }
        let (dx, dy) = direction.delta();
        let nx = coord.x as isize + dx;
        let ny = coord.y as isize + dy;
        self.contains(nx, ny)
            .then(|| Coord::new(nx as usize, ny as usize))
    }

    /// Up to four in-bounds neighbours, in North, East, South, West order
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(coord, dir).map(|n| (dir, n)))
    }

    pub fn has_wall(&self, coord: Coord, direction: Direction) -> bool {
        self.cell(coord).map_or(true, |c| c.has_wall(direction))
    }

    /// Set or clear the wall between `coord` and its neighbour on both cells.
    /// Returns false when there is no neighbour (outer boundary or off-grid).
    pub fn set_wall(&mut self, coord: Coord, direction: Direction, present: bool) -> bool {
        let Some(next) = self.neighbor(coord, direction) else {
            return false;
        };
        let (a, b) = match (self.index_of(coord), self.index_of(next)) {
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };
        self.cells[a].walls[direction.index()] = present;
        self.cells[b].walls[direction.opposite().index()] = present;
        true
    }

    /// Remove the wall between two orthogonally adjacent cells
    pub fn remove_wall_between(&mut self, a: Coord, b: Coord) -> bool {
        match direction_between(a, b) {
            Some(dir) => self.set_wall(a, dir, false),
            None => false,
        }
    }

    pub fn is_obstacle(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|c| c.obstacle)
    }

    pub fn set_obstacle(&mut self, coord: Coord, obstacle: bool) -> bool {
        match self.cell_mut(coord) {
            Some(cell) => {
                cell.obstacle = obstacle;
                true
            }
            None => false,
        }
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|c| c.visited)
    }

    pub(crate) fn set_visited(&mut self, coord: Coord, visited: bool) {
        if let Some(cell) = self.cell_mut(coord) {
            cell.visited = visited;
        }
    }

    /// Clear generation bookkeeping before handing the grid out
    pub(crate) fn clear_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }

    /// Edge test used by the path oracle: in bounds, no wall, target passable
    pub fn can_move(&self, from: Coord, direction: Direction) -> bool {
        match self.neighbor(from, direction) {
            Some(next) => !self.has_wall(from, direction) && !self.is_obstacle(next),
            None => false,
        }
    }

    /// Number of opened wall pairs (each interior edge counted once)
    pub fn open_wall_pairs(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                let east = cell.x + 1 < self.cols && !cell.has_wall(Direction::East);
                let south = cell.y + 1 < self.rows && !cell.has_wall(Direction::South);
                east as usize + south as usize
            })
            .sum()
    }

    pub fn obstacles(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().filter(|c| c.obstacle).map(Cell::coord)
    }

    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.obstacle).count()
    }

    /// Every shared wall agrees on both sides and no boundary wall is open
    pub fn walls_symmetric(&self) -> bool {
        self.cells.iter().all(|cell| {
            Direction::ALL.into_iter().all(|dir| {
                let here = cell.has_wall(dir);
                match self.neighbor(cell.coord(), dir) {
                    Some(next) => self.has_wall(next, dir.opposite()) == here,
                    None => here,
                }
            })
        })
    }
}

/// Direction from `a` to an orthogonally adjacent `b`
pub fn direction_between(a: Coord, b: Coord) -> Option<Direction> {
    let dx = b.x as isize - a.x as isize;
    let dy = b.y as isize - a.y as isize;
    match (dx, dy) {
        (0, -1) => Some(Direction::North),
        (1, 0) => Some(Direction::East),
        (0, 1) => Some(Direction::South),
        (-1, 0) => Some(Direction::West),
        _ => None,
    }
}
