//! Obstacle cosmetics side-table.
//!
//! Which sprite an obstacle uses is a presentation concern. The core only
//! flags obstacles; this table assigns an opaque variant tag to each confirmed
//! obstacle after the build is Ready. Tags have no effect on reachability.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::{Coord, Grid};

/// Visual theme that decides how many obstacle variants exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObstacleTheme {
    /// 2 x 16 asteroid sheet
    #[default]
    Space,
    /// 3 x 3 log sheet
    Jungle,
    /// Cactus or tumbleweed
    Desert,
}

impl ObstacleTheme {
    pub fn variant_count(&self) -> u16 {
        match self {
            Self::Space => 32,
            Self::Jungle => 9,
            Self::Desert => 2,
        }
    }

    pub fn from_id(id: u32) -> Self {
        match id {
            1 => Self::Jungle,
            2 => Self::Desert,
            _ => Self::Space,
        }
    }
}

/// Opaque presentation tag; meaningless to the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VariantTag(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleVariant {
    pub cell: Coord,
    pub tag: VariantTag,
}

/// Variant per obstacle, kept in row-major order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleDecor {
    pub theme: ObstacleTheme,
    variants: Vec<ObstacleVariant>,
}

impl ObstacleDecor {
    /// Tag every obstacle of a finished grid, in row-major order
    pub fn decorate<R: Rng + ?Sized>(grid: &Grid, theme: ObstacleTheme, rng: &mut R) -> Self {
        let count = theme.variant_count();
        let variants = grid
            .obstacles()
            .map(|cell| ObstacleVariant {
                cell,
                tag: VariantTag(rng.gen_range(0..count)),
            })
            .collect();
        Self { theme, variants }
    }

    pub fn tag(&self, coord: Coord) -> Option<VariantTag> {
        self.variants
            .binary_search_by_key(&(coord.y, coord.x), |v| (v.cell.y, v.cell.x))
            .ok()
            .map(|i| self.variants[i].tag)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObstacleVariant> + '_ {
        self.variants.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn grid_with_obstacles() -> Grid {
        let mut grid = Grid::new(4, 4);
        for coord in [Coord::new(1, 1), Coord::new(3, 0), Coord::new(2, 3)] {
            grid.set_obstacle(coord, true);
        }
        grid
    }

    #[test]
    fn test_every_obstacle_tagged() {
        let grid = grid_with_obstacles();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let decor = ObstacleDecor::decorate(&grid, ObstacleTheme::Jungle, &mut rng);
        assert_eq!(decor.len(), 3);
        for coord in grid.obstacles() {
            let tag = decor.tag(coord).unwrap();
            assert!(tag.0 < 9);
        }
        assert!(decor.tag(Coord::ORIGIN).is_none());
    }

    #[test]
    fn test_decor_does_not_touch_grid() {
        let grid = grid_with_obstacles();
        let before = grid.clone();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        let _ = ObstacleDecor::decorate(&grid, ObstacleTheme::Desert, &mut rng);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_decor_deterministic() {
        let grid = grid_with_obstacles();
        let a = ObstacleDecor::decorate(&grid, ObstacleTheme::Space, &mut Xoshiro256PlusPlus::seed_from_u64(3));
        let b = ObstacleDecor::decorate(&grid, ObstacleTheme::Space, &mut Xoshiro256PlusPlus::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_theme_ids() {
        assert_eq!(ObstacleTheme::from_id(1), ObstacleTheme::Jungle);
        assert_eq!(ObstacleTheme::from_id(2), ObstacleTheme::Desert);
        assert_eq!(ObstacleTheme::from_id(7), ObstacleTheme::Space);
        assert_eq!(ObstacleTheme::Space.variant_count(), 32);
    }
}
