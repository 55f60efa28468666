use glam::Vec2;
use strum_macros::{Display, EnumIter};

/// A cardinal direction in screen space: `y` grows downwards, so North is `-Y`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// The unit vector for this direction.
    pub fn as_vec2(&self) -> Vec2 {
        (*self).into()
    }
}

impl From<Direction> for Vec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => -Vec2::Y,
            Direction::South => Vec2::Y,
            Direction::East => Vec2::X,
            Direction::West => -Vec2::X,
        }
    }
}

pub const DIRECTIONS: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];
