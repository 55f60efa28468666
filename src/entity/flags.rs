use bitflags::bitflags;
use glam::Vec2;

use crate::entity::direction::{Direction, DIRECTIONS};

bitflags! {
    /// The set of directions an actor is currently moving in.
    ///
    /// `STATIONARY` is a real bit rather than the empty set. It is exclusive with the
    /// directional bits: setting any direction clears it, and clearing the last
    /// direction sets it again. Opposing directions may be active together, in which
    /// case the actor is not stationary but its movement vector cancels out.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MovementFlags: u8 {
        const STATIONARY = 1 << 0;
        const NORTH = 1 << 1;
        const SOUTH = 1 << 2;
        const EAST = 1 << 3;
        const WEST = 1 << 4;

        const DIRECTIONAL = Self::NORTH.bits() | Self::SOUTH.bits() | Self::EAST.bits() | Self::WEST.bits();
    }
}

impl Default for MovementFlags {
    fn default() -> Self {
        Self::STATIONARY
    }
}

impl From<Direction> for MovementFlags {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => MovementFlags::NORTH,
            Direction::South => MovementFlags::SOUTH,
            Direction::East => MovementFlags::EAST,
            Direction::West => MovementFlags::WEST,
        }
    }
}

impl MovementFlags {
    /// Returns these flags with `dir` set or cleared, leaving other directions untouched.
    #[must_use]
    pub fn with_direction(self, dir: Direction, active: bool) -> Self {
        let mut flags = self;
        flags.set(dir.into(), active);
        if flags.intersects(Self::DIRECTIONAL) {
            flags.remove(Self::STATIONARY);
            flags
        } else {
            Self::STATIONARY
        }
    }

    pub fn set_direction(&mut self, dir: Direction, active: bool) {
        *self = self.with_direction(dir, active);
    }

    /// Clears every direction.
    pub fn stop(&mut self) {
        *self = Self::STATIONARY;
    }

    /// True only for the exact `STATIONARY` value.
    pub fn is_stationary(&self) -> bool {
        *self == Self::STATIONARY
    }

    pub fn is_moving(&self, dir: Direction) -> bool {
        self.contains(dir.into())
    }

    /// Iterates the active directions in `North, South, East, West` order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        DIRECTIONS.into_iter().filter(|dir| self.is_moving(*dir))
    }

    /// Sum of the unit vectors of every active direction. Not normalized.
    pub fn active_vector(&self) -> Vec2 {
        if self.is_stationary() {
            return Vec2::ZERO;
        }
        self.directions().map(Vec2::from).sum()
    }
}
