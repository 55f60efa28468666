//! The toroidal arena: bounds centred on the origin whose opposite edges are joined.

use glam::Vec2;

use crate::error::ArenaError;

pub mod layout;

/// A rectangular arena centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    width: f32,
    height: f32,
}

impl Arena {
    /// Both dimensions must be finite and at least `1.0`.
    pub fn new(width: f32, height: f32) -> Result<Self, ArenaError> {
        if !(width.is_finite() && height.is_finite() && width >= 1.0 && height >= 1.0) {
            return Err(ArenaError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    /// Whether `position` lies within the closed bounds.
    pub fn contains(&self, position: Vec2) -> bool {
        let half = self.half_extents();
        position.x.abs() <= half.x && position.y.abs() <= half.y
    }

    /// Moves a position that left the arena back in through the opposite edge.
    ///
    /// Each axis is corrected independently. In-bounds positions are returned unchanged,
    /// so applying this twice is the same as applying it once.
    pub fn wrap(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            wrap_axis(position.x, self.width),
            wrap_axis(position.y, self.height),
        )
    }
}

/// Shifts `value` by whole multiples of `size` until it lies in `[-size/2, size/2]`.
///
/// A value at most one `size` out of bounds is shifted exactly once.
fn wrap_axis(value: f32, size: f32) -> f32 {
    let half = size * 0.5;
    if value < -half {
        let laps = ((-half - value) / size).ceil();
        value + laps * size
    } else if value > half {
        let laps = ((value - half) / size).ceil();
        value - laps * size
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_axis_single_lap() {
        assert_eq!(wrap_axis(-60.0, 100.0), 40.0);
        assert_eq!(wrap_axis(60.0, 100.0), -40.0);
        assert_eq!(wrap_axis(50.0, 100.0), 50.0);
        assert_eq!(wrap_axis(-50.0, 100.0), -50.0);
    }

    #[test]
    fn test_wrap_axis_many_laps() {
        assert_eq!(wrap_axis(260.0, 100.0), -40.0);
        assert_eq!(wrap_axis(-260.0, 100.0), 40.0);
    }

    #[test]
    fn test_arena_rejects_small_dimensions() {
        assert!(Arena::new(0.5, 10.0).is_err());
        assert!(Arena::new(10.0, f32::NAN).is_err());
        assert!(Arena::new(1.0, 1.0).is_ok());
    }
}
