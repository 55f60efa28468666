//! Speed ramp tying consumed pickups to the global actor speed.

/// Maps the number of pickups consumed to the speed every mobile actor moves at.
///
/// With the boost enabled the speed climbs linearly from `start_speed`, reaching exactly
/// `max_speed` once every pickup is gone. With it disabled the speed never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyModel {
    start_speed: f32,
    max_speed: f32,
    increment: f32,
    total_pickups: u32,
    boost_enabled: bool,
    current: f32,
}

impl DifficultyModel {
    pub fn new(start_speed: f32, max_speed: f32, total_pickups: u32, boost_enabled: bool) -> Self {
        let increment = if total_pickups == 0 {
            0.0
        } else {
            (max_speed - start_speed) / total_pickups as f32
        };

        Self {
            start_speed,
            max_speed,
            increment,
            total_pickups,
            boost_enabled,
            current: start_speed,
        }
    }

    /// Recomputes the current speed for `consumed` pickups and returns it.
    pub fn recompute(&mut self, consumed: u32) -> f32 {
        self.current = self.speed_for(consumed);
        self.current
    }

    /// The speed for `consumed` pickups, without updating the model.
    pub fn speed_for(&self, consumed: u32) -> f32 {
        if !self.boost_enabled || self.total_pickups == 0 {
            return self.start_speed;
        }
        if consumed >= self.total_pickups {
            return self.max_speed;
        }
        (self.start_speed + self.increment * consumed as f32).min(self.max_speed)
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn increment(&self) -> f32 {
        self.increment
    }

    pub fn boost_enabled(&self) -> bool {
        self.boost_enabled
    }

    /// How far along the ramp the current speed is, as a rounded percentage.
    pub fn boost_percent(&self) -> u8 {
        let range = self.max_speed - self.start_speed;
        if range <= 0.0 {
            return 0;
        }
        let fraction = ((self.current - self.start_speed) / range).clamp(0.0, 1.0);
        (fraction * 100.0).round() as u8
    }
}
