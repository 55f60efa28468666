//! Pickup payload: visibility and the pulsing arc animation.

use rand::Rng;

use crate::constants::animation::{FULL_SWEEP, SWEEP_STEP};

/// Per-pickup state carried alongside the shared actor record.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupState {
    pub visible: bool,
    /// Sweep of the outer arc, in degrees. The inner arc sweeps the remainder.
    pub outer_sweep: f32,
    pub shrinking: bool,
    /// Angle the arcs start drawing from, fixed for the pickup's lifetime.
    pub start_angle: f32,
}

impl PickupState {
    pub fn new(start_angle: f32) -> Self {
        Self {
            visible: true,
            outer_sweep: FULL_SWEEP,
            shrinking: true,
            start_angle,
        }
    }

    /// Creates a pickup whose animation starts at a random angle.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random_range(0.0..FULL_SWEEP))
    }

    pub fn inner_sweep(&self) -> f32 {
        FULL_SWEEP - self.outer_sweep
    }

    /// Steps the animation by one tick, bouncing between an empty and a full outer arc.
    pub fn animate(&mut self) {
        if self.shrinking {
            self.outer_sweep -= SWEEP_STEP;
            if self.outer_sweep <= 0.0 {
                self.outer_sweep = 0.0;
                self.shrinking = false;
            }
        } else {
            self.outer_sweep += SWEEP_STEP;
            if self.outer_sweep >= FULL_SWEEP {
                self.outer_sweep = FULL_SWEEP;
                self.shrinking = true;
            }
        }
    }

    /// Makes the pickup visible again and restarts its animation.
    pub fn reset(&mut self) {
        self.visible = true;
        self.outer_sweep = FULL_SWEEP;
        self.shrinking = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_bounces() {
        let mut pickup = PickupState::new(0.0);
        for _ in 0..360 {
            pickup.animate();
        }
        assert_eq!(pickup.outer_sweep, 0.0);
        assert!(!pickup.shrinking);
        assert_eq!(pickup.inner_sweep(), FULL_SWEEP);

        for _ in 0..360 {
            pickup.animate();
        }
        assert_eq!(pickup.outer_sweep, FULL_SWEEP);
        assert!(pickup.shrinking);
    }

    #[test]
    fn test_reset_restores_visibility_and_phase() {
        let mut pickup = PickupState::new(45.0);
        pickup.visible = false;
        pickup.animate();
        pickup.reset();
        assert_eq!(pickup, PickupState::new(45.0));
    }
}
