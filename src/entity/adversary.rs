//! Adversary payload: the randomized direction-change timer.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::entity::direction::DIRECTIONS;
use crate::entity::flags::MovementFlags;

/// Per-adversary timer state carried alongside the shared actor record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdversaryState {
    pub period: Duration,
    pub since_retarget: Duration,
}

impl AdversaryState {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            since_retarget: Duration::ZERO,
        }
    }

    /// Advances the timer, returning how many retargets fell due.
    ///
    /// The remainder carries over so the cadence does not drift with uneven `dt`.
    pub fn elapse(&mut self, dt: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.since_retarget += dt;
        let mut due = 0;
        while self.since_retarget >= self.period {
            self.since_retarget -= self.period;
            due += 1;
        }
        due
    }

    pub fn reset(&mut self) {
        self.since_retarget = Duration::ZERO;
    }
}

/// Randomly adds or removes a single direction.
///
/// Directions are shuffled first so there is no bias. Half the time the first active
/// direction is removed (or the flags forced stationary when none is active), otherwise
/// the first inactive direction is added.
pub fn retarget<R: Rng + ?Sized>(flags: &mut MovementFlags, rng: &mut R) {
    let mut dirs = DIRECTIONS;
    dirs.shuffle(rng);

    if rng.random_bool(0.5) {
        match dirs.iter().find(|dir| flags.is_moving(**dir)) {
            Some(dir) => flags.set_direction(*dir, false),
            None => flags.stop(),
        }
    } else if let Some(dir) = dirs.iter().find(|dir| !flags.is_moving(**dir)) {
        flags.set_direction(*dir, true);
    }
}
