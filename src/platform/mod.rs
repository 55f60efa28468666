//! Host services the simulation needs: randomness and tick pacing.

use std::time::Duration;

use rand::rngs::ThreadRng;

/// The random source used by sessions that don't supply their own.
pub fn rng() -> ThreadRng {
    rand::rng()
}

/// Sleeps for `duration`, spinning near the end for tick-accurate pacing.
pub fn sleep(duration: Duration) {
    spin_sleep::sleep(duration);
}
