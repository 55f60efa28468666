//! This module contains all the tunable defaults used by the simulation.

use std::time::Duration;

/// The speed actors move at when no pickups have been consumed, in units per tick.
pub const GAME_SPEED_START: f32 = 2.0;
/// The speed reached once every pickup has been consumed (speed boost only).
pub const MAX_SPEED: f32 = 10.0;
/// Whether consuming pickups ramps the global speed up towards [`MAX_SPEED`].
pub const USE_SPEED_BOOST: bool = true;

/// The radius of a single pickup.
pub const PICKUP_RADIUS: f32 = 10.0;
/// How sparsely pickups are spread out; the grid pitch is `2 * radius * sparsity`.
pub const PICKUP_SPARSITY: f32 = 5.0;
/// Upper bound on the number of grid cells a layout may produce.
pub const MAX_PICKUPS: usize = 65_536;
/// Points awarded for each pickup consumed.
pub const PICKUP_VALUE: u32 = 111;

/// The number of lives the player starts with.
pub const NUM_LIVES: u8 = 3;
/// The number of adversaries roaming the arena.
pub const NUM_ADVERSARIES: usize = 3;
/// Actors start evenly spaced on a circle of this radius around the arena origin.
pub const DISPERSION_RADIUS: f32 = 222.222;
/// Half-size of the player and adversary bodies, used for collision tests.
pub const ACTOR_EXTENT: f32 = 16.0;

/// Whether collisions are processed at all. Disabling this is the debug mode, in which
/// the player's movement is logged every tick instead.
pub const COLLISION_PROCESSING: bool = true;
/// Whether the pickup grid is generated.
pub const PICKUPS_ENABLED: bool = true;

/// How often the simulation ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(10);
/// How often each adversary picks a new random direction.
pub const RETARGET_PERIOD: Duration = Duration::from_millis(1000);

/// Arena dimensions used by the headless driver.
pub const ARENA_WIDTH: f32 = 800.0;
pub const ARENA_HEIGHT: f32 = 600.0;

/// Pickup animation sweep bounds, in degrees.
pub mod animation {
    pub const FULL_SWEEP: f32 = 360.0;
    pub const SWEEP_STEP: f32 = 1.0;
}
