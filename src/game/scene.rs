//! The simulation scene: owns every actor and runs the per-tick pipeline.

use std::f32::consts::TAU;
use std::time::Duration;

use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::arena::{layout::pickup_grid, Arena};
use crate::config::GameConfig;
use crate::entity::{
    adversary,
    collision::{CollisionProbe, RadiusProbe},
    direction::Direction,
    pickup::PickupState,
    Actor, ActorId, ActorKind,
};
use crate::error::{GameResult, SceneError};
use crate::events::SceneEvent;

/// Events raised by one tick. Rarely more than a couple.
pub type SceneEvents = SmallVec<[SceneEvent; 4]>;

/// The parts of [`GameConfig`] the scene needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSettings {
    pub adversary_count: usize,
    pub dispersion_radius: f32,
    pub actor_extent: f32,
    pub pickup_radius: f32,
    pub pickup_sparsity: f32,
    pub pickups_enabled: bool,
    pub collision_processing: bool,
    pub retarget_period: Duration,
}

impl From<&GameConfig> for SceneSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            adversary_count: config.adversary_count,
            dispersion_radius: config.dispersion_radius,
            actor_extent: config.actor_extent,
            pickup_radius: config.pickup_radius,
            pickup_sparsity: config.pickup_sparsity,
            pickups_enabled: config.pickups_enabled,
            collision_processing: config.collision_processing,
            retarget_period: config.retarget_period(),
        }
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

/// `count` points evenly spaced on a circle of `radius` around the origin.
///
/// The first point is straight "down" the `y` axis at `(0, radius)`.
pub fn spawn_positions(count: usize, radius: f32) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let angle = i as f32 * TAU / count as f32;
            Vec2::new(angle.sin() * radius, angle.cos() * radius)
        })
        .collect()
}

/// Owns the player, the adversaries and the pickups of one session.
///
/// Each tick advances every actor, wraps the mobile ones back into the arena and then,
/// if the session is running and collisions are enabled, checks the player against
/// adversaries and pickups.
pub struct SimulationScene {
    settings: SceneSettings,
    arena: Option<Arena>,
    player: Option<Actor>,
    adversaries: SmallVec<[Actor; 4]>,
    pickups: Vec<Actor>,
    pickups_consumed: u32,
    next_id: ActorId,
    probe: Box<dyn CollisionProbe>,
}

impl SimulationScene {
    pub fn new(settings: SceneSettings) -> Self {
        Self::with_probe(settings, Box::new(RadiusProbe))
    }

    pub fn with_probe(settings: SceneSettings, probe: Box<dyn CollisionProbe>) -> Self {
        Self {
            settings,
            arena: None,
            player: None,
            adversaries: SmallVec::new(),
            pickups: Vec::new(),
            pickups_consumed: 0,
            next_id: 0,
            probe,
        }
    }

    /// Creates every actor for a session played in `arena`. Runs once per session.
    ///
    /// The player and adversaries are spread on a circle around the origin, the player
    /// taking the first slot. The pickup grid is computed before anything is registered,
    /// so a layout failure leaves the scene untouched.
    pub fn generate<R: Rng + ?Sized>(&mut self, arena: Arena, rng: &mut R) -> GameResult<()> {
        if self.arena.is_some() || self.player.is_some() {
            return Err(SceneError::AlreadyGenerated.into());
        }

        let centers = if self.settings.pickups_enabled {
            pickup_grid(
                arena.width(),
                arena.height(),
                self.settings.pickup_radius,
                self.settings.pickup_sparsity,
            )?
        } else {
            Vec::new()
        };

        let starts = spawn_positions(self.settings.adversary_count + 1, self.settings.dispersion_radius);
        for (index, start) in starts.into_iter().enumerate() {
            let id = self.next_actor_id();
            let actor = if index == 0 {
                Actor::player(id, start, self.settings.actor_extent)
            } else {
                Actor::adversary(id, start, self.settings.actor_extent, self.settings.retarget_period)
            };
            self.register(actor)?;
        }

        for center in centers {
            let id = self.next_actor_id();
            let pickup = Actor::pickup(id, center, self.settings.pickup_radius, PickupState::random(rng));
            self.register(pickup)?;
        }

        self.arena = Some(arena);
        info!(
            width = arena.width(),
            height = arena.height(),
            adversaries = self.adversaries.len(),
            pickups = self.pickups.len(),
            "Scene generated"
        );
        Ok(())
    }

    /// Hands out the next unused actor id.
    pub fn next_actor_id(&mut self) -> ActorId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Adds an actor to the collection matching its kind.
    ///
    /// A second player is rejected and the scene is left unchanged.
    pub fn register(&mut self, actor: Actor) -> Result<(), SceneError> {
        trace!(id = actor.id, kind = %actor.kind, x = actor.position.x, y = actor.position.y, "Registering actor");
        match actor.kind {
            ActorKind::Player => {
                if self.player.is_some() {
                    return Err(SceneError::DuplicatePlayer);
                }
                self.player = Some(actor);
            }
            ActorKind::Adversary(_) => self.adversaries.push(actor),
            ActorKind::Pickup(_) => self.pickups.push(actor),
        }
        Ok(())
    }

    /// Runs one simulation step at the given global `speed`.
    ///
    /// Collisions are only checked while `running` and with collision processing enabled.
    /// The first adversary touching the player ends the check with a single
    /// [`SceneEvent::LifeLost`]. Otherwise every visible pickup under the player is
    /// consumed, and [`SceneEvent::GameWon`] follows if that emptied the board.
    pub fn tick(&mut self, speed: f32, running: bool) -> Result<SceneEvents, SceneError> {
        let player = self.player.as_mut().ok_or(SceneError::MissingPlayer)?;

        let delta = player.advance(speed);
        if !self.settings.collision_processing {
            debug!(
                flags = ?player.flags,
                stationary = player.flags.is_stationary(),
                dx = delta.x,
                dy = delta.y,
                speed,
                "Player movement"
            );
        }
        for adversary in self.adversaries.iter_mut() {
            adversary.advance(speed);
        }
        for pickup in self.pickups.iter_mut() {
            pickup.advance(speed);
        }

        if let Some(arena) = self.arena {
            player.position = arena.wrap(player.position);
            for adversary in self.adversaries.iter_mut() {
                adversary.position = arena.wrap(adversary.position);
            }
        }

        let mut events = SceneEvents::new();
        if !(running && self.settings.collision_processing) {
            return Ok(events);
        }

        let player = &*player;
        if let Some(adversary) = self.adversaries.iter().find(|adversary| self.probe.collides(player, adversary)) {
            debug!(adversary = adversary.id, "Player caught by adversary");
            events.push(SceneEvent::LifeLost { adversary: adversary.id });
            return Ok(events);
        }

        let mut consumed_now = 0;
        for pickup in self.pickups.iter_mut() {
            if !pickup.is_visible() || !self.probe.collides(player, pickup) {
                continue;
            }
            if let Some(state) = pickup.pickup_state_mut() {
                state.visible = false;
            }
            self.pickups_consumed += 1;
            consumed_now += 1;
            events.push(SceneEvent::PickupConsumed {
                pickup: pickup.id,
                consumed: self.pickups_consumed,
            });
        }

        // Only the tick that consumed the last pickup reports the win
        if consumed_now > 0 && self.pickups_consumed as usize == self.pickups.len() {
            info!(pickups = self.pickups_consumed, "All pickups consumed");
            events.push(SceneEvent::GameWon);
        }

        Ok(events)
    }

    /// Puts every actor back at its start, stationary, and shows every pickup again.
    pub fn reset(&mut self) -> Result<(), SceneError> {
        let player = self.player.as_mut().ok_or(SceneError::MissingPlayer)?;
        player.reset();
        for actor in self.adversaries.iter_mut().chain(self.pickups.iter_mut()) {
            actor.reset();
        }
        self.pickups_consumed = 0;
        debug!("Scene reset");
        Ok(())
    }

    /// Sets or clears one of the player's directions.
    pub fn set_player_direction(&mut self, direction: Direction, active: bool) -> Result<(), SceneError> {
        let player = self.player.as_mut().ok_or(SceneError::MissingPlayer)?;
        player.flags.set_direction(direction, active);
        Ok(())
    }

    /// Clears every direction of the player.
    pub fn stop_player(&mut self) -> Result<(), SceneError> {
        let player = self.player.as_mut().ok_or(SceneError::MissingPlayer)?;
        player.flags.stop();
        Ok(())
    }

    /// Advances every adversary's retarget timer by `dt`, retargeting those that are due.
    ///
    /// Returns the number of retargets performed.
    pub fn elapse<R: Rng + ?Sized>(&mut self, dt: Duration, rng: &mut R) -> usize {
        let mut retargets = 0;
        for actor in self.adversaries.iter_mut() {
            let due = actor.adversary_state_mut().map_or(0, |state| state.elapse(dt));
            for _ in 0..due {
                adversary::retarget(&mut actor.flags, rng);
                retargets += 1;
            }
        }
        retargets
    }

    /// Immediately picks a new random direction for the adversary at `index`.
    pub fn retarget_adversary<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> Result<(), SceneError> {
        let actor = self.adversaries.get_mut(index).ok_or(SceneError::AdversaryIndex(index))?;
        adversary::retarget(&mut actor.flags, rng);
        trace!(id = actor.id, flags = ?actor.flags, "Adversary retargeted");
        Ok(())
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    pub fn arena(&self) -> Option<Arena> {
        self.arena
    }

    pub fn is_generated(&self) -> bool {
        self.player.is_some()
    }

    pub fn player(&self) -> Option<&Actor> {
        self.player.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut Actor> {
        self.player.as_mut()
    }

    pub fn adversaries(&self) -> &[Actor] {
        &self.adversaries
    }

    pub fn adversaries_mut(&mut self) -> &mut [Actor] {
        &mut self.adversaries
    }

    pub fn pickups(&self) -> &[Actor] {
        &self.pickups
    }

    pub fn pickups_mut(&mut self) -> &mut [Actor] {
        &mut self.pickups
    }

    /// Every actor, player first, then adversaries, then pickups.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.player.iter().chain(self.adversaries.iter()).chain(self.pickups.iter())
    }

    pub fn pickups_consumed(&self) -> u32 {
        self.pickups_consumed
    }

    /// Layouts are capped well below `u32::MAX`; saturates for hand-registered scenes.
    pub fn total_pickups(&self) -> u32 {
        u32::try_from(self.pickups.len()).unwrap_or(u32::MAX)
    }
}
