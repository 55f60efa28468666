//! Actors: the shared position/movement record plus a per-kind payload.

use std::time::Duration;

use glam::Vec2;
use strum_macros::Display;

pub mod adversary;
pub mod collision;
pub mod direction;
pub mod flags;
pub mod pickup;

use adversary::AdversaryState;
use flags::MovementFlags;
use pickup::PickupState;

/// Unique identifier for an actor within a scene.
pub type ActorId = u32;

/// What kind of actor this is, with the state only that kind needs.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ActorKind {
    Player,
    Adversary(AdversaryState),
    Pickup(PickupState),
}

/// An entity taking part in the simulation tick.
///
/// The start position is fixed at construction and restored by [`Actor::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: ActorId,
    pub position: Vec2,
    start_position: Vec2,
    pub flags: MovementFlags,
    /// Radius used by collision tests.
    pub extent: f32,
    pub kind: ActorKind,
}

impl Actor {
    fn new(id: ActorId, start_position: Vec2, extent: f32, kind: ActorKind) -> Self {
        Self {
            id,
            position: start_position,
            start_position,
            flags: MovementFlags::default(),
            extent,
            kind,
        }
    }

    pub fn player(id: ActorId, start_position: Vec2, extent: f32) -> Self {
        Self::new(id, start_position, extent, ActorKind::Player)
    }

    pub fn adversary(id: ActorId, start_position: Vec2, extent: f32, retarget_period: Duration) -> Self {
        Self::new(id, start_position, extent, ActorKind::Adversary(AdversaryState::new(retarget_period)))
    }

    pub fn pickup(id: ActorId, center: Vec2, radius: f32, state: PickupState) -> Self {
        Self::new(id, center, radius, ActorKind::Pickup(state))
    }

    pub fn start_position(&self) -> Vec2 {
        self.start_position
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, ActorKind::Player)
    }

    /// Players and adversaries move and wrap; pickups never do.
    pub fn is_mobile(&self) -> bool {
        !matches!(self.kind, ActorKind::Pickup(_))
    }

    /// Pickups can be hidden once consumed; everything else is always visible.
    pub fn is_visible(&self) -> bool {
        match &self.kind {
            ActorKind::Pickup(pickup) => pickup.visible,
            _ => true,
        }
    }

    pub fn pickup_state(&self) -> Option<&PickupState> {
        match &self.kind {
            ActorKind::Pickup(pickup) => Some(pickup),
            _ => None,
        }
    }

    pub fn pickup_state_mut(&mut self) -> Option<&mut PickupState> {
        match &mut self.kind {
            ActorKind::Pickup(pickup) => Some(pickup),
            _ => None,
        }
    }

    pub fn adversary_state_mut(&mut self) -> Option<&mut AdversaryState> {
        match &mut self.kind {
            ActorKind::Adversary(adversary) => Some(adversary),
            _ => None,
        }
    }

    /// Advances the actor by one tick and returns how far it moved.
    ///
    /// Mobile actors move `speed` units along the sum of their active directions.
    /// Pickups only step their animation.
    pub fn advance(&mut self, speed: f32) -> Vec2 {
        if let ActorKind::Pickup(pickup) = &mut self.kind {
            pickup.animate();
            return Vec2::ZERO;
        }

        if self.flags.is_stationary() {
            return Vec2::ZERO;
        }

        let delta = self.flags.active_vector() * speed;
        self.position += delta;
        delta
    }

    /// Returns the actor to its start position, stationary, with its payload restarted.
    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.flags.stop();
        match &mut self.kind {
            ActorKind::Player => {}
            ActorKind::Adversary(adversary) => adversary.reset(),
            ActorKind::Pickup(pickup) => pickup.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::direction::Direction;

    #[test]
    fn test_stationary_advance_is_noop() {
        let mut actor = Actor::player(0, Vec2::new(3.0, 4.0), 1.0);
        assert_eq!(actor.advance(100.0), Vec2::ZERO);
        assert_eq!(actor.position, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_diagonal_advance_is_not_normalized() {
        let mut actor = Actor::player(0, Vec2::ZERO, 1.0);
        actor.flags.set_direction(Direction::North, true);
        actor.flags.set_direction(Direction::East, true);
        actor.advance(2.0);
        assert_eq!(actor.position, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_pickup_never_moves() {
        let mut actor = Actor::pickup(1, Vec2::new(5.0, 5.0), 10.0, PickupState::new(0.0));
        actor.flags = MovementFlags::EAST;
        actor.advance(10.0);
        assert_eq!(actor.position, Vec2::new(5.0, 5.0));
        assert!(!actor.is_mobile());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ActorKind::Player.to_string(), "Player");
        assert_eq!(ActorKind::Pickup(PickupState::new(0.0)).to_string(), "Pickup");
    }
}
