use crate::entity::ActorId;

/// State transitions raised by the scene during a tick, in the order they happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    /// An adversary touched the player. Ends collision processing for the tick.
    LifeLost { adversary: ActorId },
    /// A visible pickup was consumed; `consumed` is the running total since the last reset.
    PickupConsumed { pickup: ActorId, consumed: u32 },
    /// The last remaining pickup was consumed.
    GameWon,
}
