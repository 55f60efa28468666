use crate::entity::direction::Direction;

/// A command for the game controller, produced from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// A direction key was pressed (`true`) or released (`false`).
    Move(Direction, bool),
    TogglePause,
    /// The application lost focus; held keys will never report their release.
    FocusLost,
}
