use strum_macros::Display;

/// The high-level state of a session, as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ControllerState {
    Paused,
    Running,
    /// Every pickup was consumed. Terminal.
    Won,
    /// No lives remain. Terminal.
    GameOver,
}

impl ControllerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ControllerState::Won | ControllerState::GameOver)
    }
}

/// Lives, progress and run flags of one session.
///
/// Lives only ever go down. Once `finished` is set it stays set and `running` stays false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub lives_remaining: u8,
    pub pickups_consumed: u32,
    pub running: bool,
    pub finished: bool,
}

impl SessionState {
    pub fn new(lives: u8) -> Self {
        Self {
            lives_remaining: lives,
            pickups_consumed: 0,
            running: false,
            finished: false,
        }
    }

    /// Whether the session may (still) run: lives remain and it was not won.
    pub fn can_run(&self) -> bool {
        self.lives_remaining > 0 && !self.finished
    }

    /// Flips between running and paused. Stays stopped once the session is over.
    pub fn toggle(&mut self) {
        self.running = !self.running && self.can_run();
    }

    pub fn state(&self) -> ControllerState {
        if self.finished {
            ControllerState::Won
        } else if self.lives_remaining == 0 {
            ControllerState::GameOver
        } else if self.running {
            ControllerState::Running
        } else {
            ControllerState::Paused
        }
    }
}
