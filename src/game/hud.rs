//! Text the presentation layer shows on top of the playfield.

use std::fmt;

use thousands::Separable;

use crate::game::state::{ControllerState, SessionState};

/// Centered message shown whenever the session isn't running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub headline: String,
    pub prompt: String,
}

impl Overlay {
    /// The overlay for `session`, or `None` while it is running.
    pub fn for_session(session: &SessionState) -> Option<Self> {
        let state = session.state();
        if state == ControllerState::Running {
            return None;
        }

        let lives = session.lives_remaining;
        let noun = if lives == 1 { "Life" } else { "Lives" };
        let prompt = match state {
            ControllerState::GameOver => "...game over.",
            ControllerState::Won => "YOU WIN!!!",
            _ => "Press <space> to Play!",
        };

        Some(Self {
            headline: format!("{lives} {noun} Remaining..."),
            prompt: prompt.to_string(),
        })
    }
}

/// The status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudStats {
    pub lives: u8,
    pub score: u32,
    pub boost_enabled: bool,
    pub boost_percent: u8,
    pub running: bool,
}

impl fmt::Display for HudStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lives: {} | Score: {}", self.lives, self.score.separate_with_commas())?;
        if self.boost_enabled {
            write!(f, " | Boost: {}%", self.boost_percent)?;
        }
        Ok(())
    }
}
