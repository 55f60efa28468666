use std::collections::HashMap;

use crate::{entity::direction::Direction, input::commands::GameCommand};

pub mod commands;

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Move(Direction),
    TogglePause,
}

/// Raw input reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(char),
    KeyUp(char),
    FocusLost,
}

#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<char, Binding>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Player movement
        key_bindings.insert('w', Binding::Move(Direction::North));
        key_bindings.insert('s', Binding::Move(Direction::South));
        key_bindings.insert('d', Binding::Move(Direction::East));
        key_bindings.insert('a', Binding::Move(Direction::West));

        // Game actions
        key_bindings.insert(' ', Binding::TogglePause);

        Self { key_bindings }
    }
}

impl Bindings {
    /// Binds `key` (case-insensitively), replacing any previous binding.
    pub fn bind(&mut self, key: char, binding: Binding) {
        self.key_bindings.insert(key.to_ascii_lowercase(), binding);
    }

    pub fn get(&self, key: char) -> Option<Binding> {
        self.key_bindings.get(&key.to_ascii_lowercase()).copied()
    }

    /// Translates a raw input event into a command, if it maps to one.
    ///
    /// Pause toggles on key-down only; its release is ignored.
    pub fn translate(&self, event: InputEvent) -> Option<GameCommand> {
        match event {
            InputEvent::FocusLost => Some(GameCommand::FocusLost),
            InputEvent::KeyDown(key) => match self.get(key)? {
                Binding::Move(direction) => Some(GameCommand::Move(direction, true)),
                Binding::TogglePause => Some(GameCommand::TogglePause),
            },
            InputEvent::KeyUp(key) => match self.get(key)? {
                Binding::Move(direction) => Some(GameCommand::Move(direction, false)),
                Binding::TogglePause => None,
            },
        }
    }
}
