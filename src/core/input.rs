//! Keyboard input as delivered by the host UI.
//!
//! Only the four arrow keys mean anything to the engines. Key names follow
//! the DOM `KeyboardEvent.key` values (`"ArrowUp"`, ...).

use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use super::grid::Direction;

/// A key-down event from the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The arrow key this event carries, if any.
    #[must_use]
    pub fn arrow(&self) -> Option<Key> {
        self.key.parse().ok()
    }
}

/// Arrow keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Key::ArrowUp => Direction::Up,
            Key::ArrowDown => Direction::Down,
            Key::ArrowLeft => Direction::Left,
            Key::ArrowRight => Direction::Right,
        }
    }
}

/// The key name is not an arrow key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotAnArrowKey;

impl FromStr for Key {
    type Err = NotAnArrowKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowUp" => Ok(Key::ArrowUp),
            "ArrowDown" => Ok(Key::ArrowDown),
            "ArrowLeft" => Ok(Key::ArrowLeft),
            "ArrowRight" => Ok(Key::ArrowRight),
            _ => Err(NotAnArrowKey),
        }
    }
}

/// The global key-down listener.
///
/// Attached only while a game actually consumes keys, so arrow presses
/// reach the rest of the UI the rest of the time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyListener {
    attached: bool,
}

impl KeyListener {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self) {
        if !self.attached {
            debug!("keyboard listener attached");
            self.attached = true;
        }
    }

    pub fn detach(&mut self) {
        if self.attached {
            debug!("keyboard listener detached");
            self.attached = false;
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}
