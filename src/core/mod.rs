//! Core building blocks shared by every game: board primitives, RNG,
//! timers, keyboard input, notices, configuration and the `Game` trait.
//!
//! Nothing here knows the rules of a particular game.

pub mod grid;
pub mod rng;
pub mod clock;
pub mod input;
pub mod notify;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod game;

pub use grid::{Coord, Direction, GridSize, Line};
pub use rng::{GameRng, GameRngState};
pub use clock::{Schedule, Timer};
pub use input::{Key, KeyEvent, KeyListener, NotAnArrowKey};
pub use notify::{Catalog, LogNotifier, Localizer, Message, Notice, NoticeLevel, Notifier, RecordingNotifier};
pub use config::{GamesConfig, HangmanConfig, MemoryConfig, SnakeConfig};
pub use error::{ConfigError, SnapshotError};
pub use game::Game;
