//! # rust-minigames
//!
//! Deterministic engines for a children's mini-games portal.
//!
//! ## Design Principles
//!
//! 1. **Engines own their state**: each game is a small state machine
//!    behind the `Game` trait. Transitions are pure functions on plain,
//!    serializable state; illegal actions are silent no-ops.
//!
//! 2. **Virtual time**: timers are values owned by the engine and driven by
//!    `advance(elapsed)`. Dropping an engine cancels everything it
//!    scheduled.
//!
//! 3. **Outcomes as data**: engines queue structured notices; the shell
//!    localizes them and hands them to the host's notifier.
//!
//! 4. **Seeded randomness**: every shuffle, food spawn and computer move
//!    comes from a `GameRng` forked off the configured seed.
//!
//! ## Modules
//!
//! - `core`: grid, RNG, timers, input, notices, configuration, errors
//! - `games`: Tic-Tac-Toe, Memory Match, Rock-Paper-Scissors, Snake, Hangman
//! - `shell`: the tabbed host that mounts one game at a time

pub mod core;
pub mod games;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{
    Catalog, ConfigError, Coord, Direction, Game, GameRng, GameRngState, GamesConfig, GridSize, KeyEvent,
    Localizer, LogNotifier, Message, Notice, NoticeLevel, Notifier, RecordingNotifier, SnapshotError, Timer,
};

pub use crate::shell::{ActiveGame, GameKind, GameShell, ShellAction, ShellSnapshot};
