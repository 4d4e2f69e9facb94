//! Game shell: the tabbed host that mounts one engine at a time.
//!
//! The shell owns no game logic. It:
//! - mounts the selected engine with its own forked RNG stream
//! - forwards actions, elapsed time and key presses to the mounted engine
//! - drains the engine's notices, localizes them and hands them to the
//!   notifier
//!
//! Switching tabs drops the previous engine, which cancels its timers and
//! detaches its keyboard listener.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use rust_minigames::core::{Catalog, GamesConfig, RecordingNotifier};
//! use rust_minigames::games::tictactoe::PlayAt;
//! use rust_minigames::shell::{GameKind, GameShell, ShellAction};
//!
//! # fn main() -> Result<(), rust_minigames::ConfigError> {
//! let mut shell = GameShell::new(GamesConfig::default(), RecordingNotifier::new(), Catalog::english())?;
//! assert_eq!(shell.active_kind(), GameKind::TicTacToe);
//!
//! for index in [0, 4, 1, 3, 2] {
//!     shell.dispatch(ShellAction::TicTacToe(PlayAt(index)));
//! }
//! assert_eq!(shell.notifier().messages(), vec!["Player X wins!"]);
//!
//! shell.select(GameKind::Snake);
//! shell.advance(Duration::from_secs(1));
//! assert!(!shell.active().is_terminal());
//! # Ok(())
//! # }
//! ```

mod view;

pub use view::render;

use std::time::Duration;

use log::{info, trace};
use serde::{Deserialize, Serialize};

use crate::core::{
    snapshot, ConfigError, Game, GameRng, GameRngState, GamesConfig, KeyEvent, Localizer, Notice, Notifier, SnapshotError,
};
use crate::games::hangman::{Guess, Hangman};
use crate::games::memory::{Flip, MemoryMatch};
use crate::games::rps::{Choose, RockPaperScissors};
use crate::games::snake::{Snake, SnakeAction};
use crate::games::tictactoe::{PlayAt, TicTacToe};

/// The shell's tabs, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    TicTacToe,
    Memory,
    RockPaperScissors,
    Snake,
    Hangman,
}

impl GameKind {
    pub const ALL: [GameKind; 5] = [
        GameKind::TicTacToe,
        GameKind::Memory,
        GameKind::RockPaperScissors,
        GameKind::Snake,
        GameKind::Hangman,
    ];

    /// Catalog key of the tab label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "games.tabs.tictactoe",
            GameKind::Memory => "games.tabs.memory",
            GameKind::RockPaperScissors => "games.tabs.rps",
            GameKind::Snake => "games.tabs.snake",
            GameKind::Hangman => "games.tabs.hangman",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameKind::TicTacToe => "tictactoe",
            GameKind::Memory => "memory",
            GameKind::RockPaperScissors => "rps",
            GameKind::Snake => "snake",
            GameKind::Hangman => "hangman",
        };
        write!(f, "{}", name)
    }
}

/// The mounted engine.
#[derive(Clone, Debug)]
pub enum ActiveGame {
    TicTacToe(TicTacToe),
    Memory(MemoryMatch),
    RockPaperScissors(RockPaperScissors),
    Snake(Snake),
    Hangman(Hangman),
}

/// An action addressed to one of the engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellAction {
    TicTacToe(PlayAt),
    Memory(Flip),
    RockPaperScissors(Choose),
    Snake(SnakeAction),
    Hangman(Guess),
}

impl ShellAction {
    /// The game this action is meant for.
    #[must_use]
    pub const fn kind(&self) -> GameKind {
        match self {
            ShellAction::TicTacToe(_) => GameKind::TicTacToe,
            ShellAction::Memory(_) => GameKind::Memory,
            ShellAction::RockPaperScissors(_) => GameKind::RockPaperScissors,
            ShellAction::Snake(_) => GameKind::Snake,
            ShellAction::Hangman(_) => GameKind::Hangman,
        }
    }
}

impl ActiveGame {
    /// Build a fresh engine of `kind`.
    #[must_use]
    pub fn mount(kind: GameKind, config: &GamesConfig, rng: GameRng) -> Self {
        match kind {
            GameKind::TicTacToe => ActiveGame::TicTacToe(TicTacToe::new()),
            GameKind::Memory => ActiveGame::Memory(MemoryMatch::new(&config.memory, rng)),
            GameKind::RockPaperScissors => ActiveGame::RockPaperScissors(RockPaperScissors::new(rng)),
            GameKind::Snake => ActiveGame::Snake(Snake::new(&config.snake, rng)),
            GameKind::Hangman => ActiveGame::Hangman(Hangman::new(&config.hangman, rng)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::TicTacToe(_) => GameKind::TicTacToe,
            ActiveGame::Memory(_) => GameKind::Memory,
            ActiveGame::RockPaperScissors(_) => GameKind::RockPaperScissors,
            ActiveGame::Snake(_) => GameKind::Snake,
            ActiveGame::Hangman(_) => GameKind::Hangman,
        }
    }

    /// Forward an action. Actions for another game are dropped.
    pub fn dispatch(&mut self, action: ShellAction) -> bool {
        match (self, action) {
            (ActiveGame::TicTacToe(g), ShellAction::TicTacToe(a)) => g.dispatch(a),
            (ActiveGame::Memory(g), ShellAction::Memory(a)) => g.dispatch(a),
            (ActiveGame::RockPaperScissors(g), ShellAction::RockPaperScissors(a)) => g.dispatch(a),
            (ActiveGame::Snake(g), ShellAction::Snake(a)) => g.dispatch(a),
            (ActiveGame::Hangman(g), ShellAction::Hangman(a)) => g.dispatch(a),
            (active, action) => {
                trace!("shell: {:?} action dropped, {} is mounted", action, active.kind());
                false
            }
        }
    }

    pub fn reset(&mut self) {
        match self {
            ActiveGame::TicTacToe(g) => g.reset(),
            ActiveGame::Memory(g) => g.reset(),
            ActiveGame::RockPaperScissors(g) => g.reset(),
            ActiveGame::Snake(g) => g.reset(),
            ActiveGame::Hangman(g) => g.reset(),
        }
    }

    pub fn advance(&mut self, elapsed: Duration) {
        match self {
            ActiveGame::TicTacToe(g) => g.advance(elapsed),
            ActiveGame::Memory(g) => g.advance(elapsed),
            ActiveGame::RockPaperScissors(g) => g.advance(elapsed),
            ActiveGame::Snake(g) => g.advance(elapsed),
            ActiveGame::Hangman(g) => g.advance(elapsed),
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self {
            ActiveGame::TicTacToe(g) => g.is_terminal(),
            ActiveGame::Memory(g) => g.is_terminal(),
            ActiveGame::RockPaperScissors(g) => g.is_terminal(),
            ActiveGame::Snake(g) => g.is_terminal(),
            ActiveGame::Hangman(g) => g.is_terminal(),
        }
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        match self {
            ActiveGame::TicTacToe(g) => g.take_notices(),
            ActiveGame::Memory(g) => g.take_notices(),
            ActiveGame::RockPaperScissors(g) => g.take_notices(),
            ActiveGame::Snake(g) => g.take_notices(),
            ActiveGame::Hangman(g) => g.take_notices(),
        }
    }

    /// Encode the engine state.
    pub fn encode_state(&self) -> Result<Vec<u8>, SnapshotError> {
        match self {
            ActiveGame::TicTacToe(g) => snapshot::encode(g.state()),
            ActiveGame::Memory(g) => snapshot::encode(g.state()),
            ActiveGame::RockPaperScissors(g) => snapshot::encode(g.state()),
            ActiveGame::Snake(g) => snapshot::encode(g.state()),
            ActiveGame::Hangman(g) => snapshot::encode(g.state()),
        }
    }

    /// Decode and restore an engine state produced by [`encode_state`](Self::encode_state).
    pub fn restore_state(&mut self, bytes: &[u8]) -> Result<(), SnapshotError> {
        match self {
            ActiveGame::TicTacToe(g) => g.restore(snapshot::decode(bytes)?),
            ActiveGame::Memory(g) => g.restore(snapshot::decode(bytes)?),
            ActiveGame::RockPaperScissors(g) => g.restore(snapshot::decode(bytes)?),
            ActiveGame::Snake(g) => g.restore(snapshot::decode(bytes)?),
            ActiveGame::Hangman(g) => g.restore(snapshot::decode(bytes)?),
        }
        Ok(())
    }
}

/// In-memory capture of the mounted game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSnapshot {
    pub kind: GameKind,
    /// Shell RNG position, so remounts after a restore replay identically.
    pub rng: GameRngState,
    /// `bincode` encoding of the engine state.
    pub state: Vec<u8>,
}

/// Tabbed host for the mini-games.
pub struct GameShell<N: Notifier, L: Localizer> {
    config: GamesConfig,
    rng: GameRng,
    active: ActiveGame,
    notifier: N,
    localizer: L,
}

impl<N: Notifier, L: Localizer> GameShell<N, L> {
    /// Create a shell with the first tab mounted.
    ///
    /// Fails if `config` does not pass [`GamesConfig::validate`].
    pub fn new(config: GamesConfig, notifier: N, localizer: L) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = GameRng::new(config.seed);
        let active = ActiveGame::mount(GameKind::ALL[0], &config, rng.fork());
        Ok(Self {
            config,
            rng,
            active,
            notifier,
            localizer,
        })
    }

    #[must_use]
    pub fn active_kind(&self) -> GameKind {
        self.active.kind()
    }

    #[must_use]
    pub fn active(&self) -> &ActiveGame {
        &self.active
    }

    /// Mutable access to the mounted engine, for engine-specific calls.
    pub fn active_mut(&mut self) -> &mut ActiveGame {
        &mut self.active
    }

    #[must_use]
    pub fn config(&self) -> &GamesConfig {
        &self.config
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    #[must_use]
    pub fn localizer(&self) -> &L {
        &self.localizer
    }

    /// Tabs with their localized labels.
    #[must_use]
    pub fn tabs(&self) -> Vec<(GameKind, String)> {
        GameKind::ALL
            .iter()
            .map(|&kind| (kind, self.localizer.t(kind.label_key())))
            .collect()
    }

    /// Switch tabs. Selecting the mounted game keeps it as is.
    pub fn select(&mut self, kind: GameKind) {
        if kind == self.active.kind() {
            return;
        }
        info!("shell: {} -> {}", self.active.kind(), kind);
        // The old engine, with its timers and listener, is dropped here.
        self.active = ActiveGame::mount(kind, &self.config, self.rng.fork());
    }

    /// Forward a player action to the mounted game.
    pub fn dispatch(&mut self, action: ShellAction) -> bool {
        let changed = self.active.dispatch(action);
        self.flush_notices();
        changed
    }

    /// Let virtual time pass for the mounted game only.
    pub fn advance(&mut self, elapsed: Duration) {
        self.active.advance(elapsed);
        self.flush_notices();
    }

    /// Deliver a key-down event. Returns `true` if a game consumed it.
    pub fn key_down(&mut self, event: &KeyEvent) -> bool {
        let consumed = match &mut self.active {
            ActiveGame::Snake(snake) => snake.key_down(event),
            _ => false,
        };
        self.flush_notices();
        consumed
    }

    /// Reset the mounted game.
    pub fn reset(&mut self) {
        info!("shell: reset {}", self.active.kind());
        self.active.reset();
    }

    /// Text view of the mounted game.
    #[must_use]
    pub fn render(&self) -> String {
        view::render(&self.active, &self.localizer)
    }

    /// Capture the mounted game.
    pub fn snapshot(&self) -> Result<ShellSnapshot, SnapshotError> {
        Ok(ShellSnapshot {
            kind: self.active.kind(),
            rng: self.rng.state(),
            state: self.active.encode_state()?,
        })
    }

    /// Restore a capture of the mounted game.
    ///
    /// Fails without touching anything if the snapshot is for another game
    /// or does not decode.
    pub fn restore(&mut self, snapshot: &ShellSnapshot) -> Result<(), SnapshotError> {
        if snapshot.kind != self.active.kind() {
            return Err(SnapshotError::WrongGame {
                expected: self.active.kind().to_string(),
                found: snapshot.kind.to_string(),
            });
        }
        let mut restored = self.active.clone();
        restored.restore_state(&snapshot.state)?;
        self.active = restored;
        self.rng = GameRng::from_state(&snapshot.rng);
        Ok(())
    }

    fn flush_notices(&mut self) {
        for notice in self.active.take_notices() {
            let text = self.localizer.message(&notice.message);
            self.notifier.notify(notice.level, &text);
        }
    }
}
