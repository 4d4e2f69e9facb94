//! Game configuration.
//!
//! Hosts configure the engines by providing:
//! - `SnakeConfig`: grid size, tick period and start cell
//! - `MemoryConfig`: card symbols and how long a mismatched pair stays up
//! - `HangmanConfig`: wrong-guess budget and word list
//! - `GamesConfig`: combines all of the above with the RNG seed
//!
//! Every field has a default, so a JSON document only needs the values it
//! changes:
//!
//! ```
//! use rust_minigames::core::GamesConfig;
//!
//! let config = GamesConfig::from_json_str(r#"{ "snake": { "tick_ms": 100 } }"#).unwrap();
//! assert_eq!(config.snake.tick_ms, 100);
//! assert_eq!(config.snake.width, 20);
//! assert_eq!(config.hangman.max_guesses, 6);
//! ```

use std::path::Path;
use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::grid::{Coord, GridSize};

/// Snake board and timing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Board width in cells.
    pub width: u16,

    /// Board height in cells.
    pub height: u16,

    /// Milliseconds between simulation ticks.
    pub tick_ms: u64,

    /// Cell the snake occupies while idle.
    pub start: Coord,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            tick_ms: 150,
            start: Coord::new(10, 10),
        }
    }
}

impl SnakeConfig {
    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }

    #[must_use]
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Memory Match deck and reveal timing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// One entry per pair; each symbol appears twice in the deck.
    pub symbols: Vec<String>,

    /// Milliseconds both staged cards stay visible before resolution.
    pub reveal_delay_ms: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            symbols: ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            reveal_delay_ms: 1000,
        }
    }
}

impl MemoryConfig {
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

/// Hangman budget and vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HangmanConfig {
    /// Wrong guesses allowed before the game is lost.
    pub max_guesses: u32,

    /// Candidate words, lowercase ASCII letters only.
    pub words: Vec<String>,
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            words: [
                "apple", "banana", "elephant", "giraffe", "rainbow", "butterfly", "dinosaur", "pizza", "rocket",
                "puppy", "turtle", "castle", "dragon", "flower", "jungle",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Complete configuration for the mini-games module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamesConfig {
    /// Seed of the shell RNG. Each mounted engine gets a fork of it.
    pub seed: u64,

    pub snake: SnakeConfig,

    pub memory: MemoryConfig,

    pub hangman: HangmanConfig,
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            snake: SnakeConfig::default(),
            memory: MemoryConfig::default(),
            hangman: HangmanConfig::default(),
        }
    }
}

impl GamesConfig {
    /// Default configuration with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the snake board size, moving the start cell to the centre.
    #[must_use]
    pub fn with_snake_grid(mut self, width: u16, height: u16) -> Self {
        self.snake.width = width;
        self.snake.height = height;
        self.snake.start = Coord::new(i32::from(width / 2), i32::from(height / 2));
        self
    }

    /// Set the memory symbols.
    #[must_use]
    pub fn with_memory_symbols<S: Into<String>>(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
        self.memory.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set the hangman word list.
    #[must_use]
    pub fn with_hangman_words<S: Into<String>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.hangman.words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Check every value is usable by the engines.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let snake = &self.snake;
        if snake.width < 2 || snake.height < 2 {
            return Err(ConfigError::invalid("snake.width/height", "board must be at least 2x2"));
        }
        if !snake.grid().contains(snake.start) {
            return Err(ConfigError::invalid("snake.start", format!("{} is off the board", snake.start)));
        }
        if snake.tick_ms == 0 {
            return Err(ConfigError::invalid("snake.tick_ms", "must be positive"));
        }

        let memory = &self.memory;
        if memory.symbols.is_empty() {
            return Err(ConfigError::invalid("memory.symbols", "at least one symbol is required"));
        }
        let distinct: FxHashSet<&str> = memory.symbols.iter().map(String::as_str).collect();
        if distinct.len() != memory.symbols.len() {
            return Err(ConfigError::invalid("memory.symbols", "symbols must be distinct"));
        }
        if memory.reveal_delay_ms == 0 {
            return Err(ConfigError::invalid("memory.reveal_delay_ms", "must be positive"));
        }

        let hangman = &self.hangman;
        if hangman.max_guesses == 0 {
            return Err(ConfigError::invalid("hangman.max_guesses", "must be at least 1"));
        }
        if hangman.words.is_empty() {
            return Err(ConfigError::invalid("hangman.words", "at least one word is required"));
        }
        if let Some(bad) = hangman
            .words
            .iter()
            .find(|w| w.is_empty() || !w.chars().all(|c| c.is_ascii_lowercase()))
        {
            return Err(ConfigError::invalid("hangman.words", format!("`{}` is not lowercase ascii", bad)));
        }

        Ok(())
    }
}
