//! Outcome notices and the collaborators that display them.
//!
//! ## Flow
//!
//! 1. An engine reaching an outcome pushes a structured `Notice` into its
//!    outbox. Engines never build display text.
//! 2. The shell drains the outbox, resolves the message through a
//!    `Localizer` and hands the text to a `Notifier`.
//! 3. Delivery is fire-and-forget: nothing flows back into the engine.
//!
//! ## Example
//!
//! ```
//! use rust_minigames::core::{Catalog, Localizer, Message, Notice, Notifier, RecordingNotifier};
//!
//! let notice = Notice::success(Message::MemoryWon { moves: 9 });
//! let text = Catalog::english().message(&notice.message);
//!
//! let mut notifier = RecordingNotifier::new();
//! notifier.notify(notice.level, &text);
//! assert_eq!(notifier.messages(), vec!["You found all pairs in 9 moves!"]);
//! ```

use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Severity of a notice, mirroring the toast styles of the host UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// What happened, as data. Localized by the shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// `mark` is the winner's board glyph.
    TicTacToeWinner { mark: char },
    TicTacToeDraw,
    MemoryWon { moves: u32 },
    SnakeOver { score: u32 },
    HangmanWon { word: String },
    HangmanLost { word: String },
}

/// Placeholder substitutions for a message template.
pub type MessageArgs = SmallVec<[(&'static str, String); 2]>;

impl Message {
    /// Catalog key of the message template.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Message::TicTacToeWinner { .. } => "games.tictactoe.win",
            Message::TicTacToeDraw => "games.tictactoe.draw",
            Message::MemoryWon { .. } => "games.memory.won",
            Message::SnakeOver { .. } => "games.snake.over",
            Message::HangmanWon { .. } => "games.hangman.won",
            Message::HangmanLost { .. } => "games.hangman.lost",
        }
    }

    /// Values substituted into the template.
    #[must_use]
    pub fn args(&self) -> MessageArgs {
        match self {
            Message::TicTacToeWinner { mark } => smallvec![("winner", mark.to_string())],
            Message::TicTacToeDraw => SmallVec::new(),
            Message::MemoryWon { moves } => smallvec![("moves", moves.to_string())],
            Message::SnakeOver { score } => smallvec![("score", score.to_string())],
            Message::HangmanWon { word } | Message::HangmanLost { word } => {
                smallvec![("word", word.clone())]
            }
        }
    }
}

/// A one-shot outcome signal emitted by an engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: Message,
}

impl Notice {
    #[must_use]
    pub fn success(message: Message) -> Self {
        Self { level: NoticeLevel::Success, message }
    }

    #[must_use]
    pub fn info(message: Message) -> Self {
        Self { level: NoticeLevel::Info, message }
    }

    #[must_use]
    pub fn error(message: Message) -> Self {
        Self { level: NoticeLevel::Error, message }
    }
}

/// Toast-style notification service provided by the host.
pub trait Notifier {
    fn success(&mut self, message: &str);

    fn info(&mut self, message: &str);

    fn error(&mut self, message: &str);

    /// Route by level.
    fn notify(&mut self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Success => self.success(message),
            NoticeLevel::Info => self.info(message),
            NoticeLevel::Error => self.error(message),
        }
    }
}

/// Notifier that writes to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&mut self, message: &str) {
        info!("[success] {}", message);
    }

    fn info(&mut self, message: &str) {
        info!("[info] {}", message);
    }

    fn error(&mut self, message: &str) {
        warn!("[error] {}", message);
    }
}

/// Notifier that keeps every delivered message in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingNotifier {
    entries: Vec<(NoticeLevel, String)>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[(NoticeLevel, String)] {
        &self.entries
    }

    /// Message texts only.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, m)| m.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Notifier for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.entries.push((NoticeLevel::Success, message.to_string()));
    }

    fn info(&mut self, message: &str) {
        self.entries.push((NoticeLevel::Info, message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.entries.push((NoticeLevel::Error, message.to_string()));
    }
}

/// Translation lookup. Used for display text only, never for control flow.
pub trait Localizer {
    fn t(&self, key: &str) -> String;

    /// Look up `key` and fill `{name}` placeholders.
    fn format(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut text = self.t(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }

    /// Localized text of an engine message.
    fn message(&self, message: &Message) -> String {
        self.format(message.key(), &message.args())
    }
}

/// Key/text table. Missing keys render as the key itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: FxHashMap<String, String>,
}

impl Catalog {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// English texts for every key the games use.
    #[must_use]
    pub fn english() -> Self {
        const ENTRIES: &[(&str, &str)] = &[
            ("games.tabs.tictactoe", "Tic-Tac-Toe"),
            ("games.tabs.memory", "Memory Match"),
            ("games.tabs.rps", "Rock Paper Scissors"),
            ("games.tabs.snake", "Snake"),
            ("games.tabs.hangman", "Hangman"),
            ("games.tictactoe.turn", "Player {mark}'s turn"),
            ("games.tictactoe.win", "Player {winner} wins!"),
            ("games.tictactoe.draw", "It's a draw!"),
            ("games.memory.moves", "Moves: {moves}"),
            ("games.memory.won", "You found all pairs in {moves} moves!"),
            ("games.rps.score", "You {player} - {computer} Computer"),
            ("games.rps.win", "You win!"),
            ("games.rps.lose", "You lose!"),
            ("games.rps.tie", "It's a tie!"),
            ("games.rps.rock", "Rock"),
            ("games.rps.paper", "Paper"),
            ("games.rps.scissors", "Scissors"),
            ("games.snake.score", "Score: {score}"),
            ("games.snake.idle", "Press start to play"),
            ("games.snake.over", "Game over! Score: {score}"),
            ("games.hangman.remaining", "Guesses left: {remaining}"),
            ("games.hangman.won", "You guessed it: {word}!"),
            ("games.hangman.lost", "Out of guesses! The word was {word}."),
        ];

        ENTRIES.iter().fold(Self::new(), |catalog, (key, text)| catalog.with_entry(*key, *text))
    }

    /// Add or replace an entry.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for Catalog {
    fn t(&self, key: &str) -> String {
        self.entries.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_echoes() {
        let catalog = Catalog::new();
        assert_eq!(catalog.t("games.unknown"), "games.unknown");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_format_fills_placeholders() {
        let catalog = Catalog::new().with_entry("k", "{a} and {b} and {a}");
        let text = catalog.format("k", &[("a", "1".to_string()), ("b", "2".to_string())]);
        assert_eq!(text, "1 and 2 and 1");
    }

    #[test]
    fn test_english_messages() {
        let catalog = Catalog::english();

        assert_eq!(catalog.message(&Message::TicTacToeWinner { mark: 'X' }), "Player X wins!");
        assert_eq!(catalog.message(&Message::TicTacToeDraw), "It's a draw!");
        assert_eq!(catalog.message(&Message::SnakeOver { score: 3 }), "Game over! Score: 3");
        assert_eq!(
            catalog.message(&Message::HangmanLost { word: "zebra".into() }),
            "Out of guesses! The word was zebra."
        );
    }

    #[test]
    fn test_every_message_key_is_in_english_catalog() {
        let catalog = Catalog::english();
        let messages = [
            Message::TicTacToeWinner { mark: 'O' },
            Message::TicTacToeDraw,
            Message::MemoryWon { moves: 1 },
            Message::SnakeOver { score: 0 },
            Message::HangmanWon { word: "cat".into() },
            Message::HangmanLost { word: "cat".into() },
        ];

        for message in messages {
            assert_ne!(catalog.t(message.key()), message.key());
        }
    }

    #[test]
    fn test_recording_notifier_routes_levels() {
        let mut notifier = RecordingNotifier::new();
        notifier.notify(NoticeLevel::Success, "a");
        notifier.notify(NoticeLevel::Info, "b");
        notifier.notify(NoticeLevel::Error, "c");

        let levels: Vec<_> = notifier.entries().iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, vec![NoticeLevel::Success, NoticeLevel::Info, NoticeLevel::Error]);
        assert_eq!(notifier.messages(), vec!["a", "b", "c"]);

        notifier.clear();
        assert!(notifier.entries().is_empty());
    }
}
