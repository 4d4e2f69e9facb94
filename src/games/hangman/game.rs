//! Hangman engine.

use im::OrdSet;
use log::{info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Game, GameRng, HangmanConfig, Message, Notice};

/// Glyph shown for a letter not yet guessed.
pub const PLACEHOLDER: char = '_';

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HangmanStatus {
    Playing,
    Won,
    Lost,
}

/// Word, guesses and budget.
///
/// ## Invariants
///
/// - `Won` iff every distinct letter of `word` is in `guessed`
/// - `Lost` iff `wrong_count == max_guesses` and the word is not revealed
/// - `wrong_count` never exceeds `max_guesses`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HangmanState {
    pub word: String,
    pub guessed: OrdSet<char>,
    pub wrong_count: u32,
    pub max_guesses: u32,
    pub status: HangmanStatus,
}

impl HangmanState {
    /// A fresh game for `word`, lowercased.
    #[must_use]
    pub fn with_word(word: &str, max_guesses: u32) -> Self {
        Self {
            word: word.to_lowercase(),
            guessed: OrdSet::new(),
            wrong_count: 0,
            max_guesses,
            status: HangmanStatus::Playing,
        }
    }

    /// The state after guessing `letter`.
    ///
    /// Returns `None` if the game is over, there is no word, the letter is
    /// not alphabetic, or it was already guessed. Uppercase input is folded
    /// to lowercase.
    #[must_use]
    pub fn guess(&self, letter: char) -> Option<Self> {
        if self.status != HangmanStatus::Playing || self.word.is_empty() || !letter.is_alphabetic() {
            return None;
        }
        let letter = letter.to_lowercase().next()?;
        if self.guessed.contains(&letter) {
            return None;
        }

        let mut next = self.clone();
        next.guessed.insert(letter);
        if !self.word.contains(letter) {
            next.wrong_count += 1;
        }

        // Revealing the word wins even if this guess also used the last attempt.
        if next.is_revealed() {
            next.status = HangmanStatus::Won;
        } else if next.wrong_count >= next.max_guesses {
            next.status = HangmanStatus::Lost;
        }
        Some(next)
    }

    /// True once every letter of a non-empty word has been guessed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        !self.word.is_empty() && self.word.chars().all(|c| self.guessed.contains(&c))
    }

    /// The word with unguessed letters replaced by `placeholder`.
    #[must_use]
    pub fn masked(&self, placeholder: char) -> String {
        self.word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { placeholder })
            .collect()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> u32 {
        self.max_guesses.saturating_sub(self.wrong_count)
    }

    /// Guessed letters not in the word, alphabetically.
    #[must_use]
    pub fn wrong_letters(&self) -> Vec<char> {
        self.guessed.iter().copied().filter(|c| !self.word.contains(*c)).collect()
    }
}

/// Action: guess a letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess(pub char);

/// Hangman engine.
#[derive(Clone, Debug)]
pub struct Hangman {
    state: HangmanState,
    words: Vec<String>,
    rng: GameRng,
    notices: Vec<Notice>,
}

impl Hangman {
    /// Start a game with a word drawn from the configured list.
    #[must_use]
    pub fn new(config: &HangmanConfig, rng: GameRng) -> Self {
        let mut game = Self {
            state: HangmanState::with_word("", config.max_guesses),
            words: config.words.clone(),
            rng,
            notices: Vec::new(),
        };
        game.new_game();
        game
    }

    /// Pick a new word uniformly from the list and clear all guesses.
    ///
    /// With an empty list the game has no word and ignores every guess.
    pub fn new_game(&mut self) {
        let word = match self.rng.choose(&self.words) {
            Some(word) => word.clone(),
            None => {
                warn!("hangman: word list is empty, guesses will be ignored");
                String::new()
            }
        };
        self.state = HangmanState::with_word(&word, self.state.max_guesses);
        self.notices.clear();
        info!("hangman: new word of {} letters", self.state.word.chars().count());
    }

    /// The word as displayed to the player.
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.state.masked(PLACEHOLDER)
    }
}

impl Game for Hangman {
    type State = HangmanState;
    type Action = Guess;

    fn state(&self) -> &HangmanState {
        &self.state
    }

    fn dispatch(&mut self, Guess(letter): Guess) -> bool {
        let Some(next) = self.state.guess(letter) else {
            trace!("hangman: ignored guess {:?}", letter);
            return false;
        };
        self.state = next;

        match self.state.status {
            HangmanStatus::Won => {
                info!("hangman: won with {} wrong guesses", self.state.wrong_count);
                self.notices.push(Notice::success(Message::HangmanWon {
                    word: self.state.word.clone(),
                }));
            }
            HangmanStatus::Lost => {
                info!("hangman: lost");
                self.notices.push(Notice::error(Message::HangmanLost {
                    word: self.state.word.clone(),
                }));
            }
            HangmanStatus::Playing => {}
        }
        true
    }

    fn reset(&mut self) {
        self.new_game();
    }

    fn is_terminal(&self) -> bool {
        self.state.status != HangmanStatus::Playing
    }

    fn restore(&mut self, state: HangmanState) {
        self.state = state;
    }

    fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
