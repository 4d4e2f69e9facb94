//! Hangman: guess the hidden word one letter at a time.
//!
//! - A wrong letter costs one of `max_guesses` attempts (6 by default)
//! - Revealing every distinct letter wins, even on the last attempt
//! - Repeated letters and guesses after the game ends are ignored

mod game;

pub use game::{Guess, Hangman, HangmanState, HangmanStatus, PLACEHOLDER};
