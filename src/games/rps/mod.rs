//! Rock-Paper-Scissors against a uniformly random computer.
//!
//! Rock beats Scissors, Scissors beats Paper, Paper beats Rock. Scores
//! accumulate across rounds until reset; there is no terminal state.

mod game;

pub use game::{Choose, Move, RockPaperScissors, RoundResult, RpsState};
