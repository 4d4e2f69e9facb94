//! Tic-Tac-Toe: two marks alternate on a 3×3 board.
//!
//! - X always moves first
//! - Three in a row on any of the 8 lines wins
//! - A full board with no line is a draw
//! - Moves on a filled cell or a finished board are ignored

mod game;

pub use game::{Mark, Outcome, PlayAt, TicTacToe, TicTacToeState, BOARD};
