//! The five mini-game engines.
//!
//! Each engine implements [`Game`](crate::core::Game), owns its state and
//! timers, and never talks to another engine.

pub mod tictactoe;
pub mod memory;
pub mod rps;
pub mod snake;
pub mod hangman;
