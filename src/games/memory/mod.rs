//! Memory Match: find every pair in a shuffled deck of face-down cards.
//!
//! ## Flow
//!
//! 1. The player flips a card; it is staged face-up
//! 2. Flipping a second card stages it and schedules resolution
//! 3. After the reveal delay both cards are either matched (they stay up)
//!    or turned back down, and the move counter goes up by one
//! 4. While two cards are staged, further flips are dropped
//!
//! The game is won when every card is matched.

mod game;

pub use game::{Card, CardId, Flip, MemoryMatch, MemoryState};
