//! The capability every mini-game engine implements.
//!
//! An engine is a small state machine `(State, Action, transition, is_terminal)`
//! that owns its state, its timers and its outbox of notices:
//! - `dispatch`: apply one player action; illegal actions are silent no-ops
//! - `advance`: let virtual time pass so owned timers can fire
//! - `reset`: discard the state and cancel anything scheduled
//!
//! The shell drives engines only through this trait.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::notify::Notice;

/// Game engine trait.
///
/// ## Implementation Notes
///
/// - `State` is plain data: no timers, no RNG, no handles
/// - `dispatch` returns `true` only if the state changed
/// - `reset` and `restore` must drop any timer the engine scheduled
/// - notices are queued, never delivered directly
pub trait Game {
    /// Serializable snapshot of everything needed to render the game.
    type State: Clone + Serialize + DeserializeOwned;

    /// Player input accepted by `dispatch`.
    type Action;

    /// Current state.
    fn state(&self) -> &Self::State;

    /// Apply a player action.
    ///
    /// Returns `false` and leaves the state untouched if the action is
    /// illegal in the current state.
    fn dispatch(&mut self, action: Self::Action) -> bool;

    /// Return to the initial state, cancelling owned timers.
    fn reset(&mut self);

    /// Check if the game has reached an outcome.
    ///
    /// Games without a terminal state always return `false`.
    fn is_terminal(&self) -> bool;

    /// Replace the state wholesale, rescheduling timers the new state implies.
    fn restore(&mut self, state: Self::State);

    /// Let `elapsed` virtual time pass.
    ///
    /// Untimed games ignore this.
    fn advance(&mut self, _elapsed: Duration) {}

    /// Drain outcome notices queued since the last call.
    fn take_notices(&mut self) -> Vec<Notice>;
}
