//! Snake: a growing body steered around a bounded grid.
//!
//! ## Lifecycle
//!
//! `Idle` → `Running` → `Over`, one way; `reset` returns to `Idle`.
//!
//! - **Idle**: a single cell, no direction, no movement
//! - **Running**: a recurring tick moves the head one cell in the
//!   committed direction; eating food grows the body and respawns food
//! - **Over**: leaving the grid or running into the body freezes the state
//!
//! ## Direction handling
//!
//! Key presses only set a *pending* direction, which becomes the
//! *committed* direction at the start of the next tick. A request that
//! reverses the committed direction is rejected, so two quick presses
//! within one tick cannot fold the snake back onto itself.

mod game;
mod state;

pub use game::{Snake, SnakeAction};
pub use state::{spawn_food, SnakeState, Status};
