//! Snake state and its pure transitions.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Coord, Direction, GameRng, GridSize};

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Idle,
    Running,
    Over,
}

/// Board, body and score.
///
/// ## Invariants
///
/// - `body` is head-first and never holds a coordinate twice
/// - `food`, when present, is on the grid and outside `body`
/// - `direction` is `None` only while idle
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeState {
    pub grid: GridSize,
    pub body: Vector<Coord>,
    /// `None` only when the body covers the whole grid.
    pub food: Option<Coord>,
    /// Committed direction: the one the last tick moved in.
    pub direction: Option<Direction>,
    /// Requested direction, committed at the start of the next tick.
    pub pending_direction: Option<Direction>,
    pub status: Status,
    pub score: u32,
}

impl SnakeState {
    /// A one-cell idle snake at `start` with food somewhere else.
    #[must_use]
    pub fn idle(grid: GridSize, start: Coord, rng: &mut GameRng) -> Self {
        let body = Vector::unit(start);
        let food = spawn_food(grid, &body, rng);
        Self {
            grid,
            body,
            food,
            direction: None,
            pending_direction: None,
            status: Status::Idle,
            score: 0,
        }
    }

    /// A running snake with the given body (head first), heading and food.
    #[must_use]
    pub fn with_body(
        grid: GridSize,
        body: impl IntoIterator<Item = Coord>,
        direction: Direction,
        food: Option<Coord>,
    ) -> Self {
        Self {
            grid,
            body: body.into_iter().collect(),
            food,
            direction: Some(direction),
            pending_direction: Some(direction),
            status: Status::Running,
            score: 0,
        }
    }

    /// The head cell.
    #[must_use]
    pub fn head(&self) -> Option<Coord> {
        self.body.front().copied()
    }

    /// Check if a cell is part of the body.
    #[must_use]
    pub fn occupies(&self, cell: Coord) -> bool {
        self.body.contains(&cell)
    }

    /// The state after `start`: running and heading right.
    ///
    /// Returns `None` unless idle.
    #[must_use]
    pub fn start(&self) -> Option<Self> {
        if self.status != Status::Idle {
            return None;
        }
        let mut next = self.clone();
        next.direction = Some(Direction::Right);
        next.pending_direction = Some(Direction::Right);
        next.status = Status::Running;
        Some(next)
    }

    /// The state after requesting `direction`.
    ///
    /// Returns `None` unless running, or if `direction` reverses the
    /// committed direction.
    #[must_use]
    pub fn steer(&self, direction: Direction) -> Option<Self> {
        if self.status != Status::Running {
            return None;
        }
        if self.direction.is_some_and(|committed| direction.is_reverse_of(committed)) {
            return None;
        }
        let mut next = self.clone();
        next.pending_direction = Some(direction);
        Some(next)
    }

    /// Advance the simulation by one tick.
    ///
    /// Returns `None` unless running. The returned state is `Over` if the
    /// new head left the grid or hit the body; the body is then unchanged.
    #[must_use]
    pub fn tick(&self, rng: &mut GameRng) -> Option<Self> {
        if self.status != Status::Running {
            return None;
        }
        let direction = self.pending_direction.or(self.direction)?;
        let head = self.head()?;

        let mut next = self.clone();
        next.direction = Some(direction);
        next.pending_direction = Some(direction);

        let new_head = head.step(direction);
        if !self.grid.contains(new_head) || self.occupies(new_head) {
            next.status = Status::Over;
            return Some(next);
        }

        next.body.push_front(new_head);
        if self.food == Some(new_head) {
            next.score += 1;
            next.food = spawn_food(next.grid, &next.body, rng);
            if next.food.is_none() {
                // Board filled: nothing left to eat.
                next.status = Status::Over;
            }
        } else {
            next.body.pop_back();
        }

        Some(next)
    }
}

/// Pick a uniformly random free cell, `None` if the body fills the grid.
#[must_use]
pub fn spawn_food(grid: GridSize, body: &Vector<Coord>, rng: &mut GameRng) -> Option<Coord> {
    let occupied: FxHashSet<Coord> = body.iter().copied().collect();
    let free: Vec<Coord> = grid.cells().filter(|c| !occupied.contains(c)).collect();
    rng.choose(&free).copied()
}
