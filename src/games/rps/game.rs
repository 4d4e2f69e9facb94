//! Rock-Paper-Scissors engine.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Game, GameRng, Notice};

/// A hand shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    #[must_use]
    pub const fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    /// Catalog key of the move's label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Move::Rock => "games.rps.rock",
            Move::Paper => "games.rps.paper",
            Move::Scissors => "games.rps.scissors",
        }
    }
}

/// Round result from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    Win,
    Lose,
    Tie,
}

impl RoundResult {
    /// Compare the player's move against the computer's.
    #[must_use]
    pub fn of(player: Move, computer: Move) -> Self {
        if player == computer {
            RoundResult::Tie
        } else if player.beats() == computer {
            RoundResult::Win
        } else {
            RoundResult::Lose
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            RoundResult::Win => "games.rps.win",
            RoundResult::Lose => "games.rps.lose",
            RoundResult::Tie => "games.rps.tie",
        }
    }
}

/// Last round and running score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpsState {
    pub player_choice: Option<Move>,
    pub computer_choice: Option<Move>,
    pub player_score: u32,
    pub computer_score: u32,
    pub last_result: Option<RoundResult>,
}

impl RpsState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The state after a round with both moves known.
    #[must_use]
    pub fn play_round(&self, player: Move, computer: Move) -> Self {
        let result = RoundResult::of(player, computer);
        let mut next = *self;
        next.player_choice = Some(player);
        next.computer_choice = Some(computer);
        next.last_result = Some(result);
        match result {
            RoundResult::Win => next.player_score += 1,
            RoundResult::Lose => next.computer_score += 1,
            RoundResult::Tie => {}
        }
        next
    }
}

/// Action: the player's move for the next round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choose(pub Move);

/// Rock-Paper-Scissors engine.
#[derive(Clone, Debug)]
pub struct RockPaperScissors {
    state: RpsState,
    rng: GameRng,
}

impl RockPaperScissors {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            state: RpsState::new(),
            rng,
        }
    }

    /// Play a round with the computer's move fixed instead of drawn.
    pub fn play_against(&mut self, player: Move, computer: Move) -> RoundResult {
        self.state = self.state.play_round(player, computer);
        debug!("rps: {:?} vs {:?}", player, computer);
        RoundResult::of(player, computer)
    }
}

impl Game for RockPaperScissors {
    type State = RpsState;
    type Action = Choose;

    fn state(&self) -> &RpsState {
        &self.state
    }

    fn dispatch(&mut self, Choose(player): Choose) -> bool {
        let computer = self.rng.choose(&Move::ALL).copied().unwrap_or(Move::Rock);
        self.play_against(player, computer);
        true
    }

    fn reset(&mut self) {
        self.state = RpsState::new();
    }

    fn is_terminal(&self) -> bool {
        false
    }

    fn restore(&mut self, state: RpsState) {
        self.state = state;
    }

    fn take_notices(&mut self) -> Vec<Notice> {
        Vec::new()
    }
}
