//! Tic-Tac-Toe engine.

use log::{info, trace};
use serde::{Deserialize, Serialize};

use crate::core::{Game, GridSize, Line, Message, Notice};

/// The 3×3 board.
pub const BOARD: GridSize = GridSize::square(3);

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opponent's mark.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Board glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Mark),
    Draw,
}

/// Board, side to move and outcome.
///
/// `outcome` is `Some` exactly when a line is complete or the board is full.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeState {
    pub cells: [Option<Mark>; 9],
    pub turn: Mark,
    pub outcome: Option<Outcome>,
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self {
            cells: [None; 9],
            turn: Mark::X,
            outcome: None,
        }
    }
}

impl TicTacToeState {
    /// Empty board, X to move.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The state after the side to move plays `index`.
    ///
    /// Returns `None` if the game is over, `index` is off the board or the
    /// cell is taken.
    #[must_use]
    pub fn play_at(&self, index: usize) -> Option<Self> {
        if self.outcome.is_some() || !matches!(self.cells.get(index), Some(None)) {
            return None;
        }

        let mut next = *self;
        next.cells[index] = Some(self.turn);

        if next.completed_line(self.turn).is_some() {
            next.outcome = Some(Outcome::Winner(self.turn));
        } else if next.cells.iter().all(Option::is_some) {
            next.outcome = Some(Outcome::Draw);
        } else {
            next.turn = self.turn.other();
        }

        Some(next)
    }

    /// The line the winner completed, for highlighting.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        match self.outcome {
            Some(Outcome::Winner(mark)) => self.completed_line(mark),
            _ => None,
        }
    }

    /// Number of marks on the board.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn completed_line(&self, mark: Mark) -> Option<Line> {
        BOARD
            .full_lines()
            .into_iter()
            .find(|line| line.iter().all(|&i| self.cells[i] == Some(mark)))
    }
}

/// Action: place the side to move's mark at a cell index (0..9, row-major).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayAt(pub usize);

/// Tic-Tac-Toe engine.
#[derive(Clone, Debug, Default)]
pub struct TicTacToe {
    state: TicTacToeState,
    notices: Vec<Notice>,
}

impl TicTacToe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Game for TicTacToe {
    type State = TicTacToeState;
    type Action = PlayAt;

    fn state(&self) -> &TicTacToeState {
        &self.state
    }

    fn dispatch(&mut self, PlayAt(index): PlayAt) -> bool {
        let Some(next) = self.state.play_at(index) else {
            trace!("tictactoe: ignored move at {}", index);
            return false;
        };
        self.state = next;

        match next.outcome {
            Some(Outcome::Winner(mark)) => {
                info!("tictactoe: {} wins", mark);
                self.notices.push(Notice::success(Message::TicTacToeWinner { mark: mark.symbol() }));
            }
            Some(Outcome::Draw) => {
                info!("tictactoe: draw");
                self.notices.push(Notice::info(Message::TicTacToeDraw));
            }
            None => {}
        }
        true
    }

    fn reset(&mut self) {
        self.state = TicTacToeState::new();
        self.notices.clear();
    }

    fn is_terminal(&self) -> bool {
        self.state.outcome.is_some()
    }

    fn restore(&mut self, state: TicTacToeState) {
        self.state = state;
    }

    fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
