//! End-to-end scenarios for each engine.
//!
//! Every test drives an engine through the `Game` trait exactly as the
//! shell does: actions in, virtual time forward, notices out.

use std::time::Duration;

use rust_minigames::core::{
    Coord, Direction, Game, GameRng, GridSize, HangmanConfig, MemoryConfig, Message, Notice, SnakeConfig,
};
use rust_minigames::games::hangman::{Guess, Hangman, HangmanState, HangmanStatus};
use rust_minigames::games::memory::{CardId, Flip, MemoryMatch, MemoryState};
use rust_minigames::games::rps::{Choose, Move, RockPaperScissors, RoundResult};
use rust_minigames::games::snake::{Snake, SnakeAction, SnakeState, Status};
use rust_minigames::games::tictactoe::{Mark, Outcome, PlayAt, TicTacToe};

const REVEAL: Duration = Duration::from_millis(1000);
const TICK: Duration = Duration::from_millis(150);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Card ids grouped into matching pairs, in deck order of the first card.
fn matching_pairs(state: &MemoryState) -> Vec<(CardId, CardId)> {
    let mut pairs = Vec::new();
    for (i, card) in state.cards.iter().enumerate() {
        if let Some(other) = state.cards.iter().skip(i + 1).find(|c| c.symbol == card.symbol) {
            pairs.push((card.id, other.id));
        }
    }
    pairs
}

fn hangman_with(word: &str) -> Hangman {
    let mut game = Hangman::new(&HangmanConfig::default(), GameRng::new(3));
    game.restore(HangmanState::with_word(word, 6));
    game
}

// =============================================================================
// Tic-Tac-Toe
// =============================================================================

/// X takes the top row on the fifth move; no outcome before that.
#[test]
fn test_tictactoe_top_row_win() {
    init_logging();
    let mut game = TicTacToe::new();

    for (n, index) in [0, 4, 1, 3].into_iter().enumerate() {
        assert!(game.dispatch(PlayAt(index)), "move {} rejected", n);
        assert_eq!(game.state().outcome, None);
    }
    assert!(game.dispatch(PlayAt(2)));

    assert_eq!(game.state().outcome, Some(Outcome::Winner(Mark::X)));
    assert!(game.is_terminal());
    assert_eq!(game.take_notices(), vec![Notice::success(Message::TicTacToeWinner { mark: 'X' })]);

    // Finished board ignores further moves
    assert!(!game.dispatch(PlayAt(8)));
    assert_eq!(game.state().cells[8], None);
}

/// Nine moves without a line end in a draw.
#[test]
fn test_tictactoe_draw() {
    let mut game = TicTacToe::new();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.dispatch(PlayAt(index));
    }

    assert_eq!(game.state().outcome, Some(Outcome::Draw));
    assert_eq!(game.take_notices(), vec![Notice::info(Message::TicTacToeDraw)]);
}

// =============================================================================
// Memory Match
// =============================================================================

/// Four symbols, four known pairs: won after exactly four moves.
#[test]
fn test_memory_four_pairs() {
    init_logging();
    let config = MemoryConfig {
        symbols: ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect(),
        reveal_delay_ms: 1000,
    };
    let mut game = MemoryMatch::new(&config, GameRng::new(17));
    assert_eq!(game.state().cards.len(), 8);

    let pairs = matching_pairs(game.state());
    assert_eq!(pairs.len(), 4);

    for (n, (first, second)) in pairs.into_iter().enumerate() {
        assert!(game.dispatch(Flip(first)));
        assert!(game.dispatch(Flip(second)));
        assert_eq!(game.state().move_count, n as u32, "moves counted before resolution");
        assert!(!game.state().is_won);

        game.advance(REVEAL);
        assert_eq!(game.state().move_count, n as u32 + 1);
    }

    assert!(game.state().is_won);
    assert_eq!(game.take_notices(), vec![Notice::success(Message::MemoryWon { moves: 4 })]);
}

/// A third flip while two cards are staged is dropped, not queued.
#[test]
fn test_memory_third_flip_is_dropped() {
    let config = MemoryConfig {
        symbols: vec!["x".to_string(), "y".to_string()],
        reveal_delay_ms: 1000,
    };
    let mut game = MemoryMatch::new(&config, GameRng::new(5));
    let ids: Vec<CardId> = game.state().cards.iter().map(|c| c.id).collect();

    game.dispatch(Flip(ids[0]));
    game.dispatch(Flip(ids[1]));
    assert!(!game.dispatch(Flip(ids[2])));
    assert_eq!(game.state().staged.len(), 2);

    game.advance(REVEAL);
    assert!(game.state().staged.is_empty());
    assert!(!game.state().card(ids[2]).is_some_and(|c| c.is_flipped));
}

// =============================================================================
// Rock-Paper-Scissors
// =============================================================================

/// Rock against a forced Scissors scores for the player.
#[test]
fn test_rps_rock_beats_scissors() {
    let mut game = RockPaperScissors::new(GameRng::new(1));
    let result = game.play_against(Move::Rock, Move::Scissors);

    assert_eq!(result, RoundResult::Win);
    assert_eq!(game.state().player_score, 1);
    assert_eq!(game.state().computer_score, 0);
    assert_eq!(game.state().last_result, Some(RoundResult::Win));
}

/// Random rounds keep the score consistent with the results.
#[test]
fn test_rps_random_rounds() {
    let mut game = RockPaperScissors::new(GameRng::new(99));
    let mut wins = 0;
    let mut losses = 0;

    for _ in 0..30 {
        assert!(game.dispatch(Choose(Move::Paper)));
        match game.state().last_result {
            Some(RoundResult::Win) => wins += 1,
            Some(RoundResult::Lose) => losses += 1,
            _ => {}
        }
    }

    assert_eq!(game.state().player_score, wins);
    assert_eq!(game.state().computer_score, losses);
    assert!(!game.is_terminal());
    assert!(game.take_notices().is_empty());
}

// =============================================================================
// Snake
// =============================================================================

/// One tick to the right without food keeps the length.
#[test]
fn test_snake_single_step() {
    let mut game = Snake::new(&SnakeConfig::default(), GameRng::new(8));
    game.restore(SnakeState::with_body(
        GridSize::square(20),
        [Coord::new(5, 5)],
        Direction::Right,
        Some(Coord::new(15, 15)),
    ));

    game.advance(TICK);

    let body: Vec<Coord> = game.state().body.iter().copied().collect();
    assert_eq!(body, vec![Coord::new(6, 5)]);
    assert_eq!(game.state().score, 0);
}

/// Reversing straight into the neck is rejected.
#[test]
fn test_snake_reversal_rejected() {
    let mut game = Snake::new(&SnakeConfig::default(), GameRng::new(8));
    game.restore(SnakeState::with_body(
        GridSize::square(20),
        [Coord::new(5, 5), Coord::new(4, 5)],
        Direction::Right,
        Some(Coord::new(15, 15)),
    ));

    assert!(!game.dispatch(SnakeAction::Steer(Direction::Left)));
    game.advance(TICK);

    assert_eq!(game.state().direction, Some(Direction::Right));
    assert_eq!(game.state().head(), Some(Coord::new(6, 5)));
    assert_eq!(game.state().status, Status::Running);
}

/// Up then left within one tick: left is checked against the committed
/// direction, not the pending one, so it is rejected.
#[test]
fn test_snake_two_presses_one_tick() {
    let mut game = Snake::new(&SnakeConfig::default(), GameRng::new(8));
    game.restore(SnakeState::with_body(
        GridSize::square(20),
        [Coord::new(5, 5), Coord::new(4, 5)],
        Direction::Right,
        None,
    ));

    assert!(game.dispatch(SnakeAction::Steer(Direction::Up)));
    // Still checked against the committed Right
    assert!(!game.dispatch(SnakeAction::Steer(Direction::Left)));
    game.advance(TICK);

    assert_eq!(game.state().head(), Some(Coord::new(5, 4)));
    assert_eq!(game.state().status, Status::Running);
}

/// Circling into its own body ends the game and freezes the body.
#[test]
fn test_snake_self_collision() {
    let mut game = Snake::new(&SnakeConfig::default(), GameRng::new(8));
    game.restore(SnakeState::with_body(
        GridSize::square(20),
        [
            Coord::new(5, 5),
            Coord::new(4, 5),
            Coord::new(4, 6),
            Coord::new(5, 6),
            Coord::new(6, 6),
        ],
        Direction::Right,
        None,
    ));

    game.dispatch(SnakeAction::Steer(Direction::Down));
    let before = game.state().body.clone();
    game.advance(TICK);

    assert_eq!(game.state().status, Status::Over);
    assert_eq!(game.state().body, before);
    assert!(!game.ticking());
    assert_eq!(game.take_notices(), vec![Notice::error(Message::SnakeOver { score: 0 })]);
}

// =============================================================================
// Hangman
// =============================================================================

/// "cat" guessed in three correct letters.
#[test]
fn test_hangman_win() {
    let mut game = hangman_with("cat");
    for letter in ['a', 't', 'c'] {
        assert!(game.dispatch(Guess(letter)));
    }

    assert_eq!(game.state().status, HangmanStatus::Won);
    assert_eq!(game.state().wrong_count, 0);
    assert_eq!(game.masked_word(), "cat");
    assert_eq!(
        game.take_notices(),
        vec![Notice::success(Message::HangmanWon { word: "cat".to_string() })]
    );
}

/// Six misses lose the game.
#[test]
fn test_hangman_loss() {
    let mut game = hangman_with("cat");
    for letter in ['x', 'y', 'z', 'q', 'w', 'e'] {
        game.dispatch(Guess(letter));
    }

    assert_eq!(game.state().wrong_count, 6);
    assert_eq!(game.state().status, HangmanStatus::Lost);
    assert!(!game.dispatch(Guess('c')));
    assert_eq!(
        game.take_notices(),
        vec![Notice::error(Message::HangmanLost { word: "cat".to_string() })]
    );
}

/// The final correct letter wins even after five misses.
#[test]
fn test_hangman_last_attempt_win() {
    let mut game = hangman_with("cat");
    for letter in ['x', 'y', 'z', 'q', 'w', 'c', 'a'] {
        game.dispatch(Guess(letter));
    }
    assert_eq!(game.state().status, HangmanStatus::Playing);

    game.dispatch(Guess('t'));
    assert_eq!(game.state().status, HangmanStatus::Won);
    assert_eq!(game.state().remaining_guesses(), 1);
}
