//! Plain-text views of each game.
//!
//! Views read engine state only; labels come from the localizer.

use std::fmt::Write;

use super::ActiveGame;
use crate::core::{Coord, Game, Localizer};
use crate::games::hangman::{Hangman, HangmanStatus};
use crate::games::memory::MemoryMatch;
use crate::games::rps::RockPaperScissors;
use crate::games::snake::{Snake, Status};
use crate::games::tictactoe::{Outcome, TicTacToe, BOARD};

/// Memory cards per rendered row.
const MEMORY_COLUMNS: usize = 4;

/// Render the mounted game.
pub fn render(active: &ActiveGame, l: &impl Localizer) -> String {
    match active {
        ActiveGame::TicTacToe(g) => tictactoe(g, l),
        ActiveGame::Memory(g) => memory(g, l),
        ActiveGame::RockPaperScissors(g) => rps(g, l),
        ActiveGame::Snake(g) => snake(g, l),
        ActiveGame::Hangman(g) => hangman(g, l),
    }
}

fn tictactoe(game: &TicTacToe, l: &impl Localizer) -> String {
    let state = game.state();
    let mut out = String::new();

    for row in state.cells.chunks(BOARD.width as usize) {
        let line: Vec<String> = row
            .iter()
            .map(|c| c.map_or_else(|| ".".to_string(), |m| m.to_string()))
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }

    let status = match state.outcome {
        Some(Outcome::Winner(mark)) => l.format("games.tictactoe.win", &[("winner", mark.to_string())]),
        Some(Outcome::Draw) => l.t("games.tictactoe.draw"),
        None => l.format("games.tictactoe.turn", &[("mark", state.turn.to_string())]),
    };
    out.push_str(&status);
    out
}

fn memory(game: &MemoryMatch, l: &impl Localizer) -> String {
    let state = game.state();
    let faces: Vec<&str> = state
        .cards
        .iter()
        .map(|c| if c.is_flipped || c.is_matched { c.symbol.as_str() } else { "?" })
        .collect();

    let mut out = String::new();
    for row in faces.chunks(MEMORY_COLUMNS) {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out.push_str(&l.format("games.memory.moves", &[("moves", state.move_count.to_string())]));
    out
}

fn rps(game: &RockPaperScissors, l: &impl Localizer) -> String {
    let state = game.state();
    let mut out = l.format(
        "games.rps.score",
        &[
            ("player", state.player_score.to_string()),
            ("computer", state.computer_score.to_string()),
        ],
    );

    if let (Some(player), Some(computer), Some(result)) = (state.player_choice, state.computer_choice, state.last_result) {
        let _ = write!(
            out,
            "\n{} vs {}: {}",
            l.t(player.label_key()),
            l.t(computer.label_key()),
            l.t(result.label_key())
        );
    }
    out
}

fn snake(game: &Snake, l: &impl Localizer) -> String {
    let state = game.state();
    let head = state.head();
    let mut out = String::new();

    for y in 0..i32::from(state.grid.height) {
        for x in 0..i32::from(state.grid.width) {
            let cell = Coord::new(x, y);
            let glyph = if Some(cell) == head {
                '@'
            } else if state.occupies(cell) {
                'o'
            } else if Some(cell) == state.food {
                '*'
            } else {
                '.'
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    let status = match state.status {
        Status::Idle => l.t("games.snake.idle"),
        Status::Running => l.format("games.snake.score", &[("score", state.score.to_string())]),
        Status::Over => l.format("games.snake.over", &[("score", state.score.to_string())]),
    };
    out.push_str(&status);
    out
}

fn hangman(game: &Hangman, l: &impl Localizer) -> String {
    let state = game.state();
    let masked: Vec<String> = game.masked_word().chars().map(String::from).collect();
    let mut out = masked.join(" ");

    let _ = write!(
        out,
        "\n{}",
        l.format("games.hangman.remaining", &[("remaining", state.remaining_guesses().to_string())])
    );

    let wrong: String = state.wrong_letters().into_iter().collect();
    if !wrong.is_empty() {
        let _ = write!(out, "\n{}", wrong);
    }

    match state.status {
        HangmanStatus::Won => {
            let _ = write!(out, "\n{}", l.format("games.hangman.won", &[("word", state.word.clone())]));
        }
        HangmanStatus::Lost => {
            let _ = write!(out, "\n{}", l.format("games.hangman.lost", &[("word", state.word.clone())]));
        }
        HangmanStatus::Playing => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Catalog, Direction, GameRng, GamesConfig, GridSize, HangmanConfig, SnakeConfig};
    use crate::games::hangman::{Guess, HangmanState};
    use crate::games::rps::Move;
    use crate::games::snake::SnakeState;
    use crate::games::tictactoe::PlayAt;

    #[test]
    fn test_tictactoe_view() {
        let mut game = TicTacToe::new();
        game.dispatch(PlayAt(0));
        game.dispatch(PlayAt(4));

        let text = render(&ActiveGame::TicTacToe(game), &Catalog::english());
        assert_eq!(text, "X . .\n. O .\n. . .\nPlayer X's turn");
    }

    #[test]
    fn test_memory_view_hides_face_down_cards() {
        let config = GamesConfig::default().with_memory_symbols(["a", "b"]);
        let game = MemoryMatch::new(&config.memory, GameRng::new(1));

        let text = render(&ActiveGame::Memory(game), &Catalog::english());
        assert_eq!(text, "? ? ? ?\nMoves: 0");
    }

    #[test]
    fn test_rps_view() {
        let mut game = RockPaperScissors::new(GameRng::new(1));
        game.play_against(Move::Rock, Move::Scissors);

        let text = render(&ActiveGame::RockPaperScissors(game), &Catalog::english());
        assert_eq!(text, "You 1 - 0 Computer\nRock vs Scissors: You win!");
    }

    #[test]
    fn test_snake_view() {
        let config = SnakeConfig {
            width: 4,
            height: 2,
            ..SnakeConfig::default()
        };
        let mut game = Snake::new(&config, GameRng::new(1));
        game.restore(SnakeState::with_body(
            GridSize::new(4, 2),
            [Coord::new(1, 0), Coord::new(0, 0)],
            Direction::Right,
            Some(Coord::new(3, 1)),
        ));

        let text = render(&ActiveGame::Snake(game), &Catalog::english());
        assert_eq!(text, "o@..\n...*\nScore: 0");
    }

    #[test]
    fn test_hangman_view() {
        let mut game = Hangman::new(&HangmanConfig::default(), GameRng::new(1));
        game.restore(HangmanState::with_word("cat", 6));
        game.dispatch(Guess('a'));
        game.dispatch(Guess('z'));

        let text = render(&ActiveGame::Hangman(game), &Catalog::english());
        assert_eq!(text, "_ a _\nGuesses left: 5\nz");
    }
}
