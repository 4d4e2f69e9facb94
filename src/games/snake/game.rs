//! Snake engine: the tick loop, keyboard listener and outcome notice.

use std::time::Duration;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::state::{SnakeState, Status};
use crate::core::{Coord, Direction, Game, GameRng, GridSize, KeyEvent, KeyListener, Message, Notice, SnakeConfig, Timer};

/// Player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeAction {
    /// Leave idle and start moving right.
    Start,
    /// Request a new heading for the next tick.
    Steer(Direction),
}

/// Snake engine.
///
/// Owns the recurring tick timer and the keyboard listener. Both exist
/// only while the game is running.
#[derive(Clone, Debug)]
pub struct Snake {
    state: SnakeState,
    grid: GridSize,
    start: Coord,
    tick_period: Duration,
    ticker: Option<Timer>,
    listener: KeyListener,
    rng: GameRng,
    notices: Vec<Notice>,
}

impl Snake {
    #[must_use]
    pub fn new(config: &SnakeConfig, mut rng: GameRng) -> Self {
        let state = SnakeState::idle(config.grid(), config.start, &mut rng);
        Self {
            state,
            grid: config.grid(),
            start: config.start,
            tick_period: config.tick_period(),
            ticker: None,
            listener: KeyListener::new(),
            rng,
            notices: Vec::new(),
        }
    }

    /// True while arrow keys are being captured.
    #[must_use]
    pub fn keyboard_attached(&self) -> bool {
        self.listener.is_attached()
    }

    /// True while the tick loop is scheduled.
    #[must_use]
    pub fn ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Handle a key-down event from the global listener.
    ///
    /// Returns `true` if the key was consumed. Nothing is consumed while
    /// the listener is detached, and only arrow keys are consumed at all.
    pub fn key_down(&mut self, event: &KeyEvent) -> bool {
        if !self.listener.is_attached() {
            return false;
        }
        match event.arrow() {
            Some(key) => {
                self.dispatch(SnakeAction::Steer(key.direction()));
                true
            }
            None => false,
        }
    }

    /// Run one simulation step now.
    fn step(&mut self) {
        let Some(next) = self.state.tick(&mut self.rng) else {
            return;
        };
        let ate = next.score > self.state.score;
        self.state = next;

        if ate {
            debug!("snake: ate food, score {}", self.state.score);
        }
        if self.state.status == Status::Over {
            self.stop();
            info!("snake: over with score {}", self.state.score);
            self.notices.push(Notice::error(Message::SnakeOver { score: self.state.score }));
        }
    }

    fn run(&mut self) {
        debug!("snake: tick every {:?}", self.tick_period);
        self.ticker = Some(Timer::repeating(self.tick_period));
        self.listener.attach();
    }

    fn stop(&mut self) {
        if self.ticker.take().is_some() {
            debug!("snake: tick loop cancelled");
        }
        self.listener.detach();
    }
}

impl Game for Snake {
    type State = SnakeState;
    type Action = SnakeAction;

    fn state(&self) -> &SnakeState {
        &self.state
    }

    fn dispatch(&mut self, action: SnakeAction) -> bool {
        let next = match action {
            SnakeAction::Start => self.state.start(),
            SnakeAction::Steer(direction) => self.state.steer(direction),
        };
        let Some(next) = next else {
            trace!("snake: ignored {:?}", action);
            return false;
        };
        self.state = next;

        if action == SnakeAction::Start {
            info!("snake: started");
            self.run();
        }
        true
    }

    fn reset(&mut self) {
        self.stop();
        self.state = SnakeState::idle(self.grid, self.start, &mut self.rng);
        self.notices.clear();
    }

    fn is_terminal(&self) -> bool {
        self.state.status == Status::Over
    }

    fn restore(&mut self, state: SnakeState) {
        self.stop();
        let running = state.status == Status::Running;
        self.state = state;
        if running {
            self.run();
        }
    }

    fn advance(&mut self, elapsed: Duration) {
        let fired = match self.ticker.as_mut() {
            Some(ticker) => ticker.advance(elapsed),
            None => return,
        };
        for _ in 0..fired {
            self.step();
            if self.ticker.is_none() {
                break;
            }
        }
    }

    fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(150);

    fn snake() -> Snake {
        Snake::new(&SnakeConfig::default(), GameRng::new(21))
    }

    #[test]
    fn test_idle_until_started() {
        let mut game = snake();
        game.advance(TICK * 10);

        assert_eq!(game.state().status, Status::Idle);
        assert_eq!(game.state().head(), Some(Coord::new(10, 10)));
        assert!(!game.ticking());
        assert!(!game.keyboard_attached());
    }

    #[test]
    fn test_start_schedules_ticks_and_listener() {
        let mut game = snake();
        assert!(game.dispatch(SnakeAction::Start));
        assert!(game.ticking());
        assert!(game.keyboard_attached());
        assert!(!game.dispatch(SnakeAction::Start));

        game.advance(Duration::from_millis(149));
        assert_eq!(game.state().head(), Some(Coord::new(10, 10)));

        game.advance(Duration::from_millis(1));
        assert_eq!(game.state().head(), Some(Coord::new(11, 10)));
    }

    #[test]
    fn test_keys_ignored_while_idle() {
        let mut game = snake();
        assert!(!game.key_down(&KeyEvent::new("ArrowUp")));
        assert_eq!(game.state().pending_direction, None);
    }

    #[test]
    fn test_arrow_keys_steer_while_running() {
        let mut game = snake();
        game.dispatch(SnakeAction::Start);

        assert!(game.key_down(&KeyEvent::new("ArrowDown")));
        assert!(!game.key_down(&KeyEvent::new("Enter")));
        game.advance(TICK);
        assert_eq!(game.state().head(), Some(Coord::new(10, 11)));

        // Reversal is consumed as a key press but changes nothing
        assert!(game.key_down(&KeyEvent::new("ArrowUp")));
        game.advance(TICK);
        assert_eq!(game.state().head(), Some(Coord::new(10, 12)));
    }

    #[test]
    fn test_runs_into_wall_and_stops() {
        let mut game = snake();
        game.dispatch(SnakeAction::Start);

        // 9 steps reach x = 19, the 10th leaves the board
        game.restore(SnakeState::with_body(
            GridSize::square(20),
            [Coord::new(10, 10)],
            Direction::Right,
            Some(Coord::new(0, 0)),
        ));
        game.advance(TICK * 20);

        assert_eq!(game.state().status, Status::Over);
        assert_eq!(game.state().head(), Some(Coord::new(19, 10)));
        assert!(!game.ticking());
        assert!(!game.keyboard_attached());
        assert!(game.is_terminal());

        let notices = game.take_notices();
        assert_eq!(notices, vec![Notice::error(Message::SnakeOver { score: 0 })]);
    }

    #[test]
    fn test_over_is_frozen() {
        let mut game = snake();
        game.restore(SnakeState::with_body(
            GridSize::square(20),
            [Coord::new(19, 0)],
            Direction::Right,
            Some(Coord::new(0, 0)),
        ));
        game.advance(TICK);
        let over = game.state().clone();

        assert!(!game.dispatch(SnakeAction::Steer(Direction::Up)));
        assert!(!game.dispatch(SnakeAction::Start));
        game.advance(TICK * 5);
        assert_eq!(*game.state(), over);
    }

    #[test]
    fn test_reset_cancels_loop() {
        let mut game = snake();
        game.dispatch(SnakeAction::Start);
        game.advance(TICK * 3);

        game.reset();
        assert_eq!(game.state().status, Status::Idle);
        assert_eq!(game.state().body.len(), 1);
        assert!(!game.ticking());
        assert!(!game.keyboard_attached());

        game.advance(TICK * 3);
        assert_eq!(game.state().head(), Some(Coord::new(10, 10)));
    }

    #[test]
    fn test_eating_scores() {
        let mut game = snake();
        game.restore(SnakeState::with_body(
            GridSize::square(20),
            [Coord::new(5, 5)],
            Direction::Right,
            Some(Coord::new(7, 5)),
        ));
        game.advance(TICK * 2);

        let state = game.state();
        assert_eq!(state.score, 1);
        assert_eq!(state.body.len(), 2);
        assert_eq!(state.head(), Some(Coord::new(7, 5)));
        assert!(state.food.is_some_and(|f| !state.occupies(f)));
    }

    #[test]
    fn test_advance_by_max_duration_ends_game() {
        let mut game = snake();
        game.dispatch(SnakeAction::Start);

        game.advance(Duration::MAX);
        assert_eq!(game.state().status, Status::Over);
        assert!(!game.ticking());
        assert_eq!(game.take_notices().len(), 1);
    }
}
