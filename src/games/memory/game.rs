//! Memory Match engine.

use std::time::Duration;

use im::Vector;
use log::{debug, info, trace};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Game, GameRng, MemoryConfig, Message, Notice, Timer};

/// Card identifier, unique within a deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One card of the deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: String,
    /// Face-up, either staged or matched.
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, symbol: impl Into<String>) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            is_flipped: false,
            is_matched: false,
        }
    }
}

/// Deck, staging buffer and progress.
///
/// ## Invariants
///
/// - every symbol appears on exactly two cards
/// - `staged` holds at most two face-up, unmatched cards
/// - `is_won` is set exactly when the last pair resolves as matched
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryState {
    pub cards: Vector<Card>,
    pub staged: SmallVec<[CardId; 2]>,
    pub move_count: u32,
    pub is_won: bool,
}

/// `symbols` with repeats removed, keeping first-seen order.
fn distinct_symbols(symbols: &[String]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    symbols.iter().filter(|s| seen.insert(s.as_str())).cloned().collect()
}

impl MemoryState {
    /// Deal two cards per distinct symbol in a uniformly random order.
    ///
    /// Repeated symbols are dealt once. Card ids follow deal order, so
    /// `cards[i].id == CardId(i)`.
    #[must_use]
    pub fn deal(symbols: &[String], rng: &mut GameRng) -> Self {
        let symbols = distinct_symbols(symbols);
        let mut faces: Vec<&str> = symbols.iter().flat_map(|s| [s.as_str(), s.as_str()]).collect();
        rng.shuffle(&mut faces);

        Self::with_cards(
            faces
                .into_iter()
                .enumerate()
                .map(|(i, symbol)| Card::new(CardId(i as u32), symbol)),
        )
    }

    /// A fresh game over the given cards, in the given order.
    #[must_use]
    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            staged: SmallVec::new(),
            move_count: 0,
            is_won: false,
        }
    }

    fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Get a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.position(id).map(|i| &self.cards[i])
    }

    /// True while two cards are staged and waiting to resolve.
    #[must_use]
    pub fn awaiting_resolution(&self) -> bool {
        self.staged.len() == 2
    }

    /// Number of pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// The state after flipping `id`.
    ///
    /// Returns `None` if the card is unknown, already face-up, already
    /// matched, or two cards are already staged.
    #[must_use]
    pub fn flip(&self, id: CardId) -> Option<Self> {
        if self.awaiting_resolution() {
            return None;
        }
        let index = self.position(id)?;
        let card = &self.cards[index];
        if card.is_flipped || card.is_matched {
            return None;
        }

        let mut next = self.clone();
        next.cards[index].is_flipped = true;
        next.staged.push(id);
        Some(next)
    }

    /// The state after resolving the staged pair.
    ///
    /// Returns `None` unless exactly two cards are staged. A stage that does
    /// not name two distinct cards of the deck is dropped: any card it does
    /// name turns back and no move is counted.
    #[must_use]
    pub fn resolve(&self) -> Option<Self> {
        let [first, second] = *self.staged.as_slice() else {
            return None;
        };
        let mut next = self.clone();
        next.staged.clear();

        let (Some(a), Some(b)) = (self.position(first), self.position(second)) else {
            next.turn_back(first);
            next.turn_back(second);
            return Some(next);
        };
        if a == b {
            next.turn_back(first);
            return Some(next);
        }

        if next.cards[a].symbol == next.cards[b].symbol {
            next.cards[a].is_matched = true;
            next.cards[b].is_matched = true;
        } else {
            next.cards[a].is_flipped = false;
            next.cards[b].is_flipped = false;
        }
        next.move_count += 1;
        next.is_won = next.cards.iter().all(|c| c.is_matched);
        Some(next)
    }

    fn turn_back(&mut self, id: CardId) {
        if let Some(i) = self.position(id) {
            if !self.cards[i].is_matched {
                self.cards[i].is_flipped = false;
            }
        }
    }
}

/// Action: flip a face-down card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flip(pub CardId);

/// Memory Match engine.
///
/// Owns the one-shot reveal timer; dropping or resetting the engine
/// cancels a pending resolution.
#[derive(Clone, Debug)]
pub struct MemoryMatch {
    state: MemoryState,
    symbols: Vec<String>,
    reveal_delay: Duration,
    pending: Option<Timer>,
    rng: GameRng,
    notices: Vec<Notice>,
}

impl MemoryMatch {
    /// Deal a new game from the configured symbols.
    #[must_use]
    pub fn new(config: &MemoryConfig, mut rng: GameRng) -> Self {
        let symbols = distinct_symbols(&config.symbols);
        let state = MemoryState::deal(&symbols, &mut rng);
        Self {
            state,
            symbols,
            reveal_delay: config.reveal_delay(),
            pending: None,
            rng,
            notices: Vec::new(),
        }
    }

    /// Start over with a new symbol set, cancelling any pending resolution.
    ///
    /// Repeated symbols are kept once.
    pub fn initialize(&mut self, symbols: &[String]) {
        self.cancel_pending();
        self.symbols = distinct_symbols(symbols);
        self.state = MemoryState::deal(&self.symbols, &mut self.rng);
        self.notices.clear();
        info!("memory: dealt {} cards", self.state.cards.len());
    }

    /// True while the reveal timer is live.
    #[must_use]
    pub fn pending_resolution(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the staged pair resolves.
    #[must_use]
    pub fn time_to_resolution(&self) -> Option<Duration> {
        self.pending.as_ref().map(Timer::remaining)
    }

    fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            debug!("memory: pending resolution cancelled");
        }
    }

    fn resolve_staged(&mut self) {
        let Some(next) = self.state.resolve() else {
            return;
        };
        if next.move_count == self.state.move_count {
            debug!("memory: dropped stage {:?} not in the deck", self.state.staged);
        }
        self.state = next;

        if self.state.is_won {
            info!("memory: won in {} moves", self.state.move_count);
            self.notices.push(Notice::success(Message::MemoryWon {
                moves: self.state.move_count,
            }));
        }
    }
}

impl Game for MemoryMatch {
    type State = MemoryState;
    type Action = Flip;

    fn state(&self) -> &MemoryState {
        &self.state
    }

    fn dispatch(&mut self, Flip(id): Flip) -> bool {
        let Some(next) = self.state.flip(id) else {
            trace!("memory: ignored flip of {}", id);
            return false;
        };
        self.state = next;

        if self.state.awaiting_resolution() {
            debug!("memory: resolution scheduled in {:?}", self.reveal_delay);
            self.pending = Some(Timer::once(self.reveal_delay));
        }
        true
    }

    fn reset(&mut self) {
        let symbols = std::mem::take(&mut self.symbols);
        self.initialize(&symbols);
    }

    fn is_terminal(&self) -> bool {
        self.state.is_won
    }

    fn restore(&mut self, state: MemoryState) {
        self.cancel_pending();
        if state.awaiting_resolution() {
            self.pending = Some(Timer::once(self.reveal_delay));
        }
        self.state = state;
    }

    fn advance(&mut self, elapsed: Duration) {
        let Some(timer) = self.pending.as_mut() else {
            return;
        };
        if timer.advance(elapsed) > 0 {
            self.pending = None;
            self.resolve_staged();
        }
    }

    fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
