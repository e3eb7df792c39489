//! Game engine and state management.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;
use tracing::debug;

use crate::card::{Card, CardId, DECK_SIZE, full_deck};
use crate::error::NewGameError;
use crate::options::GameOptions;
use crate::rules::find_match;

mod deal;
mod select;
pub mod state;

pub use state::{SelectionPhase, Slot};

/// Number of cards in a selection, and in a regular deal.
pub const SELECTION_SIZE: usize = 3;

/// Number of matches needed to clear the whole deck.
pub const MATCHES_PER_GAME: u32 = (DECK_SIZE / SELECTION_SIZE) as u32;

/// A Set rule engine that manages the deck, the play area, and scoring.
///
/// The engine owns the shuffled deck, the slots on the table, the current
/// selection, and the score. Renderers read its state after every call and
/// forward clicks through [`Game::select_card`] and [`Game::request_more_cards`].
#[derive(Debug, Clone)]
pub struct Game {
    /// The deck in dealing order.
    deck: Vec<Card>,
    /// Game options.
    options: GameOptions,
    /// Play area, in stable slot order.
    slots: Vec<Slot>,
    /// Current selection, in click order.
    selected: Vec<Card>,
    /// Every card that was part of a confirmed match, in match order.
    matched: Vec<Card>,
    /// Identifiers of `matched`, for membership tests.
    matched_ids: HashSet<CardId>,
    /// Matched cards left on the table without a replacement.
    pending_removal: Vec<Card>,
    /// Current score.
    score: i32,
    /// Confirmed matches this game.
    matches_found: u32,
    /// Index of the next undealt card in `deck`.
    deck_cursor: usize,
    /// Selection state machine tag.
    phase: SelectionPhase,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates an engine with the given seed and deals the first game.
    ///
    /// # Errors
    ///
    /// Returns an error if `options.initial_cards` exceeds the deck size.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.slots().len(), 12);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, NewGameError> {
        let mut game = Self {
            deck: full_deck(),
            options,
            slots: Vec::new(),
            selected: Vec::with_capacity(SELECTION_SIZE),
            matched: Vec::new(),
            matched_ids: HashSet::new(),
            pending_removal: Vec::new(),
            score: 0,
            matches_found: 0,
            deck_cursor: 0,
            phase: SelectionPhase::Idle,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.new_game(options.initial_cards)?;
        Ok(game)
    }

    /// Reshuffles the deck and deals a fresh game with `initial_count` cards.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_count` exceeds the deck size. The current
    /// game is left untouched in that case.
    pub fn new_game(&mut self, initial_count: usize) -> Result<(), NewGameError> {
        if initial_count > DECK_SIZE {
            return Err(NewGameError::InvalidConfiguration {
                requested: initial_count,
                max: DECK_SIZE,
            });
        }

        self.deck.shuffle(&mut self.rng);
        self.deck_cursor = 0;
        self.slots.clear();
        self.selected.clear();
        self.matched.clear();
        self.matched_ids.clear();
        self.pending_removal.clear();
        self.score = 0;
        self.matches_found = 0;
        self.phase = SelectionPhase::Idle;

        while self.slots.len() < initial_count {
            let Some(card) = self.draw() else {
                break;
            };
            self.slots.push(Slot::Occupied(card));
        }

        debug!(initial_count, "started new game");
        Ok(())
    }

    /// Takes the next undealt card from the deck.
    fn draw(&mut self) -> Option<Card> {
        let card = self.deck.get(self.deck_cursor).copied()?;
        self.deck_cursor += 1;
        Some(card)
    }

    /// Returns the slot index currently holding `card` in play.
    fn slot_of(&self, card: Card) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| *slot == Slot::Occupied(card))
    }

    /// Turns every slot pending removal into an empty slot.
    ///
    /// Renderers call this once they have drawn the blanked slots. Returns
    /// the number of slots cleared.
    pub fn clear_pending_removal(&mut self) -> usize {
        let mut cleared = 0;
        for slot in &mut self.slots {
            if matches!(slot, Slot::PendingRemoval(_)) {
                *slot = Slot::Empty;
                cleared += 1;
            }
        }
        self.pending_removal.clear();
        cleared
    }

    /// Finds a matching triple among the cards in play.
    ///
    /// Returns slot indices in ascending order. Does not affect the score.
    pub fn hint(&self) -> Option<[usize; 3]> {
        let in_play: Vec<(usize, Card)> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.card().map(|card| (index, card)))
            .collect();
        let cards: Vec<Card> = in_play.iter().map(|&(_, card)| card).collect();

        find_match(&cards).map(|positions| positions.map(|position| in_play[position].0))
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns every slot in the play area.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the card in play at `index`, if any.
    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.slots.get(index).and_then(Slot::card)
    }

    /// Returns the cards in play, in slot order.
    pub fn playing_cards(&self) -> Vec<Card> {
        self.slots.iter().filter_map(Slot::card).collect()
    }

    /// Returns the current selection, in click order.
    pub fn selected_cards(&self) -> &[Card] {
        &self.selected
    }

    /// Returns every card matched this game, in match order.
    pub fn matched_cards(&self) -> &[Card] {
        &self.matched
    }

    /// Returns the cards waiting to be cleared from the table.
    pub fn pending_removal(&self) -> &[Card] {
        &self.pending_removal
    }

    /// Returns whether `card` is currently selected.
    pub fn is_selected(&self, card: Card) -> bool {
        self.selected.contains(&card)
    }

    /// Returns whether `card` has been part of a confirmed match this game.
    pub fn is_matched(&self, card: Card) -> bool {
        self.matched_ids.contains(&card.id())
    }

    /// Returns whether `card` is waiting to be cleared from the table.
    pub fn is_pending_removal(&self, card: Card) -> bool {
        self.pending_removal.contains(&card)
    }

    /// Returns the current score.
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// Returns the number of confirmed matches.
    pub const fn matches_found(&self) -> u32 {
        self.matches_found
    }

    /// Returns the index of the next undealt card.
    pub const fn deck_cursor(&self) -> usize {
        self.deck_cursor
    }

    /// Returns the number of cards not yet dealt.
    pub const fn cards_remaining(&self) -> usize {
        DECK_SIZE - self.deck_cursor
    }

    /// Returns whether every card has been dealt.
    pub const fn deck_exhausted(&self) -> bool {
        self.deck_cursor >= DECK_SIZE
    }

    /// Returns the selection phase.
    pub const fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Returns whether every card in the deck has been matched.
    ///
    /// The engine keeps accepting input afterwards; stopping play is up to
    /// the caller.
    pub const fn is_complete(&self) -> bool {
        self.matches_found >= MATCHES_PER_GAME
    }
}
