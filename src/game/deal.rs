use core::mem;

use tracing::trace;

use crate::card::Card;
use crate::result::{DealOutcome, MatchOutcome, Resolution};

use super::{Game, SELECTION_SIZE, SelectionPhase, Slot};

impl Game {
    /// Asks for more cards.
    ///
    /// If a match is waiting to be resolved, it is resolved instead of
    /// dealing. Otherwise up to three new slots are appended while the deck
    /// lasts. Once the deck is exhausted and nothing is pending, this does
    /// nothing.
    ///
    /// Whether to call this at all when the table is full is the renderer's
    /// decision; the engine places no cap on the number of slots.
    pub fn request_more_cards(&mut self) -> DealOutcome {
        if self.phase == SelectionPhase::AwaitingResolution(MatchOutcome::Match) {
            if let Some(resolution) = self.resolve_pending_selection() {
                return DealOutcome::Resolved(resolution);
            }
        }

        let mut dealt = 0u8;
        while usize::from(dealt) < SELECTION_SIZE {
            let Some(card) = self.draw() else {
                break;
            };
            self.slots.push(Slot::Occupied(card));
            dealt += 1;
        }

        trace!(dealt, cursor = self.deck_cursor, "dealt extra cards");

        if dealt == 0 {
            DealOutcome::Nothing
        } else {
            DealOutcome::Dealt(dealt)
        }
    }

    /// Resolves a three-card selection that has already been scored.
    ///
    /// Matched cards are refilled from the deck slot by slot; any slot the
    /// deck cannot refill is marked pending removal. A mismatch is just
    /// cleared. Returns `None` when no full selection is pending.
    pub(super) fn resolve_pending_selection(&mut self) -> Option<Resolution> {
        let SelectionPhase::AwaitingResolution(outcome) = self.phase else {
            return None;
        };

        let selected = mem::take(&mut self.selected);
        let resolution = match outcome {
            MatchOutcome::Mismatch => Resolution::Cleared,
            MatchOutcome::Match if self.deck_exhausted() => {
                for &card in &selected {
                    self.retire(card);
                }
                Resolution::Removed
            }
            MatchOutcome::Match => {
                let mut replaced = 0;
                let mut unfilled = 0;
                for &card in &selected {
                    if self.replace(card) {
                        replaced += 1;
                    } else {
                        unfilled += 1;
                    }
                }
                Resolution::Replaced { replaced, unfilled }
            }
        };

        self.selected = selected;
        self.selected.clear();
        self.phase = SelectionPhase::Idle;

        trace!(?resolution, cursor = self.deck_cursor, "resolved selection");
        Some(resolution)
    }

    /// Refills the slot holding `card` with the next undealt card.
    ///
    /// Returns `false` and retires the slot if the deck is empty.
    fn replace(&mut self, card: Card) -> bool {
        let Some(index) = self.slot_of(card) else {
            return false;
        };
        match self.draw() {
            Some(next) => {
                self.slots[index] = Slot::Occupied(next);
                true
            }
            None => {
                self.slots[index] = Slot::PendingRemoval(card);
                self.pending_removal.push(card);
                false
            }
        }
    }

    /// Marks the slot holding `card` as pending removal.
    fn retire(&mut self, card: Card) {
        if let Some(index) = self.slot_of(card) {
            self.slots[index] = Slot::PendingRemoval(card);
            self.pending_removal.push(card);
        }
    }
}
