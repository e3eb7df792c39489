use tracing::debug;

use crate::card::Card;
use crate::error::SelectError;
use crate::result::{MatchOutcome, SelectOutcome};
use crate::rules::is_match;

use super::{Game, SELECTION_SIZE, SelectionPhase};

impl Game {
    /// Selects or deselects the card at `slot_index`.
    ///
    /// A previous three-card selection is resolved first, so a click right
    /// after a match also refills (or retires) the matched slots. Selecting a
    /// third card scores the selection immediately; the three cards stay
    /// selected until the next click or card request.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::InvalidSlot`] if the slot is out of range,
    /// empty, or pending removal. Nothing changes in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::{Game, GameOptions, SelectOutcome};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7).unwrap();
    /// assert_eq!(game.select_card(0), Ok(SelectOutcome::Selected));
    /// assert_eq!(game.select_card(0), Ok(SelectOutcome::Deselected));
    /// ```
    pub fn select_card(&mut self, slot_index: usize) -> Result<SelectOutcome, SelectError> {
        if self.card_at(slot_index).is_none() {
            return Err(SelectError::InvalidSlot { index: slot_index });
        }

        self.resolve_pending_selection();

        // The slot may have been refilled or retired by the resolution.
        let Some(card) = self.card_at(slot_index) else {
            return Ok(SelectOutcome::Resolved);
        };

        if let Some(position) = self.selected.iter().position(|&selected| selected == card) {
            self.selected.remove(position);
            self.phase = SelectionPhase::partial(self.selected.len());
            return Ok(SelectOutcome::Deselected);
        }

        self.selected.push(card);

        if self.selected.len() < SELECTION_SIZE {
            self.phase = SelectionPhase::partial(self.selected.len());
            return Ok(SelectOutcome::Selected);
        }

        let cards = [self.selected[0], self.selected[1], self.selected[2]];
        let outcome = self.score_selection(cards);
        self.phase = SelectionPhase::AwaitingResolution(outcome);

        Ok(match outcome {
            MatchOutcome::Match => SelectOutcome::Matched,
            MatchOutcome::Mismatch => SelectOutcome::Mismatched,
        })
    }

    /// Evaluates a full selection and updates the score.
    fn score_selection(&mut self, cards: [Card; 3]) -> MatchOutcome {
        let [a, b, c] = cards;
        if is_match(&a, &b, &c) {
            for card in cards {
                self.matched.push(card);
                self.matched_ids.insert(card.id());
            }
            self.score = self.score.saturating_add(self.options.match_reward);
            self.matches_found += 1;
            debug!(
                score = self.score,
                matches_found = self.matches_found,
                "match found"
            );
            MatchOutcome::Match
        } else {
            self.score = self.score.saturating_sub(self.options.mismatch_penalty);
            debug!(score = self.score, "selection does not match");
            MatchOutcome::Mismatch
        }
    }
}
