//! Play area and selection state types.

use crate::card::Card;
use crate::result::MatchOutcome;

/// Where the current selection stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing selected.
    Idle,
    /// One or two cards selected.
    Selecting(u8),
    /// Three cards selected and evaluated; resolved by the next selection or
    /// card request.
    AwaitingResolution(MatchOutcome),
}

impl SelectionPhase {
    /// Returns the phase for a selection of `count` cards that has not been
    /// evaluated.
    pub(crate) const fn partial(count: usize) -> Self {
        if count == 0 {
            Self::Idle
        } else {
            Self::Selecting(count as u8)
        }
    }
}

/// A position in the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Holds a card in play.
    Occupied(Card),
    /// Holds a matched card that could not be replaced. Cleared to
    /// [`Slot::Empty`] by [`Game::clear_pending_removal`](super::Game::clear_pending_removal).
    PendingRemoval(Card),
    /// Blank and inert.
    Empty,
}

impl Slot {
    /// Returns the card if the slot is occupied.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::Occupied(card) => Some(*card),
            Self::PendingRemoval(_) | Self::Empty => None,
        }
    }
}
