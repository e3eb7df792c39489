//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewGameError {
    /// More initial cards were requested than the deck holds.
    #[error("cannot deal {requested} initial cards from a deck of {max}")]
    InvalidConfiguration {
        /// Requested initial card count.
        requested: usize,
        /// Deck size.
        max: usize,
    },
}

/// Errors that can occur when selecting a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The slot is out of range, empty, or holds a card pending removal.
    #[error("slot {index} does not hold a selectable card")]
    InvalidSlot {
        /// The rejected slot index.
        index: usize,
    },
}
