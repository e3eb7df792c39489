//! Outcome types returned by engine operations.

/// Result of evaluating three selected cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The cards form a match.
    Match,
    /// The cards do not match.
    Mismatch,
}

/// What happened to a pending three-card selection when it was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Matched slots were refilled from the deck.
    ///
    /// `unfilled` counts slots that could not be refilled because the deck
    /// ran out partway; those slots are now pending removal.
    Replaced {
        /// Number of slots refilled.
        replaced: u8,
        /// Number of slots left pending removal.
        unfilled: u8,
    },
    /// The deck was already exhausted; matched slots are pending removal.
    Removed,
    /// The selection was a mismatch and was simply cleared.
    Cleared,
}

/// Result of [`Game::select_card`](crate::Game::select_card).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The card was added to the selection (fewer than three selected).
    Selected,
    /// The card was already selected and has been deselected.
    Deselected,
    /// The card completed a selection of three that matches.
    Matched,
    /// The card completed a selection of three that does not match.
    Mismatched,
    /// The click only resolved the previous selection: the targeted slot
    /// became pending removal during resolution.
    Resolved,
}

/// Result of [`Game::request_more_cards`](crate::Game::request_more_cards).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealOutcome {
    /// A pending match was resolved instead of dealing.
    Resolved(Resolution),
    /// New slots were appended (1 to 3).
    Dealt(u8),
    /// The deck is exhausted and nothing was pending.
    Nothing,
}
