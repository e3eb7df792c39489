//! A rule engine for the Set card game with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the 81-card deck, the slots
//! on the table, the player's selection, and the score. A renderer forwards
//! clicks to [`Game::select_card`] and [`Game::request_more_cards`] and
//! redraws from the engine's state after each call.
//!
//! # Example
//!
//! ```
//! use setrs::{Game, GameOptions, SelectOutcome};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! if let Some([a, b, c]) = game.hint() {
//!     game.select_card(a).unwrap();
//!     game.select_card(b).unwrap();
//!     assert_eq!(game.select_card(c), Ok(SelectOutcome::Matched));
//!     assert_eq!(game.score(), 3);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod rules;
mod shared;
mod sync;

// Re-export main types
pub use card::{Card, CardId, Color, DECK_SIZE, FEATURE_COUNT, Shading, Shape, Variant, full_deck};
pub use error::{NewGameError, SelectError};
pub use game::{Game, MATCHES_PER_GAME, SELECTION_SIZE, SelectionPhase, Slot};
pub use options::GameOptions;
pub use result::{DealOutcome, MatchOutcome, Resolution, SelectOutcome};
pub use rules::{find_match, is_match};
pub use shared::SharedGame;
