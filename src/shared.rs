//! Lock-guarded engine for embeddings that share it across threads.

use crate::game::Game;
use crate::sync::Mutex;

/// A [`Game`] behind a single mutex.
///
/// Every call runs with exclusive access to the whole engine, so concurrent
/// callers see the same sequential behavior as a single-threaded renderer.
///
/// ```
/// use setrs::{Game, GameOptions, SharedGame};
///
/// let shared = SharedGame::new(Game::new(GameOptions::default(), 1).unwrap());
/// let score = shared.with(|game| game.score());
/// assert_eq!(score, 0);
/// ```
pub struct SharedGame {
    inner: Mutex<Game>,
}

impl SharedGame {
    /// Wraps an engine.
    #[must_use]
    pub const fn new(game: Game) -> Self {
        Self {
            inner: Mutex::new(game),
        }
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut game = self.inner.lock();
        f(&mut game)
    }

    /// Returns the wrapped engine.
    #[must_use]
    pub fn into_inner(self) -> Game {
        self.inner.into_inner()
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        Self::new(game)
    }
}
