//! Game configuration options.

/// Configuration options for a Set game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use setrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_initial_cards(15)
///     .with_match_reward(5)
///     .with_mismatch_penalty(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards dealt when a game starts.
    pub initial_cards: usize,
    /// Points added for a confirmed match.
    pub match_reward: i32,
    /// Points subtracted for three cards that do not match.
    pub mismatch_penalty: i32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_cards: 12,
            match_reward: 3,
            mismatch_penalty: 1,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt at the start of a game.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_cards(9);
    /// assert_eq!(options.initial_cards, 9);
    /// ```
    #[must_use]
    pub const fn with_initial_cards(mut self, count: usize) -> Self {
        self.initial_cards = count;
        self
    }

    /// Sets the points awarded per match.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_match_reward(10);
    /// assert_eq!(options.match_reward, 10);
    /// ```
    #[must_use]
    pub const fn with_match_reward(mut self, points: i32) -> Self {
        self.match_reward = points;
        self
    }

    /// Sets the points deducted per mismatch.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_mismatch_penalty(0);
    /// assert_eq!(options.mismatch_penalty, 0);
    /// ```
    #[must_use]
    pub const fn with_mismatch_penalty(mut self, points: i32) -> Self {
        self.mismatch_penalty = points;
        self
    }
}
