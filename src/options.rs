//! Game configuration options.

/// What the game does when the deck runs out mid-round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ExhaustionPolicy {
    /// End the round immediately as a push.
    #[default]
    Push,
    /// Replace the deck with a fresh shuffled one and keep drawing.
    Reshuffle,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_solo::{ExhaustionPolicy, GameOptions};
///
/// let options = GameOptions::default()
///     .with_stand_on_soft_17(false)
///     .with_exhaustion(ExhaustionPolicy::Reshuffle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Behavior when the deck is exhausted during a round.
    pub exhaustion: ExhaustionPolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            stand_on_soft_17: true,
            exhaustion: ExhaustionPolicy::Push,
        }
    }
}

impl GameOptions {
    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_solo::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the deck exhaustion policy.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_solo::{ExhaustionPolicy, GameOptions};
    ///
    /// let options = GameOptions::default().with_exhaustion(ExhaustionPolicy::Reshuffle);
    /// assert_eq!(options.exhaustion, ExhaustionPolicy::Reshuffle);
    /// ```
    #[must_use]
    pub const fn with_exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion = policy;
        self
    }
}
