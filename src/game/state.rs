//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has been dealt yet.
    Idle,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Round has ended; start another with [`Game::new_round`](crate::Game::new_round).
    RoundOver,
}

impl GameState {
    /// Returns whether a new round may be started from this state.
    #[must_use]
    pub const fn can_deal(self) -> bool {
        matches!(self, Self::Idle | Self::RoundOver)
    }
}
