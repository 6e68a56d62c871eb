//! Error types for deck and game operations.

use thiserror::Error;

/// Errors that can occur when working with a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("no cards left in the deck")]
    Exhausted,
    /// The deck was shuffled after cards had been drawn from it.
    #[error("cannot shuffle a deck after drawing from it")]
    ShuffleAfterDraw,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is still waiting for the player to act.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// Not enough cards to deal the opening hands.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The deck ran out mid-round; the round has been ended as a push.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Exhausted => Self::DeckExhausted,
            DeckError::ShuffleAfterDraw => Self::InvalidState,
        }
    }
}
