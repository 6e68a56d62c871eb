//! Round result types.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21; the dealer did not play.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has the higher value.
    PlayerWins,
    /// Dealer has the higher value.
    DealerWins,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Returns `Some(true)` if the player won, `Some(false)` if the player
    /// lost, and `None` on a push.
    #[must_use]
    pub const fn player_wins(self) -> Option<bool> {
        match self {
            Self::DealerBust | Self::PlayerWins => Some(true),
            Self::PlayerBust | Self::DealerWins => Some(false),
            Self::Push => None,
        }
    }

    /// Returns the end-of-round message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Player Busts! You lose.",
            Self::DealerBust => "Dealer Busts! You win.",
            Self::PlayerWins => "You win!",
            Self::DealerWins => "You lose.",
            Self::Push => "It's a tie.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a single hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitResult {
    /// The card drawn.
    pub card: Card,
    /// The player's hand value after the hit.
    pub value: u32,
    /// Whether the hit busted the player.
    pub busted: bool,
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u32,
    /// The dealer's final hand value.
    pub dealer_value: u32,
    /// Cards the dealer drew after the player stood.
    pub dealer_drawn: Vec<Card>,
    /// Whether the round was cut short by an empty deck.
    pub deck_exhausted: bool,
}
