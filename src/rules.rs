//! Turn rules that work directly on hands and a deck.
//!
//! [`Game`](crate::Game) is built on these, but they can be driven without
//! it.

use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;
use crate::result::Outcome;

/// Value at which the dealer stops drawing.
pub const DEALER_STANDS_ON: u32 = 17;

/// Draws one card from `deck` into `hand`.
///
/// Returns whether the hand is bust afterwards.
///
/// # Errors
///
/// Returns [`DeckError::Exhausted`] if the deck is empty; the hand is left
/// unchanged.
pub fn hit(hand: &mut Hand, deck: &mut Deck) -> Result<bool, DeckError> {
    let card = deck.draw()?;
    debug!(%card, "hit");
    hand.add_card(card);
    Ok(hand.is_bust())
}

/// Returns whether the dealer must draw another card.
#[must_use]
pub fn dealer_must_draw(dealer: &Hand, stand_on_soft_17: bool) -> bool {
    let value = dealer.value();
    value < DEALER_STANDS_ON || (value == DEALER_STANDS_ON && dealer.is_soft() && !stand_on_soft_17)
}

/// Plays out the dealer's hand.
///
/// The dealer draws while their value is below 17. If `stand_on_soft_17` is
/// false, the dealer also draws on a soft 17.
///
/// Returns the cards drawn by the dealer.
///
/// # Errors
///
/// Returns [`DeckError::Exhausted`] if the deck is empty while the dealer
/// must draw. Cards drawn before that stay in `dealer`.
pub fn play_dealer(
    dealer: &mut Hand,
    deck: &mut Deck,
    stand_on_soft_17: bool,
) -> Result<Vec<Card>, DeckError> {
    let mut drawn_cards = Vec::new();

    while dealer_must_draw(dealer, stand_on_soft_17) {
        let card = deck.draw()?;
        debug!(%card, "dealer draws");
        dealer.add_card(card);
        drawn_cards.push(card);
    }

    debug!(value = dealer.value(), "dealer stands");
    Ok(drawn_cards)
}

/// Compares final hands and decides the outcome.
#[must_use]
pub fn settle(player: &Hand, dealer: &Hand) -> Outcome {
    let player_value = player.value();
    let dealer_value = dealer.value();

    if player_value > 21 {
        Outcome::PlayerBust
    } else if dealer_value > 21 {
        Outcome::DealerBust
    } else if player_value > dealer_value {
        Outcome::PlayerWins
    } else if player_value < dealer_value {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}
