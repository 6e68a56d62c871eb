//! A single 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards. The top of the deck is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    drawn: bool,
}

impl Deck {
    /// Creates a full deck in canonical order.
    ///
    /// Cards are laid out suit-major (Hearts, Diamonds, Clubs, Spades), and
    /// within each suit from 2 through Ace.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self {
            cards,
            drawn: false,
        }
    }

    /// Creates a full deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck that yields `draws` in the given order.
    ///
    /// The first element is the first card [`draw`](Self::draw) returns. Any
    /// number of cards is accepted, duplicates included; this is meant for
    /// stacked decks.
    #[must_use]
    pub fn from_draw_order(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            drawn: false,
        }
    }

    /// Shuffles the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ShuffleAfterDraw`] if a card has already been
    /// drawn from this deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DeckError> {
        if self.drawn {
            return Err(DeckError::ShuffleAfterDraw);
        }
        self.cards.shuffle(rng);
        Ok(())
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop().ok_or(DeckError::Exhausted)?;
        self.drawn = true;
        Ok(card)
    }

    /// Returns the remaining cards, bottom first. The last element is the
    /// next card to be drawn.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
