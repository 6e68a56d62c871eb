//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DealError, DeckError};
use crate::hand::Hand;
use crate::options::{ExhaustionPolicy, GameOptions};
use crate::result::{Outcome, RoundResult};

mod actions;
pub mod state;

pub use state::GameState;

/// Cards dealt to each side at the start of a round.
const OPENING_CARDS: usize = 2;

/// A single-player blackjack game.
///
/// The game owns the deck, both hands, and the random number generator used
/// for shuffling. Rounds are started with [`new_round`](Self::new_round) and
/// played with [`hit`](Self::hit) and [`stand`](Self::stand).
///
/// # Example
///
/// ```
/// use blackjack_solo::{Game, GameOptions, GameState};
///
/// let mut game = Game::new(GameOptions::default(), 7);
/// game.new_round().unwrap();
///
/// while game.player_value() < 17 {
///     if game.hit().unwrap().busted {
///         break;
///     }
/// }
/// if game.state() == GameState::PlayerTurn {
///     game.stand().unwrap();
/// }
///
/// assert_eq!(game.state(), GameState::RoundOver);
/// println!("{}", game.result().unwrap().outcome);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    options: GameOptions,
    state: GameState,
    player: Hand,
    dealer: Hand,
    result: Option<RoundResult>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// No cards are dealt until [`new_round`](Self::new_round) is called.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            options,
            state: GameState::Idle,
            player: Hand::new(),
            dealer: Hand::new(),
            result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a new round with a fresh shuffled deck.
    ///
    /// Both hands are cleared, then the player and dealer are each dealt two
    /// cards, alternating and starting with the player.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still in progress.
    pub fn new_round(&mut self) -> Result<(), DealError> {
        if !self.state.can_deal() {
            return Err(DealError::RoundInProgress);
        }
        let deck = Deck::shuffled(&mut self.rng);
        self.new_round_with_deck(deck)
    }

    /// Starts a new round using the supplied deck as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still in progress or the deck holds
    /// fewer than four cards.
    pub fn new_round_with_deck(&mut self, deck: Deck) -> Result<(), DealError> {
        if !self.state.can_deal() {
            return Err(DealError::RoundInProgress);
        }
        if deck.len() < OPENING_CARDS * 2 {
            return Err(DealError::NotEnoughCards);
        }

        self.deck = deck;
        self.player.clear();
        self.dealer.clear();
        self.result = None;

        for _ in 0..OPENING_CARDS {
            let card = self.deck.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.player.add_card(card);
            let card = self.deck.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.dealer.add_card(card);
        }

        self.state = GameState::PlayerTurn;
        info!(
            player = self.player.value(),
            dealer = self.dealer.value(),
            "round dealt"
        );

        Ok(())
    }

    /// Handles an empty deck according to the exhaustion policy.
    ///
    /// Returns `Ok(())` if play can continue with a replacement deck.
    /// Otherwise the round is ended as a push and the error is returned.
    fn recover(&mut self, err: DeckError) -> Result<(), ActionError> {
        if err == DeckError::Exhausted && self.options.exhaustion == ExhaustionPolicy::Reshuffle {
            info!("deck exhausted, reshuffling a fresh deck");
            self.deck = Deck::shuffled(&mut self.rng);
            return Ok(());
        }

        warn!(%err, "deck exhausted mid-round, ending round as a push");
        self.finish(Outcome::Push, true);
        Err(err.into())
    }

    /// Records the round result and moves to [`GameState::RoundOver`].
    fn finish(&mut self, outcome: Outcome, deck_exhausted: bool) -> RoundResult {
        let result = RoundResult {
            outcome,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            dealer_drawn: self.dealer_drawn(),
            deck_exhausted,
        };
        info!(
            outcome = ?result.outcome,
            player = result.player_value,
            dealer = result.dealer_value,
            "round over"
        );

        self.state = GameState::RoundOver;
        self.result = Some(result.clone());
        result
    }

    fn dealer_drawn(&self) -> Vec<Card> {
        self.dealer
            .cards()
            .iter()
            .skip(OPENING_CARDS)
            .copied()
            .collect()
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the value of the player's hand.
    #[must_use]
    pub fn player_value(&self) -> u32 {
        self.player.value()
    }

    /// Returns the value of the dealer's hand.
    #[must_use]
    pub fn dealer_value(&self) -> u32 {
        self.dealer.value()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the result of the last finished round.
    ///
    /// Returns `None` while a round is in progress or before the first round.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            debug!(state = ?self.state, "action rejected");
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }
}
