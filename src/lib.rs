//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides [`Card`], [`Deck`] and [`Hand`] primitives, the dealer
//! turn algorithm in [`rules`], and a [`Game`] controller that runs rounds
//! through a plain synchronous API. Any presentation layer (terminal, GUI,
//! web) can sit on top of it.
//!
//! # Example
//!
//! ```
//! use blackjack_solo::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.new_round().unwrap();
//! assert_eq!(game.state(), GameState::PlayerTurn);
//!
//! let result = game.stand().unwrap();
//! assert!(result.dealer_value >= 17);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::{ExhaustionPolicy, GameOptions};
pub use result::{HitResult, Outcome, RoundResult};
