//! Game integration tests.

use blackjack_solo::{
    ActionError, Card, DECK_SIZE, DealError, Deck, ExhaustionPolicy, Game, GameOptions, GameState,
    Outcome, Rank, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that deals `player` and `dealer` alternately (player first),
/// then yields `rest` in order.
fn stacked(player: [Rank; 2], dealer: [Rank; 2], rest: &[Rank]) -> Deck {
    let mut draws = vec![
        card(Suit::Hearts, player[0]),
        card(Suit::Clubs, dealer[0]),
        card(Suit::Hearts, player[1]),
        card(Suit::Clubs, dealer[1]),
    ];
    draws.extend(rest.iter().map(|&rank| card(Suit::Spades, rank)));
    Deck::from_draw_order(&draws)
}

fn game_with(deck: Deck, options: GameOptions) -> Game {
    let mut game = Game::new(options, 1);
    game.new_round_with_deck(deck).unwrap();
    game
}

#[test]
fn new_game_is_idle() {
    let mut game = Game::new(GameOptions::default(), 5);
    assert_eq!(game.state(), GameState::Idle);
    assert!(game.player_hand().is_empty());
    assert!(game.result().is_none());
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn new_round_deals_two_cards_each() {
    let mut game = Game::new(GameOptions::default(), 5);
    game.new_round().unwrap();

    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn deal_order_alternates_starting_with_player() {
    let deck = Deck::from_draw_order(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Hearts, Rank::Five),
    ]);
    let game = game_with(deck, GameOptions::default());

    assert_eq!(
        game.player_hand().cards(),
        &[card(Suit::Hearts, Rank::Two), card(Suit::Hearts, Rank::Four)]
    );
    assert_eq!(
        game.dealer_hand().cards(),
        &[card(Suit::Hearts, Rank::Three), card(Suit::Hearts, Rank::Five)]
    );
}

#[test]
fn deal_errors() {
    let mut game = Game::new(GameOptions::default(), 1);
    let short = Deck::from_draw_order(&[
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Seven),
    ]);
    assert_eq!(
        game.new_round_with_deck(short).unwrap_err(),
        DealError::NotEnoughCards
    );
    assert_eq!(game.state(), GameState::Idle);

    game.new_round().unwrap();
    assert_eq!(game.new_round().unwrap_err(), DealError::RoundInProgress);
}

#[test]
fn stand_dealer_draws_to_twenty_and_wins() {
    let deck = stacked([Rank::Ten, Rank::Seven], [Rank::Six, Rank::Five], &[Rank::Nine]);
    let mut game = game_with(deck, GameOptions::default());
    assert_eq!(game.player_value(), 17);
    assert_eq!(game.dealer_value(), 11);

    let result = game.stand().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.player_value, 17);
    assert_eq!(result.dealer_value, 20);
    assert_eq!(result.dealer_drawn, vec![card(Suit::Spades, Rank::Nine)]);
    assert!(!result.deck_exhausted);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.result(), Some(&result));
}

#[test]
fn player_bust_ends_round_before_dealer_plays() {
    let deck = stacked(
        [Rank::Ten, Rank::Five],
        [Rank::Six, Rank::Two],
        &[Rank::Nine, Rank::Ten, Rank::Ten],
    );
    let mut game = game_with(deck, GameOptions::default());

    let hit = game.hit().unwrap();
    assert_eq!(hit.card, card(Suit::Spades, Rank::Nine));
    assert_eq!(hit.value, 24);
    assert!(hit.busted);

    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.cards_remaining(), 2);

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBust);
    assert!(result.dealer_drawn.is_empty());
}

#[test]
fn actions_rejected_after_round_over() {
    let deck = stacked([Rank::Ten, Rank::Nine], [Rank::Ten, Rank::Eight], &[]);
    let mut game = game_with(deck, GameOptions::default());
    game.stand().unwrap();

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn dealer_bust_player_wins() {
    let deck = stacked(
        [Rank::Ten, Rank::Two],
        [Rank::Ten, Rank::Six],
        &[Rank::King],
    );
    let mut game = game_with(deck, GameOptions::default());

    let result = game.stand().unwrap();
    assert_eq!(result.outcome, Outcome::DealerBust);
    assert_eq!(result.dealer_value, 26);
    assert_eq!(result.outcome.player_wins(), Some(true));
}

#[test]
fn higher_player_value_wins() {
    let deck = stacked([Rank::Ten, Rank::Queen], [Rank::Ten, Rank::Seven], &[]);
    let mut game = game_with(deck, GameOptions::default());

    let result = game.stand().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert!(result.dealer_drawn.is_empty());
}

#[test]
fn equal_values_push() {
    let deck = stacked([Rank::Ten, Rank::Eight], [Rank::Nine, Rank::Nine], &[]);
    let mut game = game_with(deck, GameOptions::default());

    let result = game.stand().unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(result.outcome.player_wins(), None);
    assert_eq!(result.outcome.to_string(), "It's a tie.");
}

#[test]
fn player_can_hit_then_stand() {
    let deck = stacked(
        [Rank::Two, Rank::Three],
        [Rank::Ten, Rank::Seven],
        &[Rank::Ace, Rank::Four],
    );
    let mut game = game_with(deck, GameOptions::default());

    assert!(!game.hit().unwrap().busted);
    assert_eq!(game.player_value(), 16);
    assert!(game.player_hand().is_soft());

    assert!(!game.hit().unwrap().busted);
    assert_eq!(game.player_value(), 20);

    let result = game.stand().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn dealer_hits_soft_17_when_configured() {
    let rest = [Rank::Three];

    let deck = stacked([Rank::Ten, Rank::Nine], [Rank::Ace, Rank::Six], &rest);
    let mut game = game_with(deck, GameOptions::default());
    assert_eq!(game.stand().unwrap().outcome, Outcome::PlayerWins);

    let deck = stacked([Rank::Ten, Rank::Nine], [Rank::Ace, Rank::Six], &rest);
    let mut game = game_with(deck, GameOptions::default().with_stand_on_soft_17(false));
    let result = game.stand().unwrap();
    assert_eq!(result.dealer_value, 20);
    assert_eq!(result.outcome, Outcome::DealerWins);
}

#[test]
fn hit_with_empty_deck_ends_round_as_push() {
    let deck = stacked([Rank::Five, Rank::Six], [Rank::Nine, Rank::Seven], &[]);
    let mut game = game_with(deck, GameOptions::default());

    assert_eq!(game.hit().unwrap_err(), ActionError::DeckExhausted);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.player_hand().len(), 2);

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert!(result.deck_exhausted);
}

#[test]
fn dealer_exhaustion_ends_round_as_push() {
    let deck = stacked([Rank::Ten, Rank::Nine], [Rank::Two, Rank::Three], &[Rank::Four]);
    let mut game = game_with(deck, GameOptions::default());

    assert_eq!(game.stand().unwrap_err(), ActionError::DeckExhausted);

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert!(result.deck_exhausted);
    assert_eq!(result.dealer_value, 9);
    assert_eq!(result.dealer_drawn, vec![card(Suit::Spades, Rank::Four)]);
}

#[test]
fn reshuffle_policy_continues_with_fresh_deck() {
    let options = GameOptions::default().with_exhaustion(ExhaustionPolicy::Reshuffle);
    let deck = stacked([Rank::Two, Rank::Two], [Rank::Two, Rank::Three], &[]);
    let mut game = game_with(deck, options);

    let hit = game.hit().unwrap();
    assert_eq!(game.player_hand().len(), 3);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 1);
    assert!(!hit.busted);

    let result = game.stand().unwrap();
    assert!(!result.deck_exhausted);
    assert!(result.dealer_value >= 17);
}

#[test]
fn reshuffle_policy_refills_deck_during_dealer_turn() {
    let options = GameOptions::default().with_exhaustion(ExhaustionPolicy::Reshuffle);
    let deck = stacked([Rank::Ten, Rank::Nine], [Rank::Two, Rank::Three], &[Rank::Four]);
    let mut game = game_with(deck, options);

    let result = game.stand().unwrap();
    assert!(!result.deck_exhausted);
    assert!(result.dealer_value >= 17);
    assert_eq!(result.dealer_drawn[0], card(Suit::Spades, Rank::Four));
    assert!(result.dealer_drawn.len() >= 2);
    assert_eq!(game.cards_remaining(), DECK_SIZE - (result.dealer_drawn.len() - 1));
    assert_eq!(game.state(), GameState::RoundOver);
}

#[test]
fn outcome_messages() {
    let cases = [
        (Outcome::PlayerBust, "Player Busts! You lose.", Some(false)),
        (Outcome::DealerBust, "Dealer Busts! You win.", Some(true)),
        (Outcome::PlayerWins, "You win!", Some(true)),
        (Outcome::DealerWins, "You lose.", Some(false)),
        (Outcome::Push, "It's a tie.", None),
    ];

    for (outcome, message, player_wins) in cases {
        assert_eq!(outcome.message(), message);
        assert_eq!(outcome.to_string(), message);
        assert_eq!(outcome.player_wins(), player_wins);
    }
}

#[test]
fn new_round_after_round_over_resets_hands() {
    let deck = stacked([Rank::Ten, Rank::Nine], [Rank::Ten, Rank::Eight], &[]);
    let mut game = game_with(deck, GameOptions::default());
    game.stand().unwrap();

    game.new_round().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
    assert!(game.result().is_none());
}

#[test]
fn same_seed_deals_same_rounds() {
    let mut a = Game::new(GameOptions::default(), 99);
    let mut b = Game::new(GameOptions::default(), 99);

    for _ in 0..3 {
        a.new_round().unwrap();
        b.new_round().unwrap();
        assert_eq!(a.player_hand(), b.player_hand());
        assert_eq!(a.dealer_hand(), b.dealer_hand());
        assert_eq!(a.stand().unwrap(), b.stand().unwrap());
    }
}

#[test]
fn many_rounds_always_terminate() {
    let mut game = Game::new(GameOptions::default(), 2024);

    for _ in 0..200 {
        game.new_round().unwrap();
        while game.player_value() < 15 {
            if game.hit().unwrap().busted {
                break;
            }
        }
        if game.state() == GameState::PlayerTurn {
            let result = game.stand().unwrap();
            assert!(result.dealer_value >= 17);
        }
        assert_eq!(game.state(), GameState::RoundOver);
    }
}
