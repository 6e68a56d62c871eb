//! CLI blackjack example.
//!
//! Run with `cargo run --example cli_blackjack [seed]`. Set `RUST_LOG=debug`
//! to see engine events.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_solo::{ActionError, Card, Game, GameOptions, GameState, Hand, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        if let Err(err) = game.new_round() {
            println!("Deal error: {err}");
            return;
        }

        while game.state() == GameState::PlayerTurn {
            print_table(&game, false);

            let action = prompt_line("Action ([h]it, [s]tand, [q]uit): ");
            let result = match action.as_str() {
                "h" | "hit" => game.hit().map(|hit| {
                    println!("You draw {}.", colorize_card(&hit.card));
                }),
                "s" | "stand" => game.stand().map(|result| {
                    if !result.dealer_drawn.is_empty() {
                        println!("Dealer draws {} card(s).", result.dealer_drawn.len());
                    }
                }),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(()) => {}
                Err(ActionError::DeckExhausted) => println!("The deck ran out of cards."),
                Err(err) => println!("Action error: {err}"),
            }
        }

        print_table(&game, true);
        if let Some(result) = game.result() {
            println!("{}", result.outcome);
        }

        match prompt_line("Do you want to restart the game? (y/n): ").as_str() {
            "y" | "yes" | "" => {}
            _ => {
                println!("Goodbye.");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game, reveal: bool) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());
    print_hand("Dealer", game.dealer_hand(), reveal);
    print_hand("Player", game.player_hand(), true);
    println!();
}

fn print_hand(label: &str, hand: &Hand, reveal: bool) {
    println!("{label}'s Hand:");
    if reveal {
        for card in hand.cards() {
            println!("  {}", colorize_card(card));
        }
        let soft = if hand.is_soft() { " (soft)" } else { "" };
        println!("{label}'s Hand Value: {}{soft}", hand.value());
    } else {
        if let Some(card) = hand.cards().first() {
            println!("  {}", colorize_card(card));
        }
        if hand.len() > 1 {
            println!("  ??");
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn colorize_card(card: &Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), code)
}
