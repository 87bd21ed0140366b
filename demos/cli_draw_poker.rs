//! CLI five-card draw example.
//!
//! Run with `RUST_LOG=debug` to see the engine's log output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use drawpoker::{
    Card, Hand, HandCategory, HandError, Round, RoundError, RoundOptions, RoundState, Suit,
};

fn main() {
    env_logger::init();
    println!("Poker Game Start.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut round = Round::new(RoundOptions::default(), seed);

    match round.deal() {
        Ok(category) => print_hand(round.hand(), category),
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    }

    while round.state() == RoundState::Exchanging {
        let remaining = round.exchanges_remaining();
        let prompt = format!(
            "Positions to discard, separated by spaces ({remaining} exchange(s) left, q to quit): "
        );
        let Some(indices) = prompt_indices(&prompt) else {
            println!("Goodbye.");
            return;
        };

        match round.exchange(&indices) {
            Ok(result) => {
                if !result.drawn.is_empty() {
                    println!("Drew {}.", format_cards(&result.drawn));
                }
                print_hand(round.hand(), result.category);
            }
            Err(RoundError::Hand(err @ HandError::InvalidIndex { .. })) => {
                println!("{err}");
            }
            Err(err @ RoundError::TooManyDiscards { .. }) => println!("{err}"),
            Err(err) => {
                println!("Exchange error: {err}");
                return;
            }
        }
    }

    if let Some(category) = round.category() {
        println!("Final hand: {}", colorize(&category.to_string(), "1"));
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_indices(prompt: &str) -> Option<Vec<usize>> {
    loop {
        let input = prompt_line(prompt)?;
        if input == "q" || input == "quit" {
            return None;
        }
        match drawpoker::parse_indices(&input) {
            Ok(indices) => return Some(indices),
            Err(err) => println!("{err}"),
        }
    }
}

fn print_hand(hand: &Hand, category: HandCategory) {
    println!();
    for (index, card) in hand.cards().iter().enumerate() {
        println!("  [{index}] {}", format_card(card));
    }
    println!("  => {category}");
    println!();
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Heart | Suit::Diamond => "31",
        Suit::Club | Suit::Spade => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
