//! CLI five-card draw example.
//!
//! Run with `RUST_LOG=debug` to see the engine's log output.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use drawrs::{Card, Hand, HAND_SIZE, Outcome, Round, RoundOptions, RoundState, Suit};

fn main() {
    env_logger::init();
    println!("Five-card draw CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let round = Round::new(RoundOptions::default(), seed);

    let mut record = (0_u32, 0_u32, 0_u32);

    loop {
        let hand = match round.deal() {
            Ok(hand) => hand,
            Err(err) => {
                println!("Deal error: {err}");
                break;
            }
        };

        let house = match round.deck.lock().draw_many(HAND_SIZE) {
            Ok(cards) => Hand::new(cards).unwrap_or_default(),
            Err(err) => {
                println!("Deal error: {err}");
                break;
            }
        };

        print_hand("Your hand", &hand);

        while round.state() == RoundState::Drawing {
            let input = prompt_line("Positions to discard (e.g. '1 3'), empty to stand: ");
            if input == "q" || input == "quit" {
                println!("Goodbye.");
                return;
            }

            if input.is_empty() {
                if let Err(err) = round.stand() {
                    println!("Stand error: {err}");
                }
                continue;
            }

            let Some(positions) = parse_positions(&input) else {
                println!("Please enter positions between 1 and 5.");
                continue;
            };

            match round.exchange(&positions) {
                Ok(drawn) => println!("Drew: {}", format_cards(&drawn)),
                Err(err) => println!("Exchange error: {err}"),
            }
        }

        print_hand("Your hand", &round.hand());
        print_hand("House hand", &house);

        match round.showdown(&house) {
            Ok(Outcome::Won) => {
                record.0 += 1;
                println!("{}", colorize("You win!", "32"));
            }
            Ok(Outcome::Lost) => {
                record.1 += 1;
                println!("{}", colorize("House wins.", "31"));
            }
            Ok(Outcome::Draw) => {
                record.2 += 1;
                println!("Draw.");
            }
            Err(err) => println!("Showdown error: {err}"),
        }
        println!("Won {} / lost {} / drawn {}\n", record.0, record.1, record.2);

        round.clear_round();
        if prompt_line("Play again? (y/n): ") != "y" {
            println!("Goodbye.");
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn parse_positions(input: &str) -> Option<Vec<usize>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<usize>().ok())
        .collect()
}

fn print_hand(label: &str, hand: &Hand) {
    let category = hand
        .classify()
        .map_or_else(|err| err.to_string(), |category| category.to_string());
    println!("{label}: {} | {category}", format_cards(hand.cards()));
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}:{}", index + 1, format_card(card)))
        .collect::<Vec<_>>()
        .join("  ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
