//! CLI hand report example.
//!
//! Pass card tokens in compact rank+suite notation, e.g.
//! `cargo run --example hand_report -- TH TS 3D`.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::process::ExitCode;

use deckrs::{CardName, Hand};

fn main() -> ExitCode {
    let tokens: Vec<String> = env::args().skip(1).collect();
    if tokens.is_empty() {
        println!("usage: hand_report CARD [CARD ...] (e.g. hand_report TH TS 3D)");
        return ExitCode::FAILURE;
    }

    let mut names = Vec::with_capacity(tokens.len());
    for token in &tokens {
        match token.parse::<CardName>() {
            Ok(name) => names.push(name),
            Err(err) => {
                println!("Card error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let hand = Hand::from_names(&names);

    println!("Hand:");
    for card in &hand {
        println!("  {} - {} of {} ({:?}, number {})", card, card.rank, card.suite, card.color, card.number);
    }

    let sorted = hand.sorted_by_number();
    let order: Vec<String> = sorted.cards().iter().map(ToString::to_string).collect();
    println!("Sorted by number: {}", order.join(" "));

    println!("All same suite:      {}", hand.all_same_suite());
    println!("Any pair same suite: {}", hand.any_pair_same_suite());
    println!("All same number:     {}", hand.all_same_number());
    println!("Any pair same number: {}", hand.any_pair_same_number());

    if let Some(first) = names.first() {
        match hand.index_of(*first) {
            Some(index) => println!("First {first} at position {index}"),
            None => println!("{first} is not in the hand"),
        }
    }

    ExitCode::SUCCESS
}
