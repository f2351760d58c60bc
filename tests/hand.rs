//! Hand query and transform integration tests.

use std::collections::HashMap;

use deckrs::{Card, CardName, Hand};

fn hand(names: &[CardName]) -> Hand {
    Hand::from_names(names)
}

fn name_counts(hand: &Hand) -> HashMap<CardName, usize> {
    let mut counts = HashMap::new();
    for card in hand {
        *counts.entry(card.name).or_insert(0) += 1;
    }
    counts
}

#[test]
fn mixed_hand_scenario() {
    // 10♥, 10♠, 3♦
    let hand = hand(&[
        CardName::TenOfHearts,
        CardName::TenOfSpades,
        CardName::ThreeOfDiamonds,
    ]);

    assert!(!hand.all_same_number());
    assert!(hand.any_pair_same_number());
    assert!(!hand.all_same_suite());
    assert!(!hand.any_pair_same_suite());
    assert_eq!(hand.index_of(CardName::TenOfSpades), Some(1));

    let sorted = hand.sorted_by_number();
    let names: Vec<CardName> = sorted.cards().iter().map(|card| card.name).collect();
    // Stable: the two tens keep their relative order.
    assert_eq!(
        names,
        [
            CardName::ThreeOfDiamonds,
            CardName::TenOfHearts,
            CardName::TenOfSpades,
        ]
    );

    // The input hand is untouched.
    assert_eq!(hand.cards()[0].name, CardName::TenOfHearts);
    assert_eq!(hand.len(), 3);
}

#[test]
fn duplicate_identity_scenario() {
    // The same card twice still forms a pair in both dimensions.
    let hand = hand(&[CardName::TwoOfClubs, CardName::TwoOfClubs]);

    assert!(hand.all_same_number());
    assert!(hand.any_pair_same_number());
    assert!(hand.all_same_suite());
    assert!(hand.any_pair_same_suite());
    assert_eq!(hand.index_of(CardName::TwoOfClubs), Some(0));
}

#[test]
fn singleton_hand_edge_cases() {
    let hand = hand(&[CardName::AceOfSpades]);

    assert!(hand.all_same_suite());
    assert!(!hand.any_pair_same_suite());
    assert!(hand.all_same_number());
    assert!(!hand.any_pair_same_number());
}

#[test]
fn empty_hand_edge_cases() {
    let hand = Hand::new();

    assert!(hand.is_empty());
    assert!(hand.all_same_suite());
    assert!(!hand.any_pair_same_suite());
    assert!(hand.all_same_number());
    assert!(!hand.any_pair_same_number());
    assert_eq!(hand.index_of(CardName::AceOfSpades), None);
    assert!(hand.sorted_by_number().is_empty());
}

#[test]
fn two_card_hands_all_and_pair_agree() {
    let pairs = [
        [CardName::AceOfSpades, CardName::KingOfSpades],
        [CardName::AceOfSpades, CardName::KingOfHearts],
        [CardName::AceOfSpades, CardName::AceOfHearts],
        [CardName::TwoOfClubs, CardName::TwoOfClubs],
    ];

    for names in pairs {
        let hand = hand(&names);
        assert_eq!(hand.all_same_suite(), hand.any_pair_same_suite());
        assert_eq!(hand.all_same_number(), hand.any_pair_same_number());
    }
}

#[test]
fn flush_hand_predicates() {
    let hand = hand(&[
        CardName::TwoOfHearts,
        CardName::NineOfHearts,
        CardName::QueenOfHearts,
        CardName::FiveOfHearts,
    ]);

    assert!(hand.all_same_suite());
    assert!(hand.any_pair_same_suite());
    assert!(!hand.all_same_number());
    assert!(!hand.any_pair_same_number());
}

#[test]
fn sort_is_stable_and_preserves_cards() {
    let hand = hand(&[
        CardName::KingOfClubs,
        CardName::FiveOfHearts,
        CardName::FiveOfSpades,
        CardName::AceOfDiamonds,
        CardName::FiveOfDiamonds,
        CardName::KingOfHearts,
    ]);

    let sorted = hand.sorted_by_number();

    let numbers: Vec<u8> = sorted.cards().iter().map(|card| card.number).collect();
    assert_eq!(numbers, [1, 5, 5, 5, 13, 13]);

    // Equal numbers keep their input order.
    let fives: Vec<CardName> = sorted
        .cards()
        .iter()
        .filter(|card| card.number == 5)
        .map(|card| card.name)
        .collect();
    assert_eq!(
        fives,
        [
            CardName::FiveOfHearts,
            CardName::FiveOfSpades,
            CardName::FiveOfDiamonds,
        ]
    );

    // Same multiset of cards on both sides.
    assert_eq!(name_counts(&hand), name_counts(&sorted));
}

#[test]
fn sort_is_idempotent() {
    let hand = hand(&[
        CardName::QueenOfSpades,
        CardName::TwoOfHearts,
        CardName::TwoOfDiamonds,
        CardName::JackOfClubs,
    ]);

    let once = hand.sorted_by_number();
    let twice = once.sorted_by_number();
    assert_eq!(once, twice);
}

#[test]
fn index_of_returns_first_match() {
    let hand = hand(&[
        CardName::SevenOfClubs,
        CardName::TenOfHearts,
        CardName::SevenOfClubs,
    ]);

    assert_eq!(hand.index_of(CardName::SevenOfClubs), Some(0));
    assert_eq!(hand.index_of(CardName::TenOfHearts), Some(1));
    assert_eq!(hand.index_of(CardName::QueenOfSpades), None);
}

#[test]
fn hand_construction_and_access() {
    let mut hand = Hand::new();
    assert_eq!(hand.len(), 0);

    hand.push(Card::new(CardName::FourOfClubs));
    hand.push(Card::new(CardName::NineOfDiamonds));

    assert_eq!(hand.len(), 2);
    assert!(!hand.is_empty());
    assert_eq!(hand.get(0).map(|card| card.name), Some(CardName::FourOfClubs));
    assert_eq!(hand.get(2), None);

    let collected: Hand = hand.cards().iter().copied().collect();
    assert_eq!(collected, hand);

    let from_vec = Hand::from(hand.cards().to_vec());
    assert_eq!(from_vec, hand);

    let names: Vec<CardName> = hand.into_iter().map(|card| card.name).collect();
    assert_eq!(names, [CardName::FourOfClubs, CardName::NineOfDiamonds]);
}

#[cfg(feature = "serde")]
#[test]
fn hand_serde_round_trip() {
    let hand = hand(&[CardName::AceOfSpades, CardName::TenOfDiamonds]);

    let json = serde_json::to_string(&hand).unwrap();
    let back: Hand = serde_json::from_str(&json).unwrap();
    assert_eq!(back, hand);

    let card_json = serde_json::to_string(&Card::new(CardName::AceOfSpades)).unwrap();
    assert!(card_json.contains("\"AceOfSpades\""));
}
