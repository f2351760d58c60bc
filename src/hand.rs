//! Hand representation and pure hand queries.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::CardName;

/// An ordered sequence of cards under evaluation.
///
/// Hands are plain value collections: duplicates are permitted, there is no
/// fixed length, and no query mutates the hand. [`sorted_by_number`] returns
/// a fresh hand and leaves the original order untouched.
///
/// The same/pair predicates quantify over positions, not identities, so a
/// hand holding the same card twice still has a same-suite pair.
///
/// [`sorted_by_number`]: Hand::sorted_by_number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand by resolving each identity into a card.
    #[must_use]
    pub fn from_names(names: &[CardName]) -> Self {
        names.iter().map(|&name| Card::new(name)).collect()
    }

    /// Adds a card to the end of the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at the given position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a new hand sorted ascending by number.
    ///
    /// The sort is stable: cards with equal numbers keep their relative order
    /// from this hand. The hand itself is not modified.
    #[must_use]
    pub fn sorted_by_number(&self) -> Self {
        let mut cards = self.cards.clone();
        cards.sort_by_key(|card| card.number);
        Self { cards }
    }

    /// Returns whether every card in the hand shares one common suite.
    ///
    /// Vacuously true for empty and single-card hands.
    #[must_use]
    pub fn all_same_suite(&self) -> bool {
        self.cards
            .iter()
            .all(|card| self.cards.iter().all(|other| card.suite == other.suite))
    }

    /// Returns whether two cards at distinct positions share a suite.
    ///
    /// Duplicate identities at different positions count as a pair. Hands of
    /// size 0 or 1 have no distinct pair and return `false`.
    #[must_use]
    pub fn any_pair_same_suite(&self) -> bool {
        self.cards.iter().enumerate().any(|(i, card)| {
            self.cards
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && card.suite == other.suite)
        })
    }

    /// Returns whether every card in the hand shares one common number.
    ///
    /// Vacuously true for empty and single-card hands.
    #[must_use]
    pub fn all_same_number(&self) -> bool {
        self.cards
            .iter()
            .all(|card| self.cards.iter().all(|other| card.number == other.number))
    }

    /// Returns whether two cards at distinct positions share a number.
    ///
    /// Hands of size 0 or 1 have no distinct pair and return `false`.
    #[must_use]
    pub fn any_pair_same_number(&self) -> bool {
        self.cards.iter().enumerate().any(|(i, card)| {
            self.cards
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && card.number == other.number)
        })
    }

    /// Returns the position of the first card with the given identity, or
    /// `None` if no card in the hand matches.
    ///
    /// Absence is an expected outcome, not an error; callers holding
    /// untrusted identities can validate them separately through the
    /// registry conversions.
    #[must_use]
    pub fn index_of(&self, name: CardName) -> Option<usize> {
        self.cards.iter().position(|card| card.name == name)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
