//! A standard 52-card deck model with pure hand queries and optional `no_std`
//! support.
//!
//! The crate provides [`CardName`], the closed set of 52 card identities,
//! total attribute lookups for each identity, and a [`Hand`] type carrying
//! pure query and transform operations: sorting by number, same/pair
//! predicates over suite and number, and membership lookup.
//!
//! # Example
//!
//! ```
//! use deckrs::{CardName, Hand};
//!
//! let hand = Hand::from_names(&[
//!     CardName::TenOfHearts,
//!     CardName::TenOfSpades,
//!     CardName::ThreeOfDiamonds,
//! ]);
//!
//! assert!(hand.any_pair_same_number());
//! assert!(!hand.all_same_number());
//! assert_eq!(hand.index_of(CardName::TenOfSpades), Some(1));
//!
//! let sorted = hand.sorted_by_number();
//! assert_eq!(sorted.cards()[0].name, CardName::ThreeOfDiamonds);
//! // The original hand keeps its order.
//! assert_eq!(hand.cards()[0].name, CardName::TenOfHearts);
//! ```
//!
//! Identities parse from compact rank+suite notation; tokens outside the
//! 52-card set are rejected:
//!
//! ```
//! use deckrs::CardName;
//!
//! let card: CardName = "AS".parse().unwrap();
//! assert_eq!(card, CardName::AceOfSpades);
//! assert!("1X".parse::<CardName>().is_err());
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
pub mod hand;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suite};
pub use deck::CardName;
pub use error::UnknownCardError;
pub use hand::Hand;
