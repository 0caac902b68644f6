// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "10d".parse::<Card>().unwrap();
//! assert_eq!(ah.value(), 14);
//! assert_eq!(td.to_string(), "10d");
//! ```
//!
//! and a [Deck] type for building, shuffling, dealing and drawing cards.
//!
//! For example to draw two random 5-cards hands from a shared deck:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut rng = rand::rng();
//! let mut deck = Deck::full();
//! let h1 = deck.draw(5, &mut rng).unwrap();
//! let h2 = deck.draw(5, &mut rng).unwrap();
//! assert_eq!(deck.count(), Deck::SIZE - 10);
//! assert!(h1.iter().all(|c| !h2.contains(c)));
//! ```
//!
//! and to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::full().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit, convert_card, parse_cards};

mod deck;
pub use deck::{Deck, DeckError};
