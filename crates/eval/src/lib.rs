// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand classifier.
//!
//! Classifies a five cards hand into one of the ten Poker categories, from
//! [HandRank::HighCard] to [HandRank::RoyalFlush]:
//!
//! ```
//! # use showdown_eval::*;
//! let rank = hand_ranking(&["10s", "As", "Qs", "Js", "Ks"]).unwrap();
//! assert_eq!(rank, HandRank::RoyalFlush);
//! assert_eq!(rank.to_string(), "Royal Flush");
//! assert_eq!(rank.score(), 10);
//!
//! // The wheel straight, aces are low only when there is a deuce.
//! let rank = hand_ranking(&["2h", "As", "5c", "3d", "4h"]).unwrap();
//! assert_eq!(rank, HandRank::Straight);
//! ```
//!
//! Categories are compared by their score only, two hands with the same
//! category have the same score whatever their ranks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, classify, hand_ranking};

pub mod hand;
pub use hand::{HAND_SIZE, Hand, HandError, sort_cards};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
