// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker players, dealing, and winners.
//!
//! Deal five cards to each player from a shared deck and find who holds the
//! best hand category:
//!
//! ```
//! # use showdown_game::*;
//! let config = Config {
//!     seed: Some(42),
//!     ..Config::default()
//! };
//!
//! let hands = deal_cards_with(&config, &["Noor", "Hagen", "Sadie"]).unwrap();
//! let winners = winner_is(&hands).unwrap();
//! assert!(!winners.is_empty());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod deal;
pub use deal::{Config, DealError, Hands, check_players, deal_cards, deal_cards_with, deal_from};

pub mod player;
pub use player::Player;

pub mod showdown;
pub use showdown::{Showdown, evaluate, winner_is};

// Reexport cards and eval types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
pub use showdown_eval::{HandError, HandRank};
