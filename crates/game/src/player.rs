// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player types.
use rand::Rng;
use serde::{Deserialize, Serialize};

use showdown_cards::{Card, Deck};
use showdown_eval::{HandError, HandRank};

/// A player and the cards in their hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The player name.
    pub name: String,
    /// The player cards.
    pub cards: Vec<Card>,
}

impl Player {
    /// Creates a new player with no cards.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::default(),
        }
    }

    /// The player greeting.
    pub fn say_hello(&self) -> String {
        format!("Hi, I'm {}!", self.name)
    }

    /// Draws `num` random cards from the deck, replacing this player cards.
    ///
    /// Returns false and leaves both the deck and the player cards unchanged
    /// if the deck has less than `num` cards.
    pub fn draw<R: Rng + ?Sized>(&mut self, deck: &mut Deck, num: usize, rng: &mut R) -> bool {
        match deck.draw(num, rng) {
            Some(cards) => {
                self.cards = cards;
                true
            }
            None => false,
        }
    }

    /// The cards in this player hand.
    pub fn show_hand(&self) -> &[Card] {
        &self.cards
    }

    /// Classifies this player hand, fails if the player doesn't have five cards.
    pub fn hand_rank(&self) -> Result<HandRank, HandError> {
        HandRank::eval(&self.cards)
    }
}
