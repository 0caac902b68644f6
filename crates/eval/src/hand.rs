// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A five cards hand.
use std::fmt;
use thiserror::Error;

use showdown_cards::{Card, ParseCardError, Suit, parse_cards};

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Hand errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand doesn't have exactly five cards.
    #[error("A hand must have 5 cards, got {0}")]
    WrongSize(usize),
    /// A card token couldn't be parsed.
    #[error(transparent)]
    Card(#[from] ParseCardError),
}

/// Five cards sorted by rank.
///
/// Cards with the same rank keep the order they were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    /// Creates a hand from five cards.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let mut cards = <[Card; HAND_SIZE]>::try_from(cards)
            .map_err(|_| HandError::WrongSize(cards.len()))?;
        cards.sort_by_key(|c| c.rank());
        Ok(Self(cards))
    }

    /// Creates a hand from five card tokens.
    ///
    /// ```
    /// # use showdown_eval::{Hand, HandError};
    /// let hand = Hand::parse(&["Kh", "2s", "10d", "2c", "Ah"]).unwrap();
    /// assert_eq!(hand.to_string(), "2s 2c 10d Kh Ah");
    ///
    /// let err = Hand::parse(&["Kh", "2s"]).unwrap_err();
    /// assert_eq!(err, HandError::WrongSize(2));
    /// ```
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, HandError> {
        if tokens.len() != HAND_SIZE {
            return Err(HandError::WrongSize(tokens.len()));
        }

        Self::new(&parse_cards(tokens)?)
    }

    /// The hand cards sorted by rank.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// The cards numeric values in ascending order.
    pub fn values(&self) -> [u8; HAND_SIZE] {
        self.0.map(|c| c.value())
    }

    /// The cards suits.
    pub fn suits(&self) -> [Suit; HAND_SIZE] {
        self.0.map(|c| c.suit())
    }

    /// How many cards there are for each value, indexed by value.
    pub fn value_counts(&self) -> [u8; 15] {
        let mut counts = [0; 15];
        for v in self.values() {
            counts[v as usize] += 1;
        }
        counts
    }

    /// The number of distinct values that appear exactly `n` times.
    pub fn groups_of(&self, n: u8) -> usize {
        self.value_counts().iter().filter(|&&c| c == n).count()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// Parses card tokens and sorts them by rank, ties keep their input order.
pub fn sort_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, ParseCardError> {
    let mut cards = parse_cards(tokens)?;
    cards.sort_by_key(|c| c.rank());
    Ok(cards)
}
