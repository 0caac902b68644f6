// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck.
use rand::{prelude::*, seq::index};
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Deck errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Dealing from a deck with no cards.
    #[error("Cannot deal from an empty deck")]
    Empty,
    /// Building a deck that still has cards.
    #[error("Cannot build a deck with {0} cards left")]
    AlreadyBuilt(usize),
}

/// A cards Deck.
///
/// A new deck is empty, [Deck::build] adds all 52 cards and dealing or drawing
/// removes cards from the deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a deck with all 52 cards.
    pub fn full() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::full();
        deck.shuffle(1, rng);
        deck
    }

    /// Adds all 52 cards to an empty deck.
    ///
    /// Cards are added one suit at a time (hearts, diamonds, clubs, spades)
    /// with ranks from deuce to ace.
    pub fn build(&mut self) -> Result<(), DeckError> {
        if !self.cards.is_empty() {
            return Err(DeckError::AlreadyBuilt(self.cards.len()));
        }

        *self = Self::full();
        Ok(())
    }

    /// Shuffles the deck `times` times.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, times: usize, rng: &mut R) {
        for _ in 0..times {
            self.cards.shuffle(rng);
        }
    }

    /// Deals the last card from the deck.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Draws `num` random cards from the deck.
    ///
    /// Returns `None` and leaves the deck unchanged if there are less than
    /// `num` cards in the deck.
    pub fn draw<R: Rng + ?Sized>(&mut self, num: usize, rng: &mut R) -> Option<Vec<Card>> {
        if num > self.cards.len() {
            return None;
        }

        let mut indices = index::sample(rng, self.cards.len(), num).into_vec();
        let drawn = indices.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        // Remove from the back so that indices stay valid.
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for i in indices {
            self.cards.remove(i);
        }

        Some(drawn)
    }

    /// Removes a card from the deck, returns false if the card is not in the deck.
    pub fn remove(&mut self, card: Card) -> bool {
        let count = self.cards.len();
        self.cards.retain(|c| c != &card);
        self.cards.len() != count
    }

    /// Checks if a card is in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The cards left in the deck, the next card to deal is the last one.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each k-cards hand in the deck.
    ///
    /// Cards in each hand are in deck order, nothing is called if `k` is zero
    /// or larger than the number of cards.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        let n = self.cards.len();
        if k == 0 || k > n {
            return;
        }

        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = Vec::with_capacity(k);

        loop {
            hand.clear();
            hand.extend(idx.iter().map(|&i| self.cards[i]));
            f(&hand);

            // Find the rightmost index that can still move right.
            let mut i = k;
            while i > 0 && idx[i - 1] == n - k + i - 1 {
                i -= 1;
            }

            if i == 0 {
                break;
            }

            idx[i - 1] += 1;
            for j in i..k {
                idx[j] = idx[j - 1] + 1;
            }
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
