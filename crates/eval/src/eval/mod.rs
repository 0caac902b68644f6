// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier.
//!
//! A hand is classified by checking the categories from the strongest to the
//! weakest and picking the first one that matches, the categories overlap
//! (a straight flush is also a flush) so the order of [CATEGORIES] defines
//! which category a hand belongs to.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::hand::{Hand, HandError};
use showdown_cards::Card;

pub mod predicates;
use predicates::*;

/// A hand category, categories are ordered by their score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 1,
    /// One pair.
    Pair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// Classifies a five cards hand.
    pub fn eval(cards: &[Card]) -> Result<HandRank, HandError> {
        Hand::new(cards).map(|hand| classify(&hand))
    }

    /// The category score, 1 for high card up to 10 for a royal flush.
    pub fn score(self) -> u8 {
        self as u8
    }

    /// Returns the category with the given score.
    pub fn from_score(score: u8) -> Option<HandRank> {
        HandRank::ranks().find(|r| r.score() == score)
    }

    /// The category label.
    pub fn label(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when parsing an unknown category label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown hand category {0:?}")]
pub struct ParseHandRankError(String);

impl FromStr for HandRank {
    type Err = ParseHandRankError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        HandRank::ranks()
            .find(|r| r.label() == label)
            .ok_or_else(|| ParseHandRankError(label.to_string()))
    }
}

/// A category membership test.
pub type Predicate = fn(&Hand) -> bool;

/// The categories checked by [classify] in order, a hand that matches none of
/// them is a [HandRank::HighCard].
pub const CATEGORIES: [(Predicate, HandRank); 9] = [
    (is_royal_flush, HandRank::RoyalFlush),
    (is_straight_flush, HandRank::StraightFlush),
    (is_four_kind, HandRank::FourOfAKind),
    (is_full_house, HandRank::FullHouse),
    (is_flush, HandRank::Flush),
    (is_straight, HandRank::Straight),
    (is_three_kind, HandRank::ThreeOfAKind),
    (is_two_pair, HandRank::TwoPair),
    (is_pair, HandRank::Pair),
];

/// Returns the most specific category for a hand.
pub fn classify(hand: &Hand) -> HandRank {
    CATEGORIES
        .iter()
        .find(|(matches, _)| matches(hand))
        .map(|(_, rank)| *rank)
        .unwrap_or(HandRank::HighCard)
}

/// Classifies five card tokens.
///
/// ```
/// # use showdown_eval::{HandError, HandRank, hand_ranking};
/// assert_eq!(
///     hand_ranking(&["6h", "6s", "4c", "3d", "4h"]),
///     Ok(HandRank::TwoPair)
/// );
/// assert_eq!(hand_ranking(&["6h"]), Err(HandError::WrongSize(1)));
/// ```
pub fn hand_ranking<S: AsRef<str>>(tokens: &[S]) -> Result<HandRank, HandError> {
    Hand::parse(tokens).map(|hand| classify(&hand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;
    use rand::prelude::*;
    use showdown_cards::Deck;

    #[test]
    fn rank_hands() {
        let hands = [
            (["2h", "As", "5c", "3d", "4h"], HandRank::Straight),
            (["2h", "Ah", "5h", "3h", "4h"], HandRank::StraightFlush),
            (["6h", "8h", "Qh", "3h", "10h"], HandRank::Flush),
            (["10s", "As", "Qs", "Js", "Ks"], HandRank::RoyalFlush),
            (["10h", "10s", "10c", "10d", "4h"], HandRank::FourOfAKind),
            (["2h", "2s", "2c", "8d", "8h"], HandRank::FullHouse),
            (["5h", "5s", "5c", "3d", "4h"], HandRank::ThreeOfAKind),
            (["6h", "6s", "4c", "3d", "4h"], HandRank::TwoPair),
            (["Ah", "As", "5c", "3d", "4h"], HandRank::Pair),
            (["Kh", "As", "5c", "3d", "4h"], HandRank::HighCard),
            (["9d", "Kd", "Jd", "10d", "Qd"], HandRank::StraightFlush),
            (["Qh", "Ks", "Ad", "2c", "3h"], HandRank::HighCard),
        ];

        for (tokens, rank) in hands {
            assert_eq!(hand_ranking(&tokens), Ok(rank), "{tokens:?}");
        }
    }

    #[test]
    fn rank_labels_and_scores() {
        let table = [
            ("Royal Flush", 10),
            ("Straight Flush", 9),
            ("Four of a Kind", 8),
            ("Full House", 7),
            ("Flush", 6),
            ("Straight", 5),
            ("Three of a Kind", 4),
            ("Two Pair", 3),
            ("Pair", 2),
            ("High Card", 1),
        ];

        for (label, score) in table {
            let rank = label.parse::<HandRank>().unwrap();
            assert_eq!(rank.score(), score);
            assert_eq!(rank.to_string(), label);
            assert_eq!(HandRank::from_score(score), Some(rank));
        }

        assert_eq!(HandRank::ranks().count(), 10);
        assert_eq!(HandRank::from_score(0), None);
        assert_eq!(HandRank::from_score(11), None);
        assert!("Five of a Kind".parse::<HandRank>().is_err());
        assert!(HandRank::RoyalFlush > HandRank::StraightFlush);
    }

    #[test]
    fn rank_errors() {
        assert_eq!(
            hand_ranking(&["2h", "3h", "4h", "5h"]),
            Err(HandError::WrongSize(4))
        );
        assert!(matches!(
            hand_ranking(&["2h", "3h", "4h", "5h", "Zh"]),
            Err(HandError::Card(_))
        ));

        let cards = Deck::full().into_iter().take(6).collect::<Vec<_>>();
        assert_eq!(HandRank::eval(&cards), Err(HandError::WrongSize(6)));
    }

    #[test]
    fn rank_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut deck = Deck::new_and_shuffled(&mut rng);
        for _ in 0..10 {
            let cards = deck.draw(5, &mut rng).unwrap();
            let first = HandRank::eval(&cards).unwrap();
            for _ in 0..5 {
                assert_eq!(HandRank::eval(&cards), Ok(first));
            }
        }
    }

    #[test]
    fn rank_ignores_cards_order() {
        let cards = Deck::full().into_iter().skip(8).take(5).collect::<Vec<_>>();
        let rank = HandRank::eval(&cards).unwrap();
        assert_eq!(rank, HandRank::RoyalFlush);

        let mut reversed = cards.clone();
        reversed.reverse();
        assert_eq!(HandRank::eval(&reversed), Ok(rank));
    }

    #[test]
    fn rank_all_hands() {
        let mut counts = AHashMap::default();
        Deck::full().for_each(5, |cards| {
            *counts.entry(HandRank::eval(cards).unwrap()).or_insert(0usize) += 1;
        });

        assert_eq!(counts[&HandRank::RoyalFlush], 4);
        assert_eq!(counts[&HandRank::StraightFlush], 36);
        assert_eq!(counts[&HandRank::FourOfAKind], 624);
        assert_eq!(counts[&HandRank::FullHouse], 3_744);
        assert_eq!(counts[&HandRank::Flush], 5_108);
        assert_eq!(counts[&HandRank::Straight], 10_200);
        assert_eq!(counts[&HandRank::ThreeOfAKind], 54_912);
        assert_eq!(counts[&HandRank::TwoPair], 123_552);
        assert_eq!(counts[&HandRank::Pair], 1_098_240);
        assert_eq!(counts[&HandRank::HighCard], 1_302_540);
        assert_eq!(counts.values().sum::<usize>(), 2_598_960);
    }
}
