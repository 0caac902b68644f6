// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories membership tests.
//!
//! Each test checks only its own category, a royal flush is also a straight
//! flush, a flush, and a straight. Use [classify](super::classify) to get the
//! most specific category.
use crate::hand::Hand;

/// At least one value appears exactly twice.
pub fn is_pair(hand: &Hand) -> bool {
    hand.groups_of(2) >= 1
}

/// Two distinct values appear exactly twice, four of a kind is not two pair.
pub fn is_two_pair(hand: &Hand) -> bool {
    hand.groups_of(2) == 2
}

/// At least one value appears exactly three times.
pub fn is_three_kind(hand: &Hand) -> bool {
    hand.groups_of(3) >= 1
}

/// At least one value appears exactly four times.
pub fn is_four_kind(hand: &Hand) -> bool {
    hand.groups_of(4) >= 1
}

/// A three of a kind and a pair.
pub fn is_full_house(hand: &Hand) -> bool {
    is_three_kind(hand) && is_pair(hand)
}

/// All cards have the same suit.
pub fn is_flush(hand: &Hand) -> bool {
    let suits = hand.suits();
    suits.iter().all(|&s| s == suits[0])
}

/// Five consecutive values.
///
/// When the hand has both a deuce and an ace all aces count as 1, so that
/// A-2-3-4-5 is a straight, otherwise aces are high.
pub fn is_straight(hand: &Hand) -> bool {
    let mut values = hand.values();
    if values.contains(&2) && values.contains(&14) {
        for v in values.iter_mut().filter(|v| **v == 14) {
            *v = 1;
        }
        values.sort_unstable();
    }

    values.windows(2).all(|w| w[1] == w[0] + 1)
}

/// A flush with all values in 10, J, Q, K, A.
pub fn is_royal_flush(hand: &Hand) -> bool {
    is_flush(hand) && hand.values().iter().all(|v| (10..=14).contains(v))
}

/// A straight and a flush.
pub fn is_straight_flush(hand: &Hand) -> bool {
    is_flush(hand) && is_straight(hand)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(tokens: [&str; 5]) -> Hand {
        Hand::parse(&tokens).unwrap()
    }

    #[test]
    fn pair() {
        assert!(is_pair(&hand(["10h", "10d", "3c", "4h", "5s"])));
        assert!(is_pair(&hand(["Ah", "As", "5c", "3d", "4h"])));
        assert!(!is_pair(&hand(["2h", "3s", "4c", "5d", "7h"])));

        // Three of a kind alone has no pair.
        assert!(!is_pair(&hand(["5h", "5s", "5c", "3d", "4h"])));
    }

    #[test]
    fn two_pair() {
        assert!(is_two_pair(&hand(["10h", "10d", "6c", "7h", "6s"])));
        assert!(is_two_pair(&hand(["6h", "6s", "4c", "3d", "4h"])));
        assert!(!is_two_pair(&hand(["2h", "3s", "4c", "5d", "7h"])));
        assert!(!is_two_pair(&hand(["10h", "10d", "3c", "4h", "5s"])));

        // Four of a kind is not two pair.
        assert!(!is_two_pair(&hand(["9h", "9s", "9c", "9d", "Ah"])));
    }

    #[test]
    fn three_kind() {
        assert!(is_three_kind(&hand(["2h", "2s", "2c", "5d", "Ah"])));
        assert!(!is_three_kind(&hand(["2h", "3s", "4c", "5d", "Ah"])));
        assert!(!is_three_kind(&hand(["2h", "2s", "2c", "2d", "Ah"])));
    }

    #[test]
    fn four_kind() {
        assert!(is_four_kind(&hand(["2h", "2s", "2c", "2d", "Ah"])));
        assert!(is_four_kind(&hand(["10h", "10s", "10c", "10d", "4h"])));
        assert!(!is_four_kind(&hand(["2h", "3s", "4c", "5d", "Ah"])));
    }

    #[test]
    fn full_house() {
        assert!(is_full_house(&hand(["10h", "10d", "10c", "5h", "5s"])));
        assert!(is_full_house(&hand(["2h", "2s", "2c", "8d", "8h"])));
        assert!(!is_full_house(&hand(["2h", "3s", "4c", "5d", "7h"])));
        assert!(!is_full_house(&hand(["10h", "10d", "10c", "10s", "5s"])));
        assert!(!is_full_house(&hand(["10h", "10d", "10c", "4s", "5s"])));
    }

    #[test]
    fn flush() {
        assert!(is_flush(&hand(["2h", "5h", "6h", "10h", "Ah"])));
        assert!(!is_flush(&hand(["2h", "3s", "4c", "5d", "Ah"])));
    }

    #[test]
    fn straight() {
        assert!(is_straight(&hand(["Ah", "2s", "3d", "4c", "5h"])));
        assert!(is_straight(&hand(["9h", "Ks", "Jd", "10c", "Qh"])));
        assert!(is_straight(&hand(["10h", "Ks", "Jd", "Ac", "Qh"])));
        assert!(!is_straight(&hand(["2h", "3s", "4c", "5d", "7h"])));

        // No wrap around and no low ace without a deuce.
        assert!(!is_straight(&hand(["Qh", "Ks", "Ad", "2c", "3h"])));
        assert!(!is_straight(&hand(["Ah", "3s", "4d", "5c", "6h"])));

        // Pairs break straights.
        assert!(!is_straight(&hand(["2h", "2s", "3d", "4c", "5h"])));
        assert!(!is_straight(&hand(["Ah", "As", "2d", "3c", "4h"])));
    }

    #[test]
    fn royal_flush() {
        assert!(is_royal_flush(&hand(["10h", "Jh", "Qh", "Kh", "Ah"])));
        assert!(is_royal_flush(&hand(["10s", "As", "Qs", "Js", "Ks"])));
        assert!(!is_royal_flush(&hand(["2h", "3s", "4c", "5d", "7h"])));
        assert!(!is_royal_flush(&hand(["9h", "Jh", "Qh", "Kh", "Ah"])));
        assert!(!is_royal_flush(&hand(["10h", "Jh", "Qh", "Kh", "As"])));
    }

    #[test]
    fn straight_flush() {
        assert!(is_straight_flush(&hand(["2h", "Ah", "3h", "5h", "4h"])));
        assert!(is_straight_flush(&hand(["9c", "Kc", "Jc", "10c", "Qc"])));
        assert!(is_straight_flush(&hand(["10h", "Jh", "Qh", "Kh", "Ah"])));
        assert!(!is_straight_flush(&hand(["2h", "3s", "4c", "5d", "Ah"])));
        assert!(!is_straight_flush(&hand(["2h", "5h", "6h", "10h", "Ah"])));
    }
}
