// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dealing hands to players from a shared deck.
use ahash::{AHashMap, AHashSet};
use log::debug;
use rand::{prelude::*, rngs::StdRng};
use thiserror::Error;

use showdown_cards::{Card, Deck};
use showdown_eval::HAND_SIZE;

/// The players hands by player name.
pub type Hands = AHashMap<String, Vec<Card>>;

/// Dealing config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The number of cards dealt to each player.
    pub hand_size: usize,
    /// How many times the deck is shuffled before dealing.
    pub shuffles: usize,
    /// The random seed, a deal with the same seed and players is the same.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            shuffles: 0,
            seed: None,
        }
    }
}

/// Dealing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    /// There are not enough cards for all the players.
    #[error("Not enough cards to deal {needed} cards from a {available} cards deck")]
    NotEnoughCards {
        /// The cards needed to deal all hands.
        needed: usize,
        /// The cards in the deck.
        available: usize,
    },
    /// The same player name is given more than once.
    #[error("Player {0} is dealt more than once")]
    DuplicatePlayer(String),
}

/// Deals five random cards to each player from a new deck.
///
/// ```
/// # use showdown_game::deal_cards;
/// let hands = deal_cards(&["Noor", "Hagen", "Sadie", "Kunai"]).unwrap();
/// assert_eq!(hands.len(), 4);
/// assert!(hands.values().all(|cards| cards.len() == 5));
/// ```
pub fn deal_cards<S: AsRef<str>>(names: &[S]) -> Result<Hands, DealError> {
    deal_cards_with(&Config::default(), names)
}

/// Deals random cards to each player from a new deck using the given config.
///
/// Cards dealt to a player are removed from the deck before dealing to the
/// next player so that no card is dealt twice, nothing is dealt if there are
/// not enough cards for all the players.
pub fn deal_cards_with<S: AsRef<str>>(config: &Config, names: &[S]) -> Result<Hands, DealError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut deck = Deck::full();
    deck.shuffle(config.shuffles, &mut rng);
    deal_from(&mut deck, names, config.hand_size, &mut rng)
}

/// Checks that no player name is given more than once.
///
/// ```
/// # use showdown_game::{DealError, check_players};
/// assert!(check_players(&["Noor", "Hagen"]).is_ok());
/// assert_eq!(
///     check_players(&["Noor", "Noor"]),
///     Err(DealError::DuplicatePlayer("Noor".to_string()))
/// );
/// ```
pub fn check_players<S: AsRef<str>>(names: &[S]) -> Result<(), DealError> {
    let mut seen = AHashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_ref()) {
            return Err(DealError::DuplicatePlayer(name.as_ref().to_string()));
        }
    }

    Ok(())
}

/// Deals `hand_size` random cards to each player from the given deck.
pub fn deal_from<S, R>(
    deck: &mut Deck,
    names: &[S],
    hand_size: usize,
    rng: &mut R,
) -> Result<Hands, DealError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    check_players(names)?;

    // An overflow can never fit in a deck.
    let needed = names.len().checked_mul(hand_size).unwrap_or(usize::MAX);
    let available = deck.count();
    let not_enough = || DealError::NotEnoughCards { needed, available };

    if needed > available {
        return Err(not_enough());
    }

    let mut hands = Hands::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        let cards = deck.draw(hand_size, rng).ok_or_else(not_enough)?;
        debug!("Dealt {name} {cards:?}");
        hands.insert(name.to_string(), cards);
    }

    debug!("Deck has {} cards left", deck.count());
    Ok(hands)
}
