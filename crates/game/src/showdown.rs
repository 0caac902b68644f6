// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Finding the players with the best hand.
//!
//! Players are compared by their hand category score only, two players with a
//! pair are tied whatever the pair ranks and kickers.
use ahash::AHashSet;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use showdown_cards::Card;
use showdown_eval::{HandError, HandRank};

/// A player hand category at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    /// The player name.
    pub name: String,
    /// The player cards.
    pub cards: Vec<Card>,
    /// The player hand category.
    pub rank: HandRank,
}

/// Classifies each player hand, results are in the same order as the players.
pub fn evaluate<I, N, H>(players: I) -> Result<Vec<Showdown>, HandError>
where
    I: IntoIterator<Item = (N, H)>,
    N: AsRef<str>,
    H: AsRef<[Card]>,
{
    players
        .into_iter()
        .map(|(name, cards)| -> Result<Showdown, HandError> {
            let (name, cards) = (name.as_ref(), cards.as_ref());
            let rank = HandRank::eval(cards)?;
            debug!("Player {name} has {rank} score {}", rank.score());
            Ok(Showdown {
                name: name.to_string(),
                cards: cards.to_vec(),
                rank,
            })
        })
        .collect()
}

/// Returns the players with the highest hand category score.
///
/// All the players tied at the best category are winners, no players means
/// no winners. Fails if any hand is not a five cards hand.
///
/// ```
/// # use showdown_game::winner_is;
/// # use showdown_cards::parse_cards;
/// let hands = [
///     ("Noor", parse_cards(&["9h", "10s", "4h", "Jc", "6c"]).unwrap()),
///     ("Kunai", parse_cards(&["Ah", "Qh", "Kh", "10h", "Jh"]).unwrap()),
/// ];
///
/// let winners = winner_is(hands).unwrap();
/// assert_eq!(winners.len(), 1);
/// assert!(winners.contains("Kunai"));
/// ```
pub fn winner_is<I, N, H>(players: I) -> Result<AHashSet<String>, HandError>
where
    I: IntoIterator<Item = (N, H)>,
    N: AsRef<str>,
    H: AsRef<[Card]>,
{
    let results = evaluate(players)?;
    let Some(best) = results.iter().map(|s| s.rank.score()).max() else {
        return Ok(AHashSet::default());
    };

    let winners = results
        .into_iter()
        .filter(|s| s.rank.score() == best)
        .map(|s| s.name)
        .collect::<AHashSet<_>>();

    info!(
        "Winners with {}: {winners:?}",
        HandRank::from_score(best).map_or("", |r| r.label())
    );

    Ok(winners)
}
