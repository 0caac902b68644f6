// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, deals and ranks five cards Poker hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use log::error;

use showdown_game::{
    Card, Config, HandRank, Showdown, check_players, deal_cards_with, evaluate, winner_is,
};

#[derive(Debug, Parser)]
struct Cli {
    /// Enables debug logs.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deals five cards to each player and shows the winners.
    Deal {
        /// The players names.
        #[clap(
            long,
            short,
            num_args = 1..,
            value_delimiter = ',',
            default_values = ["Noor", "Hagen", "Sadie", "Kunai"]
        )]
        players: Vec<String>,
        /// How many times the deck is shuffled before dealing.
        #[clap(long, default_value_t = Config::default().shuffles)]
        shuffles: usize,
        /// The random seed for a repeatable deal.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Shows the category of a five cards hand, for example: 10s As Qs Js Ks.
    Rank {
        /// The hand cards.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Shows the winners for the given hands.
    Winner {
        /// A player hand as NAME=CARD,CARD,CARD,CARD,CARD.
        #[clap(required = true, value_parser = parse_player_hand)]
        hands: Vec<PlayerHand>,
    },
}

/// A player hand given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PlayerHand {
    name: String,
    cards: Vec<Card>,
}

fn parse_player_hand(arg: &str) -> Result<PlayerHand> {
    let (name, cards) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected NAME=CARDS, got {arg:?}"))?;

    let name = name.trim();
    if name.is_empty() {
        bail!("Missing player name in {arg:?}");
    }

    let cards = parse_cards(cards.split(','))?;
    Ok(PlayerHand {
        name: name.to_string(),
        cards,
    })
}

fn parse_cards<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Vec<Card>> {
    tokens
        .into_iter()
        .map(|t| {
            t.trim()
                .parse::<Card>()
                .with_context(|| format!("Invalid card {t:?}"))
        })
        .collect()
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_showdown(results: &[Showdown], winners: &[&str]) {
    for s in results {
        println!(
            "{:<12} {:<20} {} ({})",
            s.name,
            format_cards(&s.cards),
            s.rank,
            s.rank.score()
        );
    }

    println!("Winners: {}", winners.join(", "));
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Deal {
            players,
            shuffles,
            seed,
        } => {
            let config = Config {
                shuffles,
                seed,
                ..Config::default()
            };

            let hands = deal_cards_with(&config, &players)?;
            let results = evaluate(players.iter().map(|name| (name, &hands[name])))?;
            let winners = winner_is(&hands)?;
            let winners = players
                .iter()
                .filter(|p| winners.contains(*p))
                .map(String::as_str)
                .collect::<Vec<_>>();
            print_showdown(&results, &winners);
        }
        Command::Rank { cards } => {
            let cards = parse_cards(cards.iter().map(String::as_str))?;
            let rank = HandRank::eval(&cards)?;
            println!("{} ({})", rank, rank.score());
        }
        Command::Winner { hands } => {
            let names = hands.iter().map(|h| h.name.as_str()).collect::<Vec<_>>();
            check_players(&names)?;

            let players = hands.iter().map(|h| (&h.name, &h.cards));
            let results = evaluate(players.clone())?;
            let winners = winner_is(players)?;
            let winners = hands
                .iter()
                .filter(|h| winners.contains(&h.name))
                .map(|h| h.name.as_str())
                .collect::<Vec<_>>();
            print_showdown(&results, &winners);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use showdown_game::DealError;

    #[test]
    fn cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_deal_args() {
        let cli = Cli::try_parse_from(["showdown", "deal", "-p", "Ada,Lin", "--seed", "3"]).unwrap();
        match cli.command {
            Command::Deal {
                players,
                shuffles,
                seed,
            } => {
                assert_eq!(players, vec!["Ada", "Lin"]);
                assert_eq!(shuffles, Config::default().shuffles);
                assert_eq!(seed, Some(3));
            }
            cmd => panic!("Unexpected command {cmd:?}"),
        }

        let cli = Cli::try_parse_from(["showdown", "deal"]).unwrap();
        assert!(matches!(cli.command, Command::Deal { players, .. } if players.len() == 4));
    }

    #[test]
    fn player_hand_arg() {
        let hand = parse_player_hand("Kunai=Ah,Qh, Kh,10h,Jh").unwrap();
        assert_eq!(hand.name, "Kunai");
        assert_eq!(format_cards(&hand.cards), "Ah Qh Kh 10h Jh");
        assert_eq!(HandRank::eval(&hand.cards).unwrap(), HandRank::RoyalFlush);

        assert!(parse_player_hand("Kunai").is_err());
        assert!(parse_player_hand("=Ah,Qh,Kh,10h,Jh").is_err());
        assert!(parse_player_hand("Kunai=Ah,Qh,Kh,1h,Jh").is_err());
    }

    #[test]
    fn winner_args() {
        let cli = Cli::try_parse_from([
            "showdown",
            "winner",
            "Noor=9h,10s,4h,Jc,6c",
            "Kunai=Ah,Qh,Kh,10h,Jh",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Winner { hands } if hands.len() == 2));
        assert!(Cli::try_parse_from(["showdown", "winner", "Noor"]).is_err());
    }

    #[test]
    fn winner_same_player_twice() {
        let cli = Cli::try_parse_from([
            "showdown",
            "winner",
            "Noor=9h,10s,4h,Jc,6c",
            "Kunai=Ah,Qh,Kh,10h,Jh",
            "Noor=2h,2s,4c,5d,7h",
        ])
        .unwrap();

        let err = run(cli).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DealError>(),
            Some(&DealError::DuplicatePlayer("Noor".to_string()))
        );
    }

    #[test]
    fn deal_shuffles_option() {
        let args = ["showdown", "deal", "--shuffles", "3", "--seed", "9"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Deal { shuffles: 3, .. }));
        assert!(run(cli).is_ok());
    }
}
