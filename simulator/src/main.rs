//! Console driver for single-table roulette sessions.
//!
//! Builds one wheel, seats the scripted player, runs the requested number of
//! rounds, and prints the win/lose line for every resolved bet. Aggregates
//! are logged at the end and can optionally be written out as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use wheelhouse_engine::{
    loser_line, winner_line, BinBuilder, BinSelector, ChaChaSelector, Game, Passenger57,
    Resolution, Table, TableConfig, Wheel,
};

#[derive(Debug, Parser)]
#[command(
    name = "wheelhouse-simulator",
    about = "Runs scripted betting sessions against an American roulette table"
)]
struct Args {
    /// Rounds to play.
    #[arg(long, default_value_t = 10)]
    rounds: u64,

    /// Wheel seed for reproducible sessions; omit for OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Stake the player puts on Black each round.
    #[arg(long, default_value_t = Passenger57::DEFAULT_STAKE)]
    stake: u64,

    /// Smallest stake the table accepts.
    #[arg(long, default_value_t = 5)]
    minimum: u64,

    /// Cap on the total staked per round.
    #[arg(long, default_value_t = 500)]
    limit: u64,

    /// Write the session summary as JSON to this path.
    #[arg(long)]
    summary_path: Option<PathBuf>,
}

/// Aggregates for one finished session.
#[derive(Debug, Default, Serialize)]
struct SessionSummary {
    rounds: u64,
    bets_won: u64,
    bets_lost: u64,
    /// Full returns (stake plus profit) across all winning bets.
    total_returned: u64,
    /// Stakes forfeited across all losing bets.
    total_forfeited: u64,
    total_wagered: u64,
    net: i64,
    house_edge: f64,
}

impl SessionSummary {
    fn record(&mut self, resolution: &Resolution) {
        self.total_wagered = self.total_wagered.saturating_add(resolution.bet.amount());
        if resolution.won {
            self.bets_won += 1;
            self.total_returned = self.total_returned.saturating_add(resolution.payout);
        } else {
            self.bets_lost += 1;
            self.total_forfeited = self.total_forfeited.saturating_add(resolution.payout);
        }
    }

    fn finish(&mut self) {
        self.net = self.total_returned as i64 - self.total_wagered as i64;
        self.house_edge = if self.total_wagered == 0 {
            0.0
        } else {
            -(self.net as f64) / self.total_wagered as f64
        };
    }
}

fn run(args: &Args, selector: Box<dyn BinSelector>) -> Result<SessionSummary> {
    let mut wheel = Wheel::new(selector);
    BinBuilder::build(&mut wheel);

    let table = Table::new(TableConfig {
        minimum: args.minimum,
        limit: args.limit,
    });
    let mut game = Game::new(wheel, table);
    let mut player = Passenger57::with_stake(game.wheel(), args.stake)
        .context("wheel is missing the Black outcome")?;

    let mut summary = SessionSummary {
        rounds: args.rounds,
        ..SessionSummary::default()
    };
    for _ in 0..args.rounds {
        let resolutions = game.cycle(&mut player)?;
        for resolution in &resolutions {
            if resolution.won {
                println!("{}", winner_line(&resolution.bet));
            } else {
                println!("{}", loser_line(&resolution.bet));
            }
            summary.record(resolution);
        }
    }
    summary.finish();
    Ok(summary)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let selector: Box<dyn BinSelector> = match args.seed {
        Some(seed) => Box::new(ChaChaSelector::seeded(seed)),
        None => Box::new(ChaChaSelector::from_entropy()),
    };

    let summary = run(&args, selector)?;
    info!(
        rounds = summary.rounds,
        bets_won = summary.bets_won,
        bets_lost = summary.bets_lost,
        net = summary.net,
        house_edge = summary.house_edge,
        "session complete"
    );

    if let Some(path) = &args.summary_path {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(path, json)
            .with_context(|| format!("write summary to {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wheelhouse_engine::mocks::FixedSelector;

    fn args(rounds: u64, seed: Option<u64>) -> Args {
        let mut argv = vec!["wheelhouse-simulator".to_string(), format!("--rounds={rounds}")];
        if let Some(seed) = seed {
            argv.push(format!("--seed={seed}"));
        }
        Args::parse_from(argv)
    }

    #[test]
    fn parses_session_flags() {
        let parsed = Args::parse_from([
            "wheelhouse-simulator",
            "--rounds",
            "25",
            "--seed",
            "7",
            "--stake",
            "10",
            "--limit",
            "200",
        ]);
        assert_eq!(parsed.rounds, 25);
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.stake, 10);
        assert_eq!(parsed.minimum, 5);
        assert_eq!(parsed.limit, 200);
    }

    #[test]
    fn every_round_is_accounted_for() {
        let summary = run(&args(40, Some(1)), Box::new(ChaChaSelector::seeded(1))).unwrap();
        assert_eq!(summary.rounds, 40);
        assert_eq!(summary.bets_won + summary.bets_lost, 40);
        assert_eq!(summary.total_wagered, 40 * 5);
        assert_eq!(
            summary.net,
            summary.total_returned as i64 - summary.total_wagered as i64
        );
    }

    #[test]
    fn scripted_black_pocket_wins_every_round() {
        // Pocket 2 is black, so the player's even-money bet always pays 10.
        let summary = run(&args(8, None), Box::new(FixedSelector::new(vec![2]))).unwrap();
        assert_eq!(summary.bets_won, 8);
        assert_eq!(summary.bets_lost, 0);
        assert_eq!(summary.total_returned, 8 * 10);
        assert_eq!(summary.net, 8 * 5);
        assert!((summary.house_edge + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_serializes_to_json() {
        let summary = run(&args(5, Some(3)), Box::new(ChaChaSelector::seeded(3))).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        std::fs::write(&path, serde_json::to_string_pretty(&summary).unwrap()).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["rounds"], 5);
        assert_eq!(
            parsed["bets_won"].as_u64().unwrap() + parsed["bets_lost"].as_u64().unwrap(),
            5
        );
    }
}
