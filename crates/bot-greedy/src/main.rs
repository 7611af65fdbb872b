//! Greedy bot self-play runner.
//!
//! Plays headless games between the greedy opponent and/or a random mover
//! and reports the results as text or JSON lines.

mod config;
mod runner;

use anyhow::Context;
use clap::Parser;
use config::GreedyConfig;
use rand::Rng;
use runner::{play_game, MatchSettings, MatchSummary, PlayerKind};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Greedy bot self-play runner.
#[derive(Parser)]
#[command(name = "bot-greedy")]
#[command(about = "Plays self-play games with the greedy chess opponent")]
struct Args {
    /// Path to the TOML configuration file (optional)
    #[arg(long, default_value_os_t = GreedyConfig::default_path())]
    config: PathBuf,

    /// Number of games to play
    #[arg(long)]
    games: Option<u32>,

    /// Base seed; game i uses seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// Plies after which a game is abandoned as unfinished
    #[arg(long)]
    max_plies: Option<usize>,

    /// Player controlling White
    #[arg(long, value_enum)]
    white: Option<PlayerKind>,

    /// Player controlling Black
    #[arg(long, value_enum)]
    black: Option<PlayerKind>,

    /// Print one JSON object per game instead of text
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Resolves the match settings: command line over config file over defaults.
    fn settings(&self, config: GreedyConfig) -> MatchSettings {
        MatchSettings {
            games: self.games.unwrap_or(config.games),
            max_plies: self.max_plies.unwrap_or(config.max_plies),
            seed: self
                .seed
                .or(config.seed)
                .unwrap_or_else(|| rand::thread_rng().gen()),
            white: self.white.unwrap_or(config.white),
            black: self.black.unwrap_or(config.black),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = GreedyConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let settings = args.settings(config);

    tracing::info!(
        games = settings.games,
        seed = settings.seed,
        max_plies = settings.max_plies,
        white = %settings.white,
        black = %settings.black,
        "starting match"
    );

    let mut summary = MatchSummary::default();
    for index in 0..settings.games {
        let report = play_game(
            index,
            settings.game_seed(index),
            settings.white,
            settings.black,
            settings.max_plies,
        )
        .with_context(|| format!("game {} failed", index + 1))?;

        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", report);
        }
        summary.record(&report);
    }

    if !args.json {
        println!("{}", summary);
    }
    tracing::info!(%summary, "match complete");
    Ok(())
}
