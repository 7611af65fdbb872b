//! Self-play game execution.
//!
//! [`play_game`] drives a [`Game`] from the initial position, asking the
//! configured player for each side to move until the game ends or the ply
//! cap is reached.

use chess_core::Color;
use chess_engine::{choose_random_move, Game, GameError, GameStatus};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy used to pick moves for one side.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Greedy material capture with random tie-breaking.
    #[default]
    Greedy,
    /// Uniformly random legal move.
    Random,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Greedy => write!(f, "greedy"),
            PlayerKind::Random => write!(f, "random"),
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Stalemate,
    /// The ply cap was reached first.
    Unfinished,
}

impl GameOutcome {
    fn from_status(status: GameStatus) -> Self {
        match status {
            GameStatus::Checkmate {
                winner: Color::White,
            } => GameOutcome::WhiteWins,
            GameStatus::Checkmate {
                winner: Color::Black,
            } => GameOutcome::BlackWins,
            GameStatus::Stalemate => GameOutcome::Stalemate,
            GameStatus::Ongoing => GameOutcome::Unfinished,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::WhiteWins => write!(f, "checkmate, White wins"),
            GameOutcome::BlackWins => write!(f, "checkmate, Black wins"),
            GameOutcome::Stalemate => write!(f, "stalemate"),
            GameOutcome::Unfinished => write!(f, "unfinished"),
        }
    }
}

/// Resolved settings for a run of games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSettings {
    pub games: u32,
    pub max_plies: usize,
    pub seed: u64,
    pub white: PlayerKind,
    pub black: PlayerKind,
}

impl MatchSettings {
    /// Seed of game `index`, so any single game can be replayed alone.
    pub fn game_seed(&self, index: u32) -> u64 {
        self.seed.wrapping_add(u64::from(index))
    }
}

/// Record of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub index: u32,
    pub seed: u64,
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub outcome: GameOutcome,
    pub plies: usize,
    /// Moves in UCI notation.
    pub moves: Vec<String>,
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game {} (seed {}): {} vs {}, {} after {} plies",
            self.index + 1,
            self.seed,
            self.white,
            self.black,
            self.outcome,
            self.plies
        )
    }
}

/// Plays one game between `white` and `black` seeded with `seed`.
///
/// # Errors
///
/// Returns a [`GameError`] if the engine rejects a move it generated, which
/// indicates a bug rather than a user error.
pub fn play_game(
    index: u32,
    seed: u64,
    white: PlayerKind,
    black: PlayerKind,
    max_plies: usize,
) -> Result<GameReport, GameError> {
    let mut game = Game::new();
    let mut rng = StdRng::seed_from_u64(seed);

    while !game.is_over() && game.ply_count() < max_plies {
        let player = match game.side_to_move() {
            Color::White => white,
            Color::Black => black,
        };
        match player {
            PlayerKind::Greedy => {
                game.play_opponent(&mut rng)?;
            }
            PlayerKind::Random => {
                let m = choose_random_move(game.board(), game.side_to_move(), &mut rng)
                    .ok_or(GameError::GameOver(game.status()))?;
                game.make_move(m)?;
            }
        }
    }

    let outcome = GameOutcome::from_status(game.status());
    tracing::debug!(index, seed, %outcome, plies = game.ply_count(), "game finished");

    Ok(GameReport {
        index,
        seed,
        white,
        black,
        outcome,
        plies: game.ply_count(),
        moves: game.history().iter().map(|m| m.to_uci()).collect(),
    })
}

/// Running totals over a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub white_wins: u32,
    pub black_wins: u32,
    pub stalemates: u32,
    pub unfinished: u32,
}

impl MatchSummary {
    pub fn record(&mut self, report: &GameReport) {
        match report.outcome {
            GameOutcome::WhiteWins => self.white_wins += 1,
            GameOutcome::BlackWins => self.black_wins += 1,
            GameOutcome::Stalemate => self.stalemates += 1,
            GameOutcome::Unfinished => self.unfinished += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.white_wins + self.black_wins + self.stalemates + self.unfinished
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: White {} / Black {} / stalemate {} / unfinished {}",
            self.total(),
            self.white_wins,
            self.black_wins,
            self.stalemates,
            self.unfinished
        )
    }
}
