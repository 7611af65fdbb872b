//! Game status evaluation.

use crate::movegen::{is_in_check, legal_moves};
use crate::Board;
use chess_core::Color;
use std::fmt;

/// Status of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    Ongoing,
    /// The side to move is in check with no legal move.
    Checkmate { winner: Color },
    /// The side to move is not in check but has no legal move.
    Stalemate,
}

impl GameStatus {
    /// Returns true if the game cannot continue.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Returns the winner, if the game ended in checkmate.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Classifies `board` for `color` to move.
pub fn evaluate_status(board: &Board, color: Color) -> GameStatus {
    if !legal_moves(board, color).is_empty() {
        GameStatus::Ongoing
    } else if is_in_check(board, color) {
        GameStatus::Checkmate {
            winner: color.opposite(),
        }
    } else {
        GameStatus::Stalemate
    }
}
