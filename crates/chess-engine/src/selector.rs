//! Move selection for the computer opponent.
//!
//! The greedy opponent looks one ply ahead and nothing more: each legal move
//! is scored by the material it captures plus a bonus for promoting, and a
//! best-scoring move is picked at random. Randomness is supplied by the
//! caller, so a seeded generator makes every choice reproducible.

use crate::movegen::legal_moves;
use crate::Board;
use chess_core::{Color, Move, PieceKind};
use rand::seq::SliceRandom;
use rand::Rng;

/// Score of `m` for `color`: the value of any opposing piece on the
/// destination, plus a queen's value if the move promotes.
pub fn score_move(board: &Board, color: Color, m: Move) -> i32 {
    let capture = board
        .piece_at(m.to())
        .filter(|p| p.is_enemy_of(color))
        .map_or(0, |p| p.kind.value());
    let promotion = if m.is_promotion() {
        PieceKind::Queen.value()
    } else {
        0
    };
    capture + promotion
}

/// Chooses a move for `color` with the greedy material heuristic.
///
/// Returns `None` only when `color` has no legal move. When nothing captures
/// or promotes, the choice is uniform over all legal moves; otherwise it is
/// uniform over the moves attaining the best score.
pub fn choose_move<R>(board: &Board, color: Color, rng: &mut R) -> Option<Move>
where
    R: Rng + ?Sized,
{
    let legal = legal_moves(board, color);
    if legal.is_empty() {
        return None;
    }

    let mut best_score = i32::MIN;
    let mut best_moves: Vec<Move> = Vec::new();
    for &m in &legal {
        let score = score_move(board, color, m);
        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(m);
        } else if score == best_score {
            best_moves.push(m);
        }
    }

    let chosen = if best_score == 0 {
        legal.as_slice().choose(rng).copied()
    } else {
        best_moves.choose(rng).copied()
    };
    tracing::trace!(
        %color,
        candidates = legal.len(),
        best_score,
        tied = best_moves.len(),
        chosen = ?chosen,
        "greedy move chosen"
    );
    chosen
}

/// Chooses a legal move for `color` uniformly at random.
pub fn choose_random_move<R>(board: &Board, color: Color, rng: &mut R) -> Option<Move>
where
    R: Rng + ?Sized,
{
    legal_moves(board, color).as_slice().choose(rng).copied()
}
