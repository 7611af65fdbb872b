//! Attack detection.
//!
//! Attacks are read straight off the board by looking outward from the
//! target square. Nothing here generates moves, so legality filtering can
//! lean on these functions without recursing into the generator.

use crate::Board;
use chess_core::{Color, Piece, PieceKind, Square};

/// Knight jump offsets as (row, col) deltas.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// King step offsets.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Bishop ray directions.
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Rook ray directions.
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Returns true if any piece of `attacker` could capture on `sq` next move.
pub fn square_attacked_by(board: &Board, sq: Square, attacker: Color) -> bool {
    let holds = |target: Option<Square>, kind: PieceKind| {
        target.and_then(|t| board.piece_at(t)) == Some(Piece::new(attacker, kind))
    };

    // Pawns: an attacking pawn sits one step behind `sq` from its own point
    // of view, on an adjacent column.
    let behind = -attacker.forward();
    if [-1, 1]
        .into_iter()
        .any(|dc| holds(sq.offset(behind, dc), PieceKind::Pawn))
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(sq.offset(dr, dc), PieceKind::Knight))
    {
        return true;
    }

    if ray_hits(board, sq, attacker, &DIAGONALS, PieceKind::Bishop) {
        return true;
    }

    if ray_hits(board, sq, attacker, &ORTHOGONALS, PieceKind::Rook) {
        return true;
    }

    KING_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(sq.offset(dr, dc), PieceKind::King))
}

/// Walks each ray from `sq` to the first occupied square and reports whether
/// it holds an `attacker` piece of kind `slider` or a queen.
fn ray_hits(
    board: &Board,
    sq: Square,
    attacker: Color,
    directions: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    directions.iter().any(|&(dr, dc)| {
        let mut current = sq.offset(dr, dc);
        while let Some(target) = current {
            if let Some(piece) = board.piece_at(target) {
                return piece.color == attacker
                    && (piece.kind == slider || piece.kind == PieceKind::Queen);
            }
            current = target.offset(dr, dc);
        }
        false
    })
}

/// Returns true if `color`'s king is attacked.
///
/// A board without that king counts as check: such a position is illegal,
/// and treating it as unsafe keeps simulations conservative.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => square_attacked_by(board, king, color.opposite()),
        None => true,
    }
}
