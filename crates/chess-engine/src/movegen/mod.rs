//! Move generation.
//!
//! Pseudo-legal moves are generated square by square by walking offsets
//! and rays on the board. Legal moves are the pseudo-legal ones that do not
//! leave the mover's own king in check, found by playing each move on a
//! copy of the board.

mod attacks;
pub mod perft;

use crate::Board;
use chess_core::{Color, Move, PieceKind, Square};

pub use attacks::{is_in_check, square_attacked_by};
use attacks::{DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS};

/// An ordered list of moves.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Typical upper bound on moves in a position, used as initial capacity.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(Self::MAX_MOVES),
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Iterates over the moves in generation order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns true if `m` is in the list.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates every pseudo-legal move for `color`.
///
/// Moves follow each piece's movement pattern and board occupancy but may
/// leave the mover's king in check. Castling and en passant are never
/// produced; pawns reaching the last row always promote to a queen.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();

    for (from, piece) in board.pieces_of(color) {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(board, from, color, &mut moves),
            PieceKind::Knight => {
                generate_step_moves(board, from, color, &KNIGHT_OFFSETS, &mut moves)
            }
            PieceKind::Bishop => generate_slider_moves(board, from, color, &DIAGONALS, &mut moves),
            PieceKind::Rook => generate_slider_moves(board, from, color, &ORTHOGONALS, &mut moves),
            PieceKind::Queen => {
                generate_slider_moves(board, from, color, &DIAGONALS, &mut moves);
                generate_slider_moves(board, from, color, &ORTHOGONALS, &mut moves);
            }
            PieceKind::King => {
                generate_step_moves(board, from, color, &KING_OFFSETS, &mut moves)
            }
        }
    }

    moves
}

/// Generates all legal moves for `color`.
pub fn legal_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = pseudo_legal_moves(board, color);
    moves.retain(|m| !is_in_check(&board.apply_move(*m), color));
    moves
}

/// Generates the legal moves for `color` that start on `from`.
pub fn legal_moves_from(board: &Board, color: Color, from: Square) -> MoveList {
    let mut moves = legal_moves(board, color);
    moves.retain(|m| m.from() == from);
    moves
}

/// Returns true if `target` is empty or holds a piece opposing `color`.
#[inline]
fn can_land(board: &Board, target: Square, color: Color) -> bool {
    !board.piece_at(target).is_some_and(|p| p.color == color)
}

/// Pushes a pawn move, promoting to a queen on the last row.
fn push_pawn_move(from: Square, to: Square, color: Color, moves: &mut MoveList) {
    if to.row() == color.promotion_row() {
        moves.push(Move::promoting(from, to, PieceKind::Queen));
    } else {
        moves.push(Move::new(from, to));
    }
}

/// Generates pseudo-legal pawn moves from `from`.
fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    let dir = color.forward();

    // Single push, then double push from the starting row
    if let Some(one) = from.offset(dir, 0).filter(|&s| board.piece_at(s).is_none()) {
        push_pawn_move(from, one, color, moves);

        if from.row() == color.pawn_start_row() {
            if let Some(two) = one.offset(dir, 0).filter(|&s| board.piece_at(s).is_none()) {
                moves.push(Move::new(from, two));
            }
        }
    }

    // Captures (left and right)
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if board.piece_at(to).is_some_and(|p| p.is_enemy_of(color)) {
                push_pawn_move(from, to, color, moves);
            }
        }
    }
}

/// Generates single-step moves (knight and king) from `from`.
fn generate_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            if can_land(board, to, color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

/// Generates sliding moves along each of `directions` from `from`.
fn generate_slider_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in directions {
        let mut current = from.offset(dr, dc);
        while let Some(to) = current {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(piece) => {
                    if piece.is_enemy_of(color) {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    fn targets(moves: &MoveList) -> Vec<String> {
        let mut out: Vec<_> = moves.iter().map(|m| m.to().to_algebraic()).collect();
        out.sort();
        out
    }

    #[test]
    fn movelist_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        let m1 = Move::new(sq("e2"), sq("e4"));
        let m2 = Move::new(sq("d2"), sq("d4"));
        list.push(m1);
        list.push(m2);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], m1);
        assert_eq!(list[1], m2);
        assert!(list.contains(&m2));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![m1, m2]);
    }

    #[test]
    fn movelist_retain() {
        let mut list: MoveList = [
            Move::new(sq("e2"), sq("e3")),
            Move::new(sq("e2"), sq("e4")),
            Move::new(sq("e3"), sq("e4")),
        ]
        .into_iter()
        .collect();

        list.retain(|m| m.from() == sq("e2"));
        assert_eq!(list.len(), 2);

        list.retain(|m| m.to() == sq("h8"));
        assert!(list.is_empty());
    }

    #[test]
    fn startpos_has_twenty_moves() {
        let b = Board::initial();
        assert_eq!(legal_moves(&b, Color::White).len(), 20);
        assert_eq!(legal_moves(&b, Color::Black).len(), 20);
        assert_eq!(pseudo_legal_moves(&b, Color::White).len(), 20);
    }

    #[test]
    fn pawn_pushes() {
        let b = Board::initial();
        let moves = legal_moves_from(&b, Color::White, sq("e2"));
        assert_eq!(targets(&moves), vec!["e3", "e4"]);

        let moves = legal_moves_from(&b, Color::Black, sq("d7"));
        assert_eq!(targets(&moves), vec!["d5", "d6"]);
    }

    #[test]
    fn pawn_double_push_needs_both_squares_empty() {
        // Knight on e3 blocks both pushes; knight on d4 blocks only the double.
        let b = board("4k3/8/8/8/3n4/4n3/3PP3/4K3");
        assert!(legal_moves_from(&b, Color::White, sq("e2")).is_empty());
        assert_eq!(
            targets(&pseudo_legal_moves_from(&b, Color::White, sq("d2"))),
            vec!["d3", "e3"]
        );
    }

    fn pseudo_legal_moves_from(b: &Board, color: Color, from: Square) -> MoveList {
        let mut moves = pseudo_legal_moves(b, color);
        moves.retain(|m| m.from() == from);
        moves
    }

    #[test]
    fn pawn_captures_only_enemies() {
        let b = board("4k3/8/8/2p1P3/3P4/8/8/4K3");
        assert_eq!(
            targets(&pseudo_legal_moves_from(&b, Color::White, sq("d4"))),
            vec!["c5", "d5"]
        );
    }

    #[test]
    fn promotion_always_queen() {
        let b = board("1r2k3/P7/8/8/8/8/8/4K3");
        let moves = legal_moves_from(&b, Color::White, sq("a7"));
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.promotion() == Some(PieceKind::Queen)));
        assert_eq!(targets(&moves), vec!["a8", "b8"]);
    }

    #[test]
    fn black_promotes_on_row_seven() {
        let b = board("4k3/8/8/8/8/8/p7/4K3");
        let moves = legal_moves_from(&b, Color::Black, sq("a2"));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to_uci(), "a2a1q");
    }

    #[test]
    fn knight_moves_from_corner() {
        let b = board("4k3/8/8/8/8/8/8/N3K3");
        assert_eq!(
            targets(&legal_moves_from(&b, Color::White, sq("a1"))),
            vec!["b3", "c2"]
        );
    }

    #[test]
    fn rook_rays_stop_at_blockers() {
        // Own pawn on a4 blocks, enemy knight on c1 is captured.
        let b = board("4k3/8/8/8/P7/8/8/R1n1K3");
        assert_eq!(
            targets(&pseudo_legal_moves_from(&b, Color::White, sq("a1"))),
            vec!["a2", "a3", "b1", "c1"]
        );
    }

    #[test]
    fn queen_moves_in_open_board() {
        let b = board("8/8/8/3Q4/8/8/8/8");
        assert_eq!(pseudo_legal_moves(&b, Color::White).len(), 27);
    }

    #[test]
    fn king_moves_skip_own_pieces() {
        let b = board("4k3/8/8/8/8/8/3P4/4K3");
        assert_eq!(
            targets(&legal_moves_from(&b, Color::White, sq("e1"))),
            vec!["d1", "e2", "f1", "f2"]
        );
    }

    #[test]
    fn no_castling_generated() {
        let b = board("r3k2r/8/8/8/8/8/8/R3K2R");
        let king_moves = legal_moves_from(&b, Color::White, sq("e1"));
        assert!(king_moves.iter().all(|m| m.to() != sq("g1") && m.to() != sq("c1")));
    }

    #[test]
    fn pinned_piece_cannot_move() {
        // Bishop on e2 is pinned by the rook on e8.
        let b = board("4r1k1/8/8/8/8/8/4B3/4K3");
        assert!(legal_moves_from(&b, Color::White, sq("e2")).is_empty());
        assert!(!pseudo_legal_moves_from(&b, Color::White, sq("e2")).is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let b = board("4k3/8/8/8/8/8/r7/4K3");
        assert_eq!(
            targets(&legal_moves_from(&b, Color::White, sq("e1"))),
            vec!["d1", "f1"]
        );
    }

    #[test]
    fn legal_moves_resolve_check() {
        let b = board("4k3/8/8/8/8/8/8/r3K2R");
        let moves = legal_moves(&b, Color::White);
        for m in &moves {
            assert!(!is_in_check(&b.apply_move(*m), Color::White), "{}", m);
        }
        assert!(moves.iter().all(|m| m.from() == sq("e1")));
    }

    #[test]
    fn moves_from_empty_or_enemy_square_are_empty() {
        let b = Board::initial();
        assert!(legal_moves_from(&b, Color::White, sq("e4")).is_empty());
        assert!(legal_moves_from(&b, Color::White, sq("e7")).is_empty());
    }
}
