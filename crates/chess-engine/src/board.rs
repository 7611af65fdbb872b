//! Board model.

use chess_core::{Color, FenError, FenParser, Move, Piece, PieceKind, Placement, Square};
use std::fmt;

/// Back rank file order, a-file first.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// `Board` is a plain `Copy` value. Every transition returns a fresh board
/// and leaves the source untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: Placement,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[Color::Black.back_rank() as usize][col] =
                Some(Piece::new(Color::Black, kind));
            board.squares[Color::Black.pawn_start_row() as usize][col] =
                Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[Color::White.pawn_start_row() as usize][col] =
                Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[Color::White.back_rank() as usize][col] =
                Some(Piece::new(Color::White, kind));
        }
        board
    }

    /// Creates a board from a parsed placement grid.
    pub const fn from_placement(squares: Placement) -> Self {
        Board { squares }
    }

    /// Creates a board from a FEN string. Only the piece placement is used.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Self::from_placement(parsed.placement))
    }

    /// Returns the FEN piece placement field for this board.
    pub fn to_fen(&self) -> String {
        FenParser::placement_to_fen(&self.squares)
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Returns a copy of this board with `sq` set to `piece`.
    #[must_use]
    pub fn with_piece(&self, sq: Square, piece: Option<Piece>) -> Board {
        let mut board = *self;
        board.squares[sq.row() as usize][sq.col() as usize] = piece;
        board
    }

    /// Returns the square of `color`'s king, or `None` if it has none.
    ///
    /// A missing king only arises on hypothetical boards; callers treat it
    /// as a degenerate state rather than an error.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }

    /// Iterates over occupied squares, row by row from row 0.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |&(_, p)| p.color == color)
    }

    /// Returns the board after playing `m`.
    ///
    /// The piece on `from` moves to `to`, replacing whatever stood there. A
    /// pawn carrying a promotion becomes the promoted kind. Legality is not
    /// checked: the legality filter feeds pseudo-legal moves through here,
    /// and callers taking moves from outside must validate them first.
    #[must_use]
    pub fn apply_move(&self, m: Move) -> Board {
        let mut board = *self;
        let moving = self.piece_at(m.from());
        let placed = match (moving, m.promotion()) {
            (Some(piece), Some(kind)) if piece.kind == PieceKind::Pawn => {
                Some(Piece::new(piece.color, kind))
            }
            _ => moving,
        };
        board.squares[m.from().row() as usize][m.from().col() as usize] = None;
        board.squares[m.to().row() as usize][m.to().col() as usize] = placed;
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// Free-function form of [`Board::apply_move`].
#[inline]
pub fn apply_move(board: &Board, m: Move) -> Board {
    board.apply_move(m)
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = cell.map_or('.', Piece::to_fen_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
