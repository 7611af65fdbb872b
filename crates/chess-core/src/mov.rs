//! Move representation.

use crate::{PieceKind, Square};
use std::fmt;

/// A chess move: source square, destination square and an optional
/// promotion kind.
///
/// The promotion kind, when present, is always one of queen, rook, bishop or
/// knight. Move generation only ever produces queen promotions; the wider
/// domain exists so callers can describe any promotion.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a move without promotion.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a promoting move.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is a pawn or a king.
    #[inline]
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        assert!(kind.is_promotion_target(), "invalid promotion kind");
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the promotion kind, if any.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Returns true if this move promotes a pawn.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }

    /// Parses a move from UCI notation.
    ///
    /// Only the text is checked; whether the move is legal depends on a
    /// board and is the caller's business.
    pub fn from_uci(s: &str) -> Option<Self> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        if s.len() == 5 {
            let kind = PieceKind::from_char(s.chars().nth(4)?)?;
            if !kind.is_promotion_target() {
                return None;
            }
            Some(Move::promoting(from, to, kind))
        } else {
            Some(Move::new(from, to))
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
