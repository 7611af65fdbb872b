//! Board square representation.

use std::fmt;

/// A square on the chess board, addressed by (row, column).
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's (rank 1).
/// Column 0 is the a-file. Both coordinates are always in `0..8`; the
/// constructors enforce this, so every `Square` in circulation is on the
/// board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..8`. Out-of-range
    /// coordinates are a caller bug; use [`Square::try_new`] for untrusted
    /// input.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates out of range");
        Square { row, col }
    }

    /// Creates a square, returning `None` if it is off the board.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square {
            row: b'8' - rank,
            col: file - b'a',
        })
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square displaced by `(dr, dc)`, or `None` if that leaves
    /// the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, 8 - self.row)
    }

    /// Iterates over all 64 squares, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|i| Square {
            row: i / 8,
            col: i % 8,
        })
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
