//! FEN (Forsyth-Edwards Notation) parsing and serialization.
//!
//! Only the piece placement and active color fields carry meaning here.
//! Castling, en passant and the move clocks are not part of the rules this
//! workspace implements, so those fields are accepted and ignored.

use crate::{Color, Piece};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1 to 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// A piece placement grid indexed `[row][col]`, row 0 being rank 8.
pub type Placement = [[Option<Piece>; 8]; 8];

/// Parsed FEN data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Pieces by `[row][col]`.
    pub placement: Placement,
    /// Side to move; White when the field is absent.
    pub active_color: Color,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string. Trailing fields after the active color are
    /// ignored.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.is_empty() || parts.len() > 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placement = Self::parse_piece_placement(parts[0])?;

        let active_color = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(FenParser {
            placement,
            active_color,
        })
    }

    fn parse_piece_placement(placement: &str) -> Result<Placement, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut grid: Placement = [[None; 8]; 8];
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += skip as usize;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if col < 8 {
                        grid[row][col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - row,
                    col
                )));
            }
        }

        Ok(grid)
    }

    /// Serializes a placement grid into the FEN piece placement field.
    pub fn placement_to_fen(placement: &Placement) -> String {
        let mut fen = String::new();
        for (row, cells) in placement.iter().enumerate() {
            if row > 0 {
                fen.push('/');
            }
            let mut empty_count = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
        }
        fen
    }

    /// Converts the parsed FEN back to a two-field FEN string.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {}",
            Self::placement_to_fen(&self.placement),
            self.active_color.to_fen_char()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceKind;

    #[test]
    fn parse_startpos() {
        let fen = FenParser::parse(FenParser::STARTPOS).unwrap();
        assert_eq!(fen.active_color, Color::White);
        assert_eq!(
            fen.placement[0][4],
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(
            fen.placement[7][3],
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(fen.placement[4][4], None);
    }

    #[test]
    fn parse_placement_only() {
        let fen = FenParser::parse("8/8/8/8/8/8/2q5/K6k").unwrap();
        assert_eq!(fen.active_color, Color::White);
        assert_eq!(
            fen.placement[6][2],
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn roundtrip() {
        let original = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b";
        let parsed = FenParser::parse(original).unwrap();
        assert_eq!(parsed.to_fen(), original);
    }

    #[test]
    fn invalid_fen() {
        assert!(matches!(
            FenParser::parse(""),
            Err(FenError::InvalidPartCount(0))
        ));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(FenError::InvalidPartCount(7))
        ));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 x KQkq - 0 1"),
            Err(FenError::InvalidActiveColor(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_rank_count() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8 w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_invalid_char() {
        assert!(matches!(
            FenParser::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            FenParser::parse("9/8/8/8/8/8/8/8"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_wrong_squares() {
        assert!(matches!(
            FenParser::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            FenParser::parse("7/8/8/8/8/8/8/8"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::InvalidPartCount(7);
        assert!(format!("{}", err).contains("7"));

        let err = FenError::InvalidActiveColor("x".to_string());
        assert!(format!("{}", err).contains("x"));

        let err = FenError::InvalidPiecePlacement("bad".to_string());
        assert!(format!("{}", err).contains("bad"));
    }
}
