//! Core types for chess.
//!
//! This crate provides the fundamental value types shared by the engine and
//! its front ends:
//! - [`Color`], [`PieceKind`] and [`Piece`] for piece representation
//! - [`Square`] for (row, column) board coordinates
//! - [`Move`] for move representation
//! - FEN piece placement parsing and serialization

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser, Placement};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;
