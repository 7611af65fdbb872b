//! Chess rules engine with a greedy one-ply opponent.
//!
//! This crate provides:
//! - [`Board`] - 8x8 mailbox board as a `Copy` value with pure transitions
//! - Pseudo-legal and legal move generation
//! - Attack and check detection independent of move generation
//! - [`GameStatus`] evaluation (ongoing, checkmate, stalemate)
//! - [`choose_move`] - greedy material-capture move selection
//! - [`Game`] - turn-by-turn game management with history tracking
//!
//! # Rules
//!
//! Pieces move as in standard chess with these simplifications: no castling,
//! no en passant, pawns always promote to a queen, and there are no draw
//! rules beyond stalemate.
//!
//! # Example
//!
//! ```
//! use chess_engine::{choose_move, evaluate_status, legal_moves, Board, Game, GameStatus};
//! use chess_core::Color;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! // Using Board directly (stateless)
//! let board = Board::initial();
//! assert_eq!(legal_moves(&board, Color::White).len(), 20);
//! assert_eq!(evaluate_status(&board, Color::White), GameStatus::Ongoing);
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let m = choose_move(&board, Color::White, &mut rng).unwrap();
//! let next = board.apply_move(m);
//! assert_ne!(next, board);
//!
//! // Using Game for turn management
//! let mut game = Game::new();
//! game.make_move_uci("e2e4").unwrap();
//! game.play_opponent(&mut rng).unwrap();
//! assert_eq!(game.ply_count(), 2);
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;
pub mod selector;

pub use board::{apply_move, Board};
pub use game::{Game, GameError};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{
    is_in_check, legal_moves, legal_moves_from, pseudo_legal_moves, square_attacked_by, MoveList,
};
pub use rules::{evaluate_status, GameStatus};
pub use selector::{choose_move, choose_random_move, score_move};
