//! Turn-by-turn game management.
//!
//! [`Game`] sequences play on top of the stateless board functions: it
//! remembers whose turn it is, validates moves coming from outside, keeps
//! the move history and re-evaluates the status after every move so the
//! side now to move is never offered a turn in a finished game.

use crate::movegen::{is_in_check, legal_moves, legal_moves_from};
use crate::rules::{evaluate_status, GameStatus};
use crate::selector::choose_move;
use crate::{Board, MoveList};
use chess_core::{Color, FenError, FenParser, Move, PieceKind, Square};
use rand::Rng;
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// The move text could not be parsed.
    #[error("invalid move notation: {0}")]
    InvalidMove(String),
    /// The game has already ended.
    #[error("game is over: {0}")]
    GameOver(GameStatus),
}

/// A game in progress: current board, side to move and history.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
    moves: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Color::White)
    }

    /// Creates a game from an arbitrary board. The status is evaluated
    /// immediately, so a game may start already finished.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            status: evaluate_status(&board, side_to_move),
            moves: Vec::new(),
        }
    }

    /// Creates a game from a FEN string, honouring its active color field.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Self::from_board(
            Board::from_placement(parsed.placement),
            parsed.active_color,
        ))
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the most recent move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Returns every move played so far.
    pub fn history(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        is_in_check(&self.board, self.side_to_move)
    }

    /// Returns the king square of the side to move when it is in check.
    pub fn checked_king(&self) -> Option<Square> {
        if self.is_check() {
            self.board.find_king(self.side_to_move)
        } else {
            None
        }
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        legal_moves(&self.board, self.side_to_move)
    }

    /// Returns the legal moves of the piece on `from`.
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        legal_moves_from(&self.board, self.side_to_move, from)
    }

    /// Plays `m` for the side to move after checking it is legal.
    ///
    /// A pawn move to the last row given without a promotion kind is taken
    /// as the queen promotion, the only one the engine generates.
    pub fn make_move(&mut self, m: Move) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }

        let legal = self.legal_moves();
        let matching = legal.iter().copied().find(|lm| {
            lm.from() == m.from()
                && lm.to() == m.to()
                && (lm.promotion() == m.promotion()
                    || (m.promotion().is_none() && lm.promotion() == Some(PieceKind::Queen)))
        });

        match matching {
            Some(legal_move) => {
                self.apply(legal_move);
                Ok(())
            }
            None => Err(GameError::IllegalMove(m.to_uci())),
        }
    }

    /// Plays a move given in UCI notation (e.g. "e2e4", "a7a8q").
    pub fn make_move_uci(&mut self, uci: &str) -> Result<(), GameError> {
        let m = Move::from_uci(uci).ok_or_else(|| GameError::InvalidMove(uci.to_string()))?;
        self.make_move(m)
    }

    /// Lets the greedy opponent play for the side to move and returns the
    /// move it played.
    ///
    /// An ongoing game always has a legal move, so the only failure is a
    /// game that has already ended.
    pub fn play_opponent<R>(&mut self, rng: &mut R) -> Result<Move, GameError>
    where
        R: Rng + ?Sized,
    {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }

        let m = choose_move(&self.board, self.side_to_move, rng)
            .ok_or(GameError::GameOver(self.status))?;
        self.apply(m);
        Ok(m)
    }

    /// Applies an already validated move and re-evaluates the status.
    fn apply(&mut self, m: Move) {
        let mover = self.side_to_move;
        self.board = self.board.apply_move(m);
        self.moves.push(m);
        self.side_to_move = mover.opposite();
        self.status = evaluate_status(&self.board, self.side_to_move);

        tracing::debug!(ply = self.moves.len(), %mover, mv = %m, "move played");
        if self.status.is_over() {
            tracing::info!(plies = self.moves.len(), status = %self.status, "game over");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.last_move(), None);
        assert!(!game.is_check());
    }

    #[test]
    fn moves_alternate_sides() {
        let mut game = Game::new();
        game.make_move_uci("e2e4").unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        game.make_move_uci("e7e5").unwrap();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.ply_count(), 2);
        assert_eq!(game.last_move(), Move::from_uci("e7e5"));
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn rejects_illegal_moves() {
        let mut game = Game::new();
        assert_eq!(
            game.make_move_uci("e2e5"),
            Err(GameError::IllegalMove("e2e5".to_string()))
        );
        // Black piece on White's turn.
        assert!(matches!(
            game.make_move_uci("e7e5"),
            Err(GameError::IllegalMove(_))
        ));
        assert!(matches!(
            game.make_move_uci("zz"),
            Err(GameError::InvalidMove(_))
        ));
        assert_eq!(game.ply_count(), 0);
        assert_eq!(*game.board(), Board::initial());
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = Game::new();
        for uci in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.make_move_uci(uci).unwrap();
        }
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
        assert!(game.is_over());
        assert_eq!(game.checked_king(), Some(sq("e1")));
        assert_eq!(
            game.make_move_uci("a2a3"),
            Err(GameError::GameOver(game.status()))
        );
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            game.play_opponent(&mut rng),
            Err(GameError::GameOver(_))
        ));
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let mut game = Game::from_fen("4k3/P7/8/8/8/8/8/4K3 w").unwrap();
        game.make_move_uci("a7a8").unwrap();
        assert_eq!(game.last_move().unwrap().promotion(), Some(PieceKind::Queen));
        assert_eq!(
            game.board().piece_at(sq("a8")).map(|p| p.kind),
            Some(PieceKind::Queen)
        );
    }

    #[test]
    fn underpromotion_is_rejected() {
        let mut game = Game::from_fen("4k3/P7/8/8/8/8/8/4K3 w").unwrap();
        assert!(matches!(
            game.make_move_uci("a7a8n"),
            Err(GameError::IllegalMove(_))
        ));
    }

    #[test]
    fn from_fen_respects_active_color() {
        let game = Game::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b").unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn finished_position_is_detected_on_creation() {
        let game = Game::from_fen("7k/8/8/8/8/8/2q5/K7 w").unwrap();
        assert_eq!(game.status(), GameStatus::Stalemate);
        assert_eq!(game.checked_king(), None);
    }

    #[test]
    fn opponent_without_a_move_reports_game_over() {
        let mut game = Game::from_fen("7k/8/8/8/8/8/2q5/K7 w").unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            game.play_opponent(&mut rng),
            Err(GameError::GameOver(GameStatus::Stalemate))
        );
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn from_fen_rejects_bad_placement() {
        assert!(matches!(
            Game::from_fen("8/8/8 w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn legal_moves_from_selected_piece() {
        let game = Game::new();
        let moves = game.legal_moves_from(sq("g1"));
        assert_eq!(moves.len(), 2);
        assert!(game.legal_moves_from(sq("g8")).is_empty());
    }

    #[test]
    fn opponent_plays_legal_moves_until_the_end() {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(2024);
        while !game.is_over() && game.ply_count() < 200 {
            let before = *game.board();
            let legal = game.legal_moves();
            let played = game.play_opponent(&mut rng).unwrap();
            assert_eq!(game.last_move(), Some(played));
            assert!(legal.contains(&played));
            assert_eq!(*game.board(), before.apply_move(played));
        }
    }

    #[test]
    fn error_display() {
        assert_eq!(
            GameError::IllegalMove("e2e5".into()).to_string(),
            "illegal move: e2e5"
        );
        assert_eq!(
            GameError::GameOver(GameStatus::Stalemate).to_string(),
            "game is over: stalemate"
        );
    }
}
