//! Legal move generation and check detection
//!
//! ## Algorithm
//!
//! 1. Generate pseudo-legal moves for the side to move, then castling moves
//! 2. For each candidate: apply it, ask whether the mover's king is attacked,
//!    undo it; drop the candidate if the king was attacked
//! 3. No moves left: checkmate if the side to move is in check, otherwise
//!    stalemate
//!
//! Step 2 is the "make, test, unmake" approach: O(moves x attackers) per call,
//! but obviously correct. An incremental pin/check map would be faster and is
//! not needed for correctness.
//!
//! Because apply/undo are exact, the position is observably unchanged after
//! generation apart from the terminal flags.

use tracing::debug;

use super::Position;
use crate::chess_move::Move;
use crate::move_gen::castle::generate_castle_moves;
use crate::move_gen::{generate_pseudo_legal_moves, is_square_attacked};
use crate::types::*;

impl Position {
    /// Every move the side to move may legally play
    ///
    /// Sets the sticky checkmate / stalemate flag when the result is empty.
    /// Generation order: board order (a8 to h1) of the moving pieces, each
    /// piece's moves in generator order, castling last.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let moves = self.generate_legal_moves();

        if moves.is_empty() {
            if self.in_check() {
                self.checkmate = true;
                debug!(ply = self.ply(), "[POSITION] checkmate, {} to move", self.turn);
            } else {
                self.stalemate = true;
                debug!(ply = self.ply(), "[POSITION] stalemate, {} to move", self.turn);
            }
        }

        moves
    }

    /// Legal moves without touching the terminal flags
    pub(crate) fn generate_legal_moves(&mut self) -> Vec<Move> {
        let mover = self.turn;
        let mut moves = self.pseudo_legal_moves();
        generate_castle_moves(self, &mut moves);

        moves.retain(|mv| {
            self.apply(*mv);
            let exposes_king = self.is_king_attacked(mover);
            self.undo();
            !exposes_king
        });

        moves
    }

    /// Moves obeying piece movement rules, possibly leaving the king attacked
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        generate_pseudo_legal_moves(&self.board, self.turn, self.en_passant)
    }

    /// Whether the side to move is in check
    pub fn in_check(&self) -> bool {
        self.is_king_attacked(self.turn)
    }

    /// Whether the opponent of the side to move attacks `square`
    pub fn under_attack(&self, square: Square) -> bool {
        is_square_attacked(&self.board, square, self.turn.opponent())
    }

    fn is_king_attacked(&self, color: Color) -> bool {
        is_square_attacked(&self.board, self.king_square(color), color.opponent())
    }
}
