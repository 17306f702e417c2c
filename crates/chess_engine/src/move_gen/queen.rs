//! Queen move generation
//!
//! Handles queen-specific move generation. Queens combine the movement patterns
//! of bishops and rooks, making them the most powerful piece on the board.
//!
//! ## Queen Movement Rules
//!
//! - Queens move like bishops (diagonally) OR rooks (horizontally/vertically)
//! - Cannot jump over pieces
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use super::bishop;
use super::rook;
use crate::chess_move::Move;
use crate::types::*;

/// Generate queen moves from a given square
///
/// Diagonal moves come first, then orthogonal ones.
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_queen_moves(&board, Square::new(7, 3), Color::White, &mut moves);
/// ```
pub fn generate_queen_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    bishop::generate_bishop_moves(board, from, color, moves);
    rook::generate_rook_moves(board, from, color, moves);
}
