//! King move generation
//!
//! Kings move one square in any direction (horizontally, vertically, or
//! diagonally), onto an empty square or an enemy piece.
//!
//! Castling is not generated here: it depends on castling rights and on which
//! squares the opponent attacks, see [`super::castle`].

use super::generate_step_moves;
use crate::chess_move::Move;
use crate::constants::KING_OFFSETS;
use crate::types::*;

/// Generate king moves from a given square, castling excluded
pub fn generate_king_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_step_moves(board, from, color, &KING_OFFSETS, moves);
}
