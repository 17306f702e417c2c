//! Rook move generation
//!
//! Rooks slide along ranks and files any number of squares until blocked.
//! Their castling role is handled in [`super::castle`].

use super::sliding::generate_sliding_moves;
use crate::chess_move::Move;
use crate::constants::ROOK_DIRS;
use crate::types::*;

/// Generate rook moves from a given square
pub fn generate_rook_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_sliding_moves(board, from, color, &ROOK_DIRS, moves);
}
