//! Knight move generation
//!
//! Handles knight-specific move generation. Knights move in an L-shape pattern:
//! 2 squares in one direction, then 1 square perpendicular (or vice versa).
//!
//! ## Knight Movement Rules
//!
//! - Knights can jump over pieces (unlike sliding pieces)
//! - 8 possible destinations from most squares (fewer near edges)
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use super::generate_step_moves;
use crate::chess_move::Move;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::*;

/// Generate knight moves from a given square
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_knight_moves(&init_board(), Square::new(7, 1), Color::White, &mut moves);
/// // Moves now contains b1-a3 and b1-c3
/// ```
pub fn generate_knight_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_step_moves(board, from, color, &KNIGHT_OFFSETS, moves);
}
