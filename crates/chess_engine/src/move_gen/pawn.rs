//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - En passant
//! - Promotion (flagged by [`Move`] construction, applied on execution)
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, onto an empty square
//! - **Double push**: from the start row, when both squares ahead are empty
//! - **Captures**: one square diagonally forward onto an enemy piece
//! - **En passant**: diagonally forward onto the en-passant target square left
//!   behind by an enemy pawn's double push
//! - **Promotion**: a pawn landing on the farthest row becomes a queen

use crate::board::*;
use crate::chess_move::Move;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `board` - Current piece placement
/// * `from` - Square of the pawn
/// * `color` - Color of the pawn
/// * `en_passant` - Current en-passant target, if any
/// * `moves` - Output vector to append valid moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&init_board(), Square::new(6, 4), Color::White, None, &mut moves);
/// // Moves now contains e2-e3 and e2-e4
/// ```
pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    en_passant: Option<Square>,
    moves: &mut Vec<Move>,
) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if is_empty(board, one) {
            moves.push(Move::new(from, one, board));

            if from.row == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if is_empty(board, two) {
                        moves.push(Move::new(from, two, board));
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };

        if piece_belongs_to(board, to, color.opponent()) {
            moves.push(Move::new(from, to, board));
        } else if en_passant == Some(to) {
            moves.push(Move::en_passant(from, to, board));
        }
    }
}
