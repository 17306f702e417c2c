//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction, step outward from the origin:
//! 1. Empty square: valid move, keep going
//! 2. Opponent piece: valid capture, then stop (inclusive)
//! 3. Own piece: stop before it (exclusive)
//! 4. Board edge: stop

use crate::board::*;
use crate::chess_move::Move;
use crate::types::*;

/// Ray-cast from `from` along each of `dirs`, appending every reachable square
pub(crate) fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_col) in dirs {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match piece_at(board, to) {
                None => moves.push(Move::new(from, to, board)),
                Some(piece) => {
                    if piece.color != color {
                        moves.push(Move::new(from, to, board));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
