//! Attack detection and square checking
//!
//! Provides the query behind check detection and castling legality: is a
//! square attacked by any piece of a given colour?
//!
//! ## Algorithm
//!
//! Iterate through all pieces of the attacking colour and ask whether each can
//! reach the target square in one move. This answers the same question as
//! "generate every opponent move and compare destinations", with two
//! differences that both follow the rules of chess:
//!
//! - a pawn attacks only its two forward diagonals, never the square in front
//!   of it
//! - a square occupied by the attacker's own piece still counts as attacked
//!   (it is defended), which matters only for pieces, never for the empty
//!   castling squares or the king's own square

use crate::board::*;
use crate::constants::{KING_OFFSETS, KNIGHT_OFFSETS};
use crate::types::*;

/// Check if a square is under attack by pieces of the specified color
///
/// This function determines if any piece of `by_color` can attack the target
/// square. It's used for:
/// - Check detection (is the king attacked?)
/// - Castling (is the king passing through an attacked square?)
///
/// # Arguments
///
/// * `board` - Current piece placement
/// * `square` - Target square to check
/// * `by_color` - Color of pieces that might attack
///
/// # Returns
///
/// `true` if the square is attacked by any piece of the specified color
///
/// # Examples
///
/// ```rust,ignore
/// // Is e4 attacked by Black?
/// let attacked = is_square_attacked(&board, Square::new(4, 4), Color::Black);
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    all_squares().any(|from| match piece_at(board, from) {
        Some(piece) if piece.color == by_color => can_piece_attack(board, from, piece, square),
        _ => false,
    })
}

fn can_piece_attack(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => can_pawn_attack(from, target, piece.color),
        PieceKind::Knight => can_step_attack(from, target, &KNIGHT_OFFSETS),
        PieceKind::Bishop => can_slide_attack(board, from, target, true),
        PieceKind::Rook => can_slide_attack(board, from, target, false),
        PieceKind::Queen => {
            can_slide_attack(board, from, target, true) || can_slide_attack(board, from, target, false)
        }
        PieceKind::King => can_step_attack(from, target, &KING_OFFSETS),
    }
}

/// Pawns attack one square diagonally forward
fn can_pawn_attack(from: Square, target: Square, color: Color) -> bool {
    let dir = color.pawn_direction();
    from.offset(dir, -1) == Some(target) || from.offset(dir, 1) == Some(target)
}

fn can_step_attack(from: Square, target: Square, offsets: &[(i8, i8)]) -> bool {
    offsets
        .iter()
        .any(|&(d_row, d_col)| from.offset(d_row, d_col) == Some(target))
}

/// Check whether a slider reaches `target` along an unblocked line
///
/// `diagonal` selects bishop geometry; otherwise rook geometry.
fn can_slide_attack(board: &Board, from: Square, target: Square, diagonal: bool) -> bool {
    if from == target {
        return false;
    }

    let d_row = target.row as i8 - from.row as i8;
    let d_col = target.col as i8 - from.col as i8;

    let aligned = if diagonal {
        d_row.abs() == d_col.abs()
    } else {
        d_row == 0 || d_col == 0
    };
    if !aligned {
        return false;
    }

    let step = (d_row.signum(), d_col.signum());
    let mut current = from;
    while let Some(next) = current.offset(step.0, step.1) {
        if next == target {
            return true;
        }
        if !is_empty(board, next) {
            return false; // Path is blocked
        }
        current = next;
    }

    false
}

/// Locate the king of `color` by scanning the board
///
/// [`Position`](crate::position::Position) caches king squares; this is used to
/// seed that cache when a position is assembled from a piece list.
pub fn find_king(board: &Board, color: Color) -> Option<Square> {
    all_squares().find(|sq| matches!(piece_at(board, *sq), Some(p) if p.is(color, PieceKind::King)))
}
