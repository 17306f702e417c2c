//! Castling move generation
//!
//! Castling is a king move of two files toward a rook, with the rook jumping
//! to the square the king passed over. It is offered only when:
//!
//! - the side still holds the matching castling right
//! - the king is not currently attacked
//! - every square between king and rook is empty
//! - the squares the king crosses and lands on are not attacked
//!
//! Queenside has three squares between king and rook, but only the two next
//! to the king must be unattacked; the b-file square just has to be empty.
//!
//! The king and rook are also required to stand on their home squares. With
//! rights tracked by [`Position`] that always holds in play; the check keeps a
//! hand-built fixture with inconsistent rights from producing a castle.

use crate::board::*;
use crate::chess_move::Move;
use crate::constants::*;
use crate::position::Position;
use crate::types::*;

/// Append the castling moves available to the side to move
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_castle_moves(&position, &mut moves);
/// // e.g. e1g1 once f1 and g1 are clear
/// ```
pub fn generate_castle_moves(position: &Position, moves: &mut Vec<Move>) {
    let color = position.turn();
    let king = position.king_square(color);

    // can't castle out of check
    if position.under_attack(king) {
        return;
    }

    let rights = position.castling_rights();
    if rights.kingside(color) {
        generate_kingside_castle(position, king, color, moves);
    }
    if rights.queenside(color) {
        generate_queenside_castle(position, king, color, moves);
    }
}

fn generate_kingside_castle(position: &Position, king: Square, color: Color, moves: &mut Vec<Move>) {
    if !pieces_at_home(position.board(), king, color, KINGSIDE_ROOK_COL) {
        return;
    }

    let path = [Square::new(king.row, king.col + 1), Square::new(king.row, king.col + 2)];
    if path.iter().all(|sq| position.is_empty(*sq))
        && path.iter().all(|sq| !position.under_attack(*sq))
    {
        moves.push(Move::castle(king, path[1], position.board()));
    }
}

fn generate_queenside_castle(position: &Position, king: Square, color: Color, moves: &mut Vec<Move>) {
    if !pieces_at_home(position.board(), king, color, QUEENSIDE_ROOK_COL) {
        return;
    }

    let path = [
        Square::new(king.row, king.col - 1),
        Square::new(king.row, king.col - 2),
        Square::new(king.row, king.col - 3),
    ];
    if path.iter().all(|sq| position.is_empty(*sq))
        && path[..2].iter().all(|sq| !position.under_attack(*sq))
    {
        moves.push(Move::castle(king, path[1], position.board()));
    }
}

fn pieces_at_home(board: &Board, king: Square, color: Color, rook_col: u8) -> bool {
    let home = color.home_row();
    king == Square::new(home, KING_START_COL)
        && matches!(
            piece_at(board, Square::new(home, rook_col)),
            Some(p) if p.is(color, PieceKind::Rook)
        )
}
