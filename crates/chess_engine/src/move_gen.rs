//! Pseudo-legal move generation
//!
//! Walks the board and, for every piece of the requested colour, dispatches on
//! [`PieceKind`] to a per-piece generator. The dispatch is a closed `match`,
//! so adding a piece kind is a compile error until every generator handles it.
//!
//! Moves produced here may leave the mover's own king attacked. Filtering them
//! is [`Position::legal_moves`](crate::position::Position::legal_moves)'s job.
//! Castling is generated separately by [`castle::generate_castle_moves`]
//! because it needs castling rights and attack information.

pub mod attack;
pub mod bishop;
pub mod castle;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
mod sliding;


pub use attack::is_square_attacked;

use crate::board::*;
use crate::chess_move::Move;
use crate::constants::MAX_MOVES;
use crate::types::*;

/// Generate every pseudo-legal move for `color`, castling excluded
///
/// # Arguments
///
/// * `board` - Current piece placement
/// * `color` - Side whose moves are generated
/// * `en_passant` - Square a pawn may capture onto en passant, if any
///
/// # Examples
///
/// ```rust,ignore
/// let board = init_board();
/// let moves = generate_pseudo_legal_moves(&board, Color::White, None);
/// assert_eq!(moves.len(), 20);
/// ```
pub fn generate_pseudo_legal_moves(
    board: &Board,
    color: Color,
    en_passant: Option<Square>,
) -> Vec<Move> {
    let mut moves = Vec::with_capacity(MAX_MOVES);

    for from in all_squares() {
        match piece_at(board, from) {
            Some(piece) if piece.color == color => {
                generate_piece_moves(board, from, piece, en_passant, &mut moves);
            }
            _ => {}
        }
    }

    moves
}

/// Append the pseudo-legal moves of the single `piece` standing on `from`
pub fn generate_piece_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant: Option<Square>,
    moves: &mut Vec<Move>,
) {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, color, en_passant, moves),
        PieceKind::Knight => knight::generate_knight_moves(board, from, color, moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(board, from, color, moves),
        PieceKind::Rook => rook::generate_rook_moves(board, from, color, moves),
        PieceKind::Queen => queen::generate_queen_moves(board, from, color, moves),
        PieceKind::King => king::generate_king_moves(board, from, color, moves),
    }
}

/// Shared by knight and king: keep each offset that lands on the board on a
/// square not held by a friendly piece.
pub(crate) fn generate_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };

        if !piece_belongs_to(board, to, color) {
            moves.push(Move::new(from, to, board));
        }
    }
}
