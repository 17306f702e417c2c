//! Board utilities and helper functions
//!
//! Provides fundamental board operations used throughout the engine:
//! - Starting layout
//! - Square queries
//! - Plain-text diagrams for logs and debugging

use crate::constants::{BACK_RANK, BOARD_SIZE};
use crate::types::*;

/// Board with no pieces on it
pub const EMPTY_BOARD: Board = [[None; BOARD_SIZE]; BOARD_SIZE];

/// Initialize a game board to standard starting position
pub fn init_board() -> Board {
    let mut board = EMPTY_BOARD;

    for color in [Color::White, Color::Black] {
        let home = color.home_row() as usize;
        let pawns = color.pawn_start_row() as usize;
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board[home][col] = Some(Piece::new(color, *kind));
            board[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
        }
    }

    board
}

/// Get piece at square
#[inline]
pub fn piece_at(board: &Board, square: Square) -> Option<Piece> {
    board[square.row as usize][square.col as usize]
}

#[inline]
pub fn set_piece(board: &mut Board, square: Square, piece: Option<Piece>) {
    board[square.row as usize][square.col as usize] = piece;
}

/// Check if square is empty
#[inline]
pub fn is_empty(board: &Board, square: Square) -> bool {
    piece_at(board, square).is_none()
}

/// Check if the square holds a piece of `color`
#[inline]
pub fn piece_belongs_to(board: &Board, square: Square, color: Color) -> bool {
    matches!(piece_at(board, square), Some(piece) if piece.color == color)
}

/// Iterate every square, row 0 first
pub fn all_squares() -> impl Iterator<Item = Square> {
    (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square::new(row, col)))
}

/// Render as an 8-line diagram, rank 8 at the top, `.` for empty squares
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE * 2 + 3));
    for (row, cells) in board.iter().enumerate() {
        out.push((b'8' - row as u8) as char);
        out.push(' ');
        for cell in cells {
            out.push(cell.map_or('.', Piece::symbol));
            out.push(' ');
        }
        out.pop();
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");
    out
}
